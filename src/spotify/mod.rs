//! # Spotify Integration Module
//!
//! Outbound HTTP calls made by the backend. There are exactly two kinds:
//!
//! - [`auth`] - exchanging an authorization code at the accounts service token
//!   endpoint, authenticated with the client credentials
//! - [`client`] - forwarding a bearer-authenticated GET to the Web API and
//!   handing back the raw response
//!
//! Neither side retries, refreshes tokens or caches anything. Every failure is
//! terminal for the request in flight.

pub mod auth;
pub mod client;
