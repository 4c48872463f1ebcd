//! Spotify sign-in and top items backend
//!
//! This library implements a small web backend that walks a user through the
//! Spotify OAuth 2.0 authorization-code flow and then proxies a few read-only
//! Web API queries (profile, top artists, top tracks) with the access token the
//! browser hands back.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the routes exposed by the server
//! - `config` - Configuration loading from the environment and `.env` files
//! - `error` - Typed errors and their HTTP representations
//! - `server` - Router construction and the listening loop
//! - `spotify` - Outbound calls to the Spotify accounts service and Web API
//! - `types` - Data structures shared between handlers and the client
//! - `utils` - Small helpers for credentials and URL building

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the startup path where any error is fatal and only needs to be
/// reported, not matched on.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for startup failures where the server cannot continue.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
