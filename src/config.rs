//! Configuration management for the backend.
//!
//! Values are read once at startup into an immutable [`Config`] which is then
//! shared with every handler. Sources, in order of priority:
//! 1. Environment variables
//! 2. `.env` in the working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/spotop/.env`)
//! 4. Built-in defaults (where applicable)

use std::{env, fmt, net::IpAddr, path::PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Loads `.env` files from the working directory and the local data directory.
///
/// `dotenv` never overrides variables that are already set, so the working
/// directory file wins over the data directory one and the real environment
/// wins over both. Missing files are skipped.
///
/// Returns the files that were actually loaded.
pub fn load_env() -> Vec<PathBuf> {
    load_env_from(&env_file_candidates())
}

/// Loads the given `.env` files in order, skipping the ones that don't exist.
///
/// A variable set by an earlier file, or already present in the process
/// environment, is left untouched by later files.
///
/// # Arguments
///
/// * `candidates` - Paths to try, highest priority first
///
/// # Example
///
/// ```
/// let loaded = load_env_from(&[PathBuf::from(".env"), PathBuf::from("/etc/spotop/.env")]);
/// ```
pub fn load_env_from(candidates: &[PathBuf]) -> Vec<PathBuf> {
    candidates
        .iter()
        .filter(|path| path.is_file())
        .filter(|path| dotenv::from_path(path).is_ok())
        .cloned()
        .collect()
}

/// Locations searched for a `.env` file, highest priority first.
pub fn env_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];

    if let Some(mut path) = dirs::data_local_dir() {
        path.push("spotop/.env");
        candidates.push(path);
    }

    candidates
}

/// Process-wide configuration, built once and never mutated by handlers.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub public_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Credentials are not validated: an unset `CLIENT_ID`, `CLIENT_SECRET` or
    /// `REDIRECT_URI` becomes an empty string. See [`Config::missing_credentials`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST
                .parse()
                .map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.to_string()))?,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            client_id: lookup("CLIENT_ID").unwrap_or_default(),
            client_secret: lookup("CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: lookup("REDIRECT_URI").unwrap_or_default(),
            auth_url: or_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: or_default("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            host,
            port,
            public_dir: PathBuf::from(or_default("PUBLIC_DIR", DEFAULT_PUBLIC_DIR)),
        })
    }

    /// Names of the credential variables that are empty.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("CLIENT_ID", &self.client_id),
            ("CLIENT_SECRET", &self.client_secret),
            ("REDIRECT_URI", &self.redirect_uri),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("public_dir", &self.public_dir)
            .finish()
    }
}
