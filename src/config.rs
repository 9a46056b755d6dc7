//! Listener configuration from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read `PORT` and `BIND_ADDR`. Unset means default; set but unparseable
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when either variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when either variable fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?,
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
        })
    }

    pub fn socket_addr(self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Load `.env` into the process environment. A missing file is normal in
/// production; any other problem is logged and the file skipped.
pub fn load_env_file() {
    report_env_file(dotenvy::dotenv().map(|_| ()));
}

/// Returns whether a warning was logged.
fn report_env_file(result: Result<(), dotenvy::Error>) -> bool {
    match result {
        Ok(()) => false,
        Err(e) if e.not_found() => false,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable .env");
            true
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(default);
            }
            trimmed.parse().map_err(|_| ConfigError::Invalid { key, value: raw })
        }
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
