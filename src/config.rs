use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::wizard::DEFAULT_UNDO_DEPTH;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration.
///
/// | Env Var                  | Default     |
/// |--------------------------|-------------|
/// | `SANKIDS_HOST`           | `127.0.0.1` |
/// | `SANKIDS_PORT`           | `3000`      |
/// | `SANKIDS_DEMO_LOGGED_IN` | `true`      |
/// | `SANKIDS_UNDO_DEPTH`     | `50`        |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Start with a logged-in session, as the demo does.
    pub demo_logged_in: bool,
    pub undo_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            demo_logged_in: true,
            undo_depth: DEFAULT_UNDO_DEPTH,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Ok(Self {
            host: parse_or(&lookup, "SANKIDS_HOST", defaults.host)?,
            port: parse_or(&lookup, "SANKIDS_PORT", defaults.port)?,
            demo_logged_in: parse_or(&lookup, "SANKIDS_DEMO_LOGGED_IN", defaults.demo_logged_in)?,
            undo_depth: parse_or(&lookup, "SANKIDS_UNDO_DEPTH", defaults.undo_depth)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
