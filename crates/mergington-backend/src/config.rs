//! Runtime configuration read from the environment.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid HOST {0:?}: {1}")]
    InvalidHost(String, std::net::AddrParseError),
    #[error("Invalid PORT {0:?}: {1}")]
    InvalidPort(String, std::num::ParseIntError),
}

/// Static assets shipped with this crate, independent of the working directory.
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read `HOST`, `PORT` and `STATIC_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host
                .parse()
                .map_err(|e| ConfigError::InvalidHost(host.clone(), e))?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|e| ConfigError::InvalidPort(port.clone(), e))?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn default_static_dir_holds_landing_page() {
        let config = Config::default();
        assert!(config.static_dir.is_absolute());
        assert!(config.static_dir.join("index.html").is_file());
    }

    #[test]
    fn overrides_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("STATIC_DIR", "/srv/mergington"),
        ]))
        .unwrap();
        assert_eq!(config.addr().to_string(), "0.0.0.0:9090");
        assert_eq!(config.static_dir, PathBuf::from("/srv/mergington"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(..)));
    }

    #[test]
    fn rejects_bad_host() {
        let err = Config::from_lookup(lookup(&[("HOST", "localhost:80")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(..)));
    }
}
