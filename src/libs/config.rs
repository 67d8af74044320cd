use std::net::SocketAddr;

use thiserror::Error;

use super::category::{ReservedCategories, FAVORITES_CATEGORY_ID, UNCATEGORIZED_CATEGORY_ID};
use super::variable::get_environment_variable;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid LISTEN_ADDR: {0}")]
    InvalidListenAddr(String),

    #[error("Favorites and uncategorized categories share the id {0}")]
    DuplicateReservedId(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: Option<String>,
    pub listen_addr: SocketAddr,
    pub reserved: ReservedCategories,
}

impl Config {
    /// Optional:
    /// - `REDIS_URL`
    /// - `LISTEN_ADDR` (default: "0.0.0.0:8080")
    /// - `FAVORITES_CATEGORY_ID` (default: "favorites")
    /// - `UNCATEGORIZED_CATEGORY_ID` (default: "uncategorized")
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(get_environment_variable)
    }

    /// Builds the config from any variable source. Empty values must be
    /// reported as `None`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidListenAddr(listen_addr.clone()))?;

        let reserved = ReservedCategories {
            favorites: lookup("FAVORITES_CATEGORY_ID")
                .unwrap_or_else(|| FAVORITES_CATEGORY_ID.to_string()),
            uncategorized: lookup("UNCATEGORIZED_CATEGORY_ID")
                .unwrap_or_else(|| UNCATEGORIZED_CATEGORY_ID.to_string()),
        };

        if reserved.favorites == reserved.uncategorized {
            return Err(ConfigError::DuplicateReservedId(reserved.favorites));
        }

        Ok(Config {
            redis_url: lookup("REDIS_URL"),
            listen_addr,
            reserved,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]).expect("defaults are valid");

        assert_eq!(config.redis_url, None);
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.reserved, ReservedCategories::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("REDIS_URL", "redis://localhost:6379"),
            ("LISTEN_ADDR", "127.0.0.1:3000"),
            ("FAVORITES_CATEGORY_ID", "fav"),
            ("UNCATEGORIZED_CATEGORY_ID", "etc"),
        ])
        .expect("valid config");

        assert_eq!(config.redis_url.as_deref(), Some("redis://localhost:6379"));
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.reserved.favorites, "fav");
        assert_eq!(config.reserved.uncategorized, "etc");
    }

    #[test]
    fn invalid_listen_addr_is_rejected() {
        let err = config_from(&[("LISTEN_ADDR", "not-an-addr")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidListenAddr("not-an-addr".to_string()));
    }

    #[test]
    fn reserved_ids_must_differ() {
        let err = config_from(&[("FAVORITES_CATEGORY_ID", "uncategorized")]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateReservedId("uncategorized".to_string()));
    }
}
