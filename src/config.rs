use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Server settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Optional JSON file replacing the built-in activity list.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match non_empty("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            seed_path: non_empty("ACTIVITIES_SEED").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.static_dir, PathBuf::from("static"));
        assert!(cfg.seed_path.is_none());
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("STATIC_DIR", "/srv/www"),
            ("ACTIVITIES_SEED", "activities.json"),
        ])
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(cfg.seed_path, Some(PathBuf::from("activities.json")));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let cfg = config(&[("PORT", ""), ("ACTIVITIES_SEED", "  ")]).unwrap();
        assert_eq!(cfg.port, 8000);
        assert!(cfg.seed_path.is_none());
    }

    #[test]
    fn values_are_trimmed() {
        let cfg = config(&[
            ("HOST", " 0.0.0.0 "),
            ("PORT", " 3000\n"),
            ("STATIC_DIR", "\t/srv/www "),
            ("ACTIVITIES_SEED", " activities.json "),
        ])
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(cfg.seed_path, Some(PathBuf::from("activities.json")));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("eighty"));
        assert!(config(&[("PORT", "70000")]).is_err());
    }
}
