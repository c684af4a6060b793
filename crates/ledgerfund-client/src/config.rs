//! Client configuration loader
//!
//! Values come from an optional TOML file, then `LEDGERFUND_*` environment
//! variables override individual fields. Missing fields take the defaults.

use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Default config filename
pub const DEFAULT_CONFIG_FILENAME: &str = "ledgerfund.toml";

pub const ENV_PREFIX: &str = "LEDGERFUND_";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub ipfs_gateway: String,
    pub request_timeout_secs: u64,
    pub price_poll_secs: u64,
    pub radiation_poll_secs: u64,
    pub cache_dir: PathBuf,
    /// Holder count at which radiation reaches zero
    pub holders_for_zero_radiation: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8899".to_string(),
            ipfs_gateway: "https://ipfs.io/ipfs/".to_string(),
            request_timeout_secs: 20,
            price_poll_secs: 30,
            radiation_poll_secs: 30,
            cache_dir: PathBuf::from(".ledgerfund"),
            holders_for_zero_radiation: 1_000,
        }
    }
}

impl ClientConfig {
    /// Load from `path` (or defaults when `None`), apply environment overrides
    /// and validate.
    pub fn load(path: Option<&Path>) -> ClientResult<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|e| {
                    ClientError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                debug!(path = %path.display(), "Loaded client config");
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> ClientResult<Self> {
        toml::from_str(raw).map_err(|e| ClientError::Config(format!("Invalid TOML: {}", e)))
    }

    pub fn to_toml_string(&self) -> ClientResult<String> {
        toml::to_string_pretty(self).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Override fields from `LEDGERFUND_<FIELD>` variables resolved by `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ClientResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |field: &str| lookup(&format!("{}{}", ENV_PREFIX, field.to_uppercase()));

        if let Some(value) = var("rpc_url") {
            self.rpc_url = value;
        }
        if let Some(value) = var("ipfs_gateway") {
            self.ipfs_gateway = value;
        }
        if let Some(value) = var("request_timeout_secs") {
            self.request_timeout_secs = parse_number("request_timeout_secs", &value)?;
        }
        if let Some(value) = var("price_poll_secs") {
            self.price_poll_secs = parse_number("price_poll_secs", &value)?;
        }
        if let Some(value) = var("radiation_poll_secs") {
            self.radiation_poll_secs = parse_number("radiation_poll_secs", &value)?;
        }
        if let Some(value) = var("cache_dir") {
            self.cache_dir = PathBuf::from(value);
        }
        if let Some(value) = var("holders_for_zero_radiation") {
            self.holders_for_zero_radiation = parse_number("holders_for_zero_radiation", &value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(ClientError::Config("rpc_url must not be empty".into()));
        }
        if self.ipfs_gateway.trim().is_empty() {
            return Err(ClientError::Config("ipfs_gateway must not be empty".into()));
        }
        for (name, value) in [
            ("request_timeout_secs", self.request_timeout_secs),
            ("price_poll_secs", self.price_poll_secs),
            ("radiation_poll_secs", self.radiation_poll_secs),
            ("holders_for_zero_radiation", self.holders_for_zero_radiation),
        ] {
            if value == 0 {
                return Err(ClientError::Config(format!("{} must be greater than zero", name)));
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn price_poll_interval(&self) -> Duration {
        Duration::from_secs(self.price_poll_secs)
    }

    pub fn radiation_poll_interval(&self) -> Duration {
        Duration::from_secs(self.radiation_poll_secs)
    }
}

fn parse_number(field: &str, value: &str) -> ClientResult<u64> {
    value.trim().parse().map_err(|_| {
        ClientError::Config(format!("{}{} is not a number: {}", ENV_PREFIX, field.to_uppercase(), value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
        assert_eq!(config.price_poll_interval(), Duration::from_secs(30));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            rpc_url = "https://rpc.ledgerfund.example"
            radiation_poll_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.rpc_url, "https://rpc.ledgerfund.example");
        assert_eq!(config.radiation_poll_secs, 60);
        assert_eq!(config.price_poll_secs, 30);
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut config = ClientConfig::default();
        let vars: HashMap<&str, &str> = [
            ("LEDGERFUND_RPC_URL", "http://localhost:9000"),
            ("LEDGERFUND_REQUEST_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();
        config
            .apply_env_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.rpc_url, "http://localhost:9000");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn non_numeric_override_is_rejected() {
        let mut config = ClientConfig::default();
        let err = config
            .apply_env_overrides(|key| (key == "LEDGERFUND_PRICE_POLL_SECS").then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn zero_intervals_are_rejected() {
        let config = ClientConfig {
            price_poll_secs: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_file_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
        let written = ClientConfig {
            holders_for_zero_radiation: 250,
            ..ClientConfig::default()
        };
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(written.to_toml_string().unwrap().as_bytes()).unwrap();

        let loaded = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.holders_for_zero_radiation, 250);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
