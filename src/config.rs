use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default chain shown in the wallet badge
pub const DEFAULT_NETWORK: &str = "Base Sepolia";

const PROJECT_ID_VAR: &str = "TICKETSAFER_WALLET_CONNECT_PROJECT_ID";
const LEGACY_PROJECT_ID_VAR: &str = "VITE_WALLET_CONNECT_PROJECT_ID";
const WALLET_ADDRESS_VAR: &str = "TICKETSAFER_WALLET_ADDRESS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wallet-connect project id (cosmetic, shown in the dashboard)
    pub wallet_connect_project_id: String,
    /// Connected wallet address; the dashboard requires one
    pub wallet_address: Option<String>,
    pub network: String,
    /// Request WebP renditions from the image CDN
    pub prefer_webp: bool,
    /// Fetch event artwork in the background
    pub fetch_images: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet_connect_project_id: String::new(),
            wallet_address: None,
            network: DEFAULT_NETWORK.to_string(),
            prefer_webp: true,
            fetch_images: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".ticketsafer"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Read a config file, `None` when it is missing
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Load `~/.ticketsafer/config.json` and overlay the environment.
    /// A missing or malformed file falls back to defaults.
    pub fn load() -> Config {
        let mut config = match Self::config_path() {
            Some(path) => match Self::load_from(&path) {
                Ok(Some(config)) => config,
                Ok(None) => Config::default(),
                Err(e) => {
                    tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                    Config::default()
                }
            },
            None => {
                tracing::warn!("Could not determine config directory, using defaults");
                Config::default()
            }
        };

        config.apply_overrides(|name| env::var(name).ok());
        config
    }

    /// Overlay values from environment-style variables
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(id) = non_empty(PROJECT_ID_VAR).or_else(|| non_empty(LEGACY_PROJECT_ID_VAR)) {
            self.wallet_connect_project_id = id;
        }
        if let Some(address) = non_empty(WALLET_ADDRESS_VAR) {
            self.wallet_address = Some(address.trim().to_string());
        }
    }

    pub fn wallet_connected(&self) -> bool {
        self.wallet_address.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"prefer_webp": false}"#).unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert!(!config.prefer_webp);
        assert!(config.fetch_images);
        assert_eq!(config.network, DEFAULT_NETWORK);
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(Config::load_from(&path).unwrap().is_none());

        fs::write(&path, "{oops").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            (LEGACY_PROJECT_ID_VAR, "legacy"),
            (WALLET_ADDRESS_VAR, " 0xabc "),
        ]));
        assert_eq!(config.wallet_connect_project_id, "legacy");
        assert_eq!(config.wallet_address.as_deref(), Some("0xabc"));
        assert!(config.wallet_connected());

        config.apply_overrides(lookup(&[
            (PROJECT_ID_VAR, "primary"),
            (LEGACY_PROJECT_ID_VAR, "legacy"),
        ]));
        assert_eq!(config.wallet_connect_project_id, "primary");
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[(WALLET_ADDRESS_VAR, "  ")]));
        assert!(!config.wallet_connected());
    }
}
