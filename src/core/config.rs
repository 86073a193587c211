use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExchangeServiceConfig {
    pub base_url: String,
    #[serde(default = "default_service_path")]
    pub path: String,
}

fn default_service_path() -> String {
    "/2022fa/a1".to_string()
}

impl Default for ExchangeServiceConfig {
    fn default() -> Self {
        ExchangeServiceConfig {
            base_url: "http://cs1110.cs.cornell.edu".to_string(),
            path: default_service_path(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProvidersConfig {
    pub exchange: Option<ExchangeServiceConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            exchange: Some(ExchangeServiceConfig::default()),
        }
    }
}

/// Settings for the throwaway conversion used to test a currency code.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProbeConfig {
    pub reference_currency: String,
    pub amount: f64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            reference_currency: "INR".to_string(),
            amount: 2.5,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "xchg", "xchg")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Loads the given file, or the default one when it exists, or falls
    /// back to built-in defaults.
    pub fn load_or_default(config_path: Option<&str>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_path(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => Self::load(),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn exchange_service(&self) -> ExchangeServiceConfig {
        self.providers.exchange.clone().unwrap_or_default()
    }
}
