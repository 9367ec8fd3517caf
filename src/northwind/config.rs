use crate::error::{NorthwindError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "northwind> ";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Keys accepted by [`NorthwindConfig::get`] and [`NorthwindConfig::set`].
pub const KEYS: [&str; 3] = ["seed-sample-data", "prompt", "log-level"];

/// Configuration for the northwind client, stored in `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NorthwindConfig {
    /// Seed the session store with the sample customers
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,

    /// Prompt printed by the interactive shell
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Log level used when neither RUST_LOG nor --verbose is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_seed() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for NorthwindConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed(),
            prompt: default_prompt(),
            log_level: default_log_level(),
        }
    }
}

impl NorthwindConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "seed-sample-data" => Some(self.seed_sample_data.to_string()),
            "prompt" => Some(self.prompt.clone()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "seed-sample-data" => {
                self.seed_sample_data = value.parse().map_err(|_| {
                    NorthwindError::Config(format!(
                        "seed-sample-data must be true or false, got {}",
                        value
                    ))
                })?;
            }
            "prompt" => self.prompt = value.to_string(),
            "log-level" => self.log_level = value.to_string(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

pub fn unknown_key(key: &str) -> NorthwindError {
    NorthwindError::Config(format!(
        "unknown key {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}
