use crate::tree::TreeConfig;
use crate::tree::types::DEFAULT_MAX_INPUT_LEN;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sfx";
const CONFIG_FILE: &str = "config.json";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "SFX_CONFIG";

/// Strings built by `sfx demo` unless configured otherwise
pub const DEFAULT_SAMPLES: &[&str] = &[
    "abcabxabcyababcdaaaabc",
    "mississi",
    "xyzxyaxyz",
    "banana",
    "mississippi",
    "gattaca",
    "tggtggtggtgcggtgatggtgc",
    "woolloomooloo",
    "acttatcattt",
    "abacabad",
];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inputs for the demo driver
    #[serde(default = "default_samples")]
    pub samples: Vec<String>,

    /// Colored output when stdout is a terminal
    #[serde(default = "default_color")]
    pub color: bool,

    /// Fold uppercase input to lowercase before building
    #[serde(default)]
    pub case_insensitive: bool,

    /// Longest accepted input in bytes
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,
}

fn default_samples() -> Vec<String> {
    DEFAULT_SAMPLES.iter().map(|s| s.to_string()).collect()
}

fn default_color() -> bool {
    true
}

fn default_max_input_len() -> usize {
    DEFAULT_MAX_INPUT_LEN
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            color: default_color(),
            case_insensitive: false,
            max_input_len: default_max_input_len(),
        }
    }
}

impl AppConfig {
    /// Load config with priority: environment variables > config file > defaults
    pub fn load() -> Result<Self> {
        let mut config = match get_config_path() {
            Some(path) => Self::load_from_file(&path)?.unwrap_or_default(),
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read a config file; `Ok(None)` when it does not exist
    pub fn load_from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(Some(config))
    }

    /// Save config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Apply `SFX_*` overrides; values that do not parse are ignored
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SFX_SAMPLES") {
            let samples: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if !samples.is_empty() {
                self.samples = samples;
            }
        }

        if let Some(flag) = var("SFX_COLOR").as_deref().and_then(parse_flag) {
            self.color = flag;
        }

        if let Some(flag) = var("SFX_CASE_INSENSITIVE").as_deref().and_then(parse_flag) {
            self.case_insensitive = flag;
        }

        if let Some(val) = var("SFX_MAX_INPUT_LEN") {
            if let Ok(len) = val.trim().parse() {
                self.max_input_len = len;
            }
        }
    }

    /// Library-side subset of the configuration
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            case_insensitive: self.case_insensitive,
            max_input_len: self.max_input_len,
        }
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Path of the config file: `$SFX_CONFIG` if set, else the platform config
/// directory
pub fn get_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}
