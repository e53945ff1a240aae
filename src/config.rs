//! Configuration loading.
//!
//! The default configuration file is `skill-inventory.toml` in the current
//! working directory. Every field has a default, so the file is optional:
//!
//! ```toml
//! system_skills = "/home/me/.skills/skills"
//!
//! [stages]
//! vetted = "approved"
//! incoming = "inbox"
//! rejected = "rejected"
//!
//! [strict]
//! enabled = true
//! ```
//!
//! ```rust,no_run
//! use skill_inventory::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert_eq!(config.stages.incoming, "incoming");
//! ```

use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "skill-inventory.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory names of the pipeline stages under the library root.
    pub stages: StagesConfig,
    /// Optional directory of system-installed skills, reported as its own section.
    pub system_skills: Option<PathBuf>,
    /// Strict-mode settings.
    pub strict: StrictConfig,
}

/// Stage directory names, relative to the library root.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StagesConfig {
    pub vetted: String,
    pub incoming: String,
    pub rejected: String,
}

impl Default for StagesConfig {
    fn default() -> Self {
        StagesConfig {
            vetted: "vetted".to_string(),
            incoming: "incoming".to_string(),
            rejected: "rejected".to_string(),
        }
    }
}

/// When [`enabled`](StrictConfig::enabled) is `true`, a vetted package with
/// executable content or suspicious findings fails the run.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    pub enabled: bool,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. Fall back to [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, the file
    /// cannot be read, or its TOML fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(format!("Config file not found: {}", p.display())),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config = Config::from_toml(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_inventory::config::Config;
    ///
    /// let config = Config::from_toml("[strict]\nenabled = true\n").unwrap();
    /// assert!(config.strict.enabled);
    /// assert_eq!(config.stages.vetted, "vetted");
    /// ```
    pub fn from_toml(content: &str) -> Result<Config, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
