use crate::error::Result;
use crate::messages::MessageTable;
use crate::paths;
use crate::plan::Plan;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// RetryConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts per step, first attempt included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Fixed pause between a failed attempt and the next. Deliberately not
    /// exponential: the failures worth retrying here are transient network
    /// hiccups during image pulls.
    #[serde(default = "default_delay_seconds")]
    pub delay_seconds: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_delay_seconds() -> u64 {
    5
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_seconds: default_delay_seconds(),
        }
    }
}

impl RetryConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

/// Deployment configuration. Every field defaults to the built-in SOC
/// stack, so a root without `socforge.yaml` is fully usable; the file only
/// exists to override parts of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub plan: Plan,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default = "MessageTable::defaults")]
    pub messages: MessageTable,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            plan: Plan::default(),
            retry: RetryConfig::default(),
            messages: MessageTable::defaults(),
        }
    }
}

impl Config {
    /// Load `socforge.yaml` from `root`, or the built-in defaults when the
    /// file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.retry.max_attempts = 5;
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.retry.max_attempts, 5);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        // A config that only tunes the retry policy keeps the built-in plan
        // and messages.
        let yaml = "retry:\n  delay_seconds: 0\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.retry.delay_seconds, 0);
        assert_eq!(cfg.retry.max_attempts, 3);
        assert_eq!(cfg.plan, Plan::default());
        assert!(!cfg.messages.is_empty());
    }

    #[test]
    fn retry_delay_conversion() {
        let retry = RetryConfig {
            max_attempts: 3,
            delay_seconds: 5,
        };
        assert_eq!(retry.delay(), Duration::from_secs(5));
    }
}
