//! User-tunable filter settings

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Settings the slot filter reads besides the locks themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderSettings {
    /// Items (outside the class item slot) whose base stat total is below this are dropped
    #[serde(default = "default_minimum_stat_total")]
    pub minimum_stat_total: i32,
    /// Count every modern armor piece as if fully masterworked
    #[serde(default = "default_assume_masterwork")]
    pub assume_masterwork: bool,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        BuilderSettings {
            minimum_stat_total: default_minimum_stat_total(),
            assume_masterwork: default_assume_masterwork(),
        }
    }
}

fn default_minimum_stat_total() -> i32 {
    0
}
fn default_assume_masterwork() -> bool {
    false
}

impl BuilderSettings {
    pub fn new(minimum_stat_total: i32, assume_masterwork: bool) -> Self {
        BuilderSettings {
            minimum_stat_total,
            assume_masterwork,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_stat_total < 0 {
            return Err(ConfigError::ValidationError(format!(
                "minimum_stat_total must not be negative, got {}",
                self.minimum_stat_total
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BuilderSettings::default();
        assert_eq!(settings.minimum_stat_total, 0);
        assert!(!settings.assume_masterwork);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_settings() {
        let settings: BuilderSettings = toml::from_str("assume_masterwork = true").unwrap();
        assert_eq!(settings.minimum_stat_total, 0);
        assert!(settings.assume_masterwork);
    }
}
