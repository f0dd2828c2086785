use std::env;
use std::path::PathBuf;

use crate::error::PresetResult;
use crate::presets::{self, Category, PresetRecord};

/// Library configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub presets: PresetsConfig,
    pub logging: LoggingConfig,
}

/// Preset source configuration
#[derive(Debug, Clone, Default)]
pub struct PresetsConfig {
    /// User preset file merged after the built-in catalog, if any.
    pub user_preset_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let presets = PresetsConfig {
            user_preset_path: env::var("LOGO_PRESETS_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Config { presets, logging }
    }

    /// List built-in presets plus those in the configured user file.
    pub fn list_presets(&self) -> PresetResult<Vec<PresetRecord>> {
        presets::list_presets(self.presets.user_preset_path.as_deref())
    }

    /// Look up a preset by ID, including the configured user file.
    pub fn load_preset(&self, id: &str) -> PresetResult<Option<PresetRecord>> {
        presets::load_preset(id, self.presets.user_preset_path.as_deref())
    }

    /// List presets in one category, including the configured user file.
    pub fn list_presets_by_category(&self, category: &Category) -> PresetResult<Vec<PresetRecord>> {
        presets::list_presets_by_category(category, self.presets.user_preset_path.as_deref())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
