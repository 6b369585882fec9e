use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_vision_endpoint")]
    pub vision_endpoint: String,
    #[serde(default = "default_gemini_endpoint")]
    pub gemini_endpoint: String,
    #[serde(default)]
    pub show_service_error_details: bool,
}

fn default_gemini_model() -> String {
    global_constants::DEFAULT_GEMINI_MODEL.to_string()
}

fn default_vision_endpoint() -> String {
    global_constants::DEFAULT_VISION_ENDPOINT.to_string()
}

fn default_gemini_endpoint() -> String {
    global_constants::DEFAULT_GEMINI_ENDPOINT.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            gemini_model: default_gemini_model(),
            vision_endpoint: default_vision_endpoint(),
            gemini_endpoint: default_gemini_endpoint(),
            show_service_error_details: false,
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Gemini model: {}", settings.gemini_model);
        log::debug!("[SETTINGS] Vision endpoint: {}", settings.vision_endpoint);
        log::debug!("[SETTINGS] Gemini endpoint: {}", settings.gemini_endpoint);

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
