use anyhow::{Context, Result};

use super::{ServiceCredentials, UserSettings};

/// Everything the service adapters need, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: UserSettings,
    pub credentials: ServiceCredentials,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => log::info!("[CONFIG] Loaded environment from {:?}", path),
            Err(e) if e.not_found() => log::debug!("[CONFIG] No .env file found"),
            Err(e) => log::warn!("[CONFIG] Failed to read .env file: {}", e),
        }

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[CONFIG] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let credentials =
            ServiceCredentials::from_env().context("Missing Google API credentials")?;

        Ok(Self::build(settings, credentials))
    }

    pub fn build(settings: UserSettings, credentials: ServiceCredentials) -> Self {
        Self {
            settings,
            credentials,
        }
    }
}
