use anyhow::Result;

use crate::global_constants;

/// How requests to the Vision API are authorised.
#[derive(Clone, PartialEq, Eq)]
pub enum VisionCredentials {
    ApiKey(String),
    AccessToken(String),
}

#[derive(Clone)]
pub struct ServiceCredentials {
    pub gemini_api_key: String,
    pub vision: VisionCredentials,
}

impl std::fmt::Debug for VisionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisionCredentials::ApiKey(_) => write!(f, "ApiKey(<redacted>)"),
            VisionCredentials::AccessToken(_) => write!(f, "AccessToken(<redacted>)"),
        }
    }
}

impl std::fmt::Debug for ServiceCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCredentials")
            .field("gemini_api_key", &"<redacted>")
            .field("vision", &self.vision)
            .finish()
    }
}

impl ServiceCredentials {
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let gemini_api_key = read(global_constants::ENV_GEMINI_API_KEY).ok_or_else(|| {
            anyhow::anyhow!(
                "{} is not set. Get an API key from https://ai.google.dev/ and export it or put it in a .env file",
                global_constants::ENV_GEMINI_API_KEY
            )
        })?;

        let vision = if let Some(key) = read(global_constants::ENV_VISION_API_KEY) {
            log::debug!("[CREDENTIALS] Using Vision API key");
            VisionCredentials::ApiKey(key)
        } else if let Some(token) = read(global_constants::ENV_VISION_ACCESS_TOKEN) {
            log::debug!("[CREDENTIALS] Using Vision OAuth access token");
            VisionCredentials::AccessToken(token)
        } else {
            log::warn!(
                "[CREDENTIALS] Neither {} nor {} is set, using {} for the Vision API",
                global_constants::ENV_VISION_API_KEY,
                global_constants::ENV_VISION_ACCESS_TOKEN,
                global_constants::ENV_GEMINI_API_KEY
            );
            VisionCredentials::ApiKey(gemini_api_key.clone())
        };

        Ok(Self {
            gemini_api_key,
            vision,
        })
    }
}
