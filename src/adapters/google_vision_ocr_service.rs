use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{ImagePayload, TextAnnotation, VisionCredentials};
use crate::global_constants;

#[derive(Debug, Serialize)]
struct VisionRequest {
    requests: Vec<VisionRequestItem>,
}

#[derive(Debug, Serialize)]
struct VisionRequestItem {
    image: VisionImage,
    features: Vec<VisionFeature>,
}

#[derive(Debug, Serialize)]
struct VisionImage {
    content: String,
}

#[derive(Debug, Serialize)]
struct VisionFeature {
    #[serde(rename = "type")]
    feature_type: String,
}

#[derive(Debug, Deserialize)]
struct VisionResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
    error: Option<VisionStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
    error: Option<VisionStatus>,
}

#[derive(Debug, Deserialize)]
struct VisionStatus {
    #[serde(default)]
    message: String,
}

pub struct GoogleVisionOcrService {
    client: reqwest::Client,
    endpoint: String,
    credentials: VisionCredentials,
}

impl GoogleVisionOcrService {
    pub fn build(endpoint: String, credentials: VisionCredentials) -> Self {
        log::info!("[VISION_OCR] Initializing Google Cloud Vision OCR service");
        Self {
            client: reqwest::Client::new(),
            endpoint,
            credentials,
        }
    }

    fn build_request(image: &ImagePayload) -> VisionRequest {
        let content = base64::engine::general_purpose::STANDARD.encode(image.bytes());

        VisionRequest {
            requests: vec![VisionRequestItem {
                image: VisionImage { content },
                features: vec![VisionFeature {
                    feature_type: global_constants::VISION_FEATURE_TEXT_DETECTION.to_string(),
                }],
            }],
        }
    }

    fn parse_response(response: VisionResponse) -> Result<Vec<TextAnnotation>> {
        if let Some(error) = response.error.filter(|e| !e.message.is_empty()) {
            anyhow::bail!("Vision API error: {}", error.message);
        }

        let Some(first) = response.responses.into_iter().next() else {
            return Ok(Vec::new());
        };

        if let Some(error) = first.error.filter(|e| !e.message.is_empty()) {
            anyhow::bail!("Vision API error: {}", error.message);
        }

        Ok(first.text_annotations)
    }

    fn describe_http_failure(status: reqwest::StatusCode, body: &str) -> anyhow::Error {
        match serde_json::from_str::<VisionResponse>(body) {
            Ok(VisionResponse {
                error: Some(error), ..
            }) if !error.message.is_empty() => {
                anyhow::anyhow!("Vision API error ({}): {}", status, error.message)
            }
            _ => anyhow::anyhow!("Vision API error ({}): {}", status, body),
        }
    }
}

#[async_trait]
impl OcrService for GoogleVisionOcrService {
    async fn detect_text(&self, image: &ImagePayload) -> Result<Vec<TextAnnotation>> {
        log::info!("[VISION_OCR] Starting text detection");
        log::debug!(
            "[VISION_OCR] Image: {:?} {}x{}, {} bytes",
            image.format,
            image.width,
            image.height,
            image.byte_len()
        );

        let request = Self::build_request(image);
        let builder = match &self.credentials {
            VisionCredentials::ApiKey(key) => self
                .client
                .post(&self.endpoint)
                .header(global_constants::GOOGLE_API_KEY_HEADER, key.as_str()),
            VisionCredentials::AccessToken(token) => {
                self.client.post(&self.endpoint).bearer_auth(token)
            }
        };

        log::debug!("[VISION_OCR] POST {}", self.endpoint);
        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Vision API request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read Vision API response")?;

        if !status.is_success() {
            return Err(Self::describe_http_failure(status, &body));
        }

        let parsed: VisionResponse =
            serde_json::from_str(&body).context("Failed to parse Vision API response")?;
        let annotations = Self::parse_response(parsed)?;

        log::info!(
            "[VISION_OCR] Text detection complete. Found {} annotations",
            annotations.len()
        );

        Ok(annotations)
    }
}
