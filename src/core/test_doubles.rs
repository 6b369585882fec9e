use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::{GenerativeTextService, OcrService};
use crate::core::models::{ImagePayload, TextAnnotation};

pub struct MockOcrService {
    response: std::result::Result<Vec<TextAnnotation>, String>,
    calls: Arc<Mutex<usize>>,
}

impl MockOcrService {
    pub fn returning(descriptions: &[&str]) -> Self {
        Self {
            response: Ok(descriptions.iter().map(|d| TextAnnotation::new(*d)).collect()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn get_call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl OcrService for MockOcrService {
    async fn detect_text(&self, _image: &ImagePayload) -> Result<Vec<TextAnnotation>> {
        *self.calls.lock().unwrap() += 1;
        match &self.response {
            Ok(annotations) => Ok(annotations.clone()),
            Err(message) => Err(anyhow::anyhow!(message.clone())),
        }
    }
}

pub struct MockGenerativeTextService {
    response: std::result::Result<String, String>,
    prompts: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockGenerativeTextService {
    pub fn returning(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn get_last_request(&self) -> Option<(String, String)> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerativeTextService for MockGenerativeTextService {
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow::anyhow!(message.clone())),
        }
    }
}

pub fn create_test_payload() -> ImagePayload {
    ImagePayload::build_from_bytes(crate::core::models::encode_test_image(
        image::ImageFormat::Png,
    ))
    .unwrap()
}
