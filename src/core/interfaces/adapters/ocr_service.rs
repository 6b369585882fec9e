use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{ImagePayload, TextAnnotation};

#[async_trait]
pub trait OcrService: Send + Sync {
    /// Runs text detection. Index 0 of the returned list is the full-page
    /// transcript; an empty list means no text was found.
    async fn detect_text(&self, image: &ImagePayload) -> Result<Vec<TextAnnotation>>;
}
