use std::sync::Arc;

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{ExtractionError, ImagePayload};

pub struct TextExtractor {
    ocr_service: Arc<dyn OcrService>,
}

impl TextExtractor {
    pub fn new(ocr_service: Arc<dyn OcrService>) -> Self {
        Self { ocr_service }
    }

    pub async fn extract(&self, image: &ImagePayload) -> Result<String, ExtractionError> {
        log::info!(
            "[TEXT_EXTRACTOR] Extracting text from {:?} image ({} bytes)",
            image.format,
            image.byte_len()
        );

        let annotations = self.ocr_service.detect_text(image).await.map_err(|e| {
            log::error!("[TEXT_EXTRACTOR] OCR service failed: {:#}", e);
            ExtractionError::ServiceError(format!("{:#}", e))
        })?;

        // Only the full-page transcript matters; the rest are per-word regions.
        let transcript = annotations
            .into_iter()
            .next()
            .map(|annotation| annotation.description.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ExtractionError::NoTextFound)?;

        log::info!(
            "[TEXT_EXTRACTOR] Extracted {} characters",
            transcript.chars().count()
        );
        log::debug!("[TEXT_EXTRACTOR] Extracted text: {}", transcript);

        Ok(transcript)
    }
}
