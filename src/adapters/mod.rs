mod gemini_text_service;
mod google_vision_ocr_service;

pub use gemini_text_service::GeminiTextService;
pub use google_vision_ocr_service::GoogleVisionOcrService;
