mod generative_text_service;
mod ocr_service;

pub use generative_text_service::GenerativeTextService;
pub use ocr_service::OcrService;
