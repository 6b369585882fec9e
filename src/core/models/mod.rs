mod analysis;
mod app_config;
mod credentials;
mod errors;
mod image_format;
mod image_payload;
mod ocr;
mod pipeline_stage;
mod user_settings;

pub use analysis::AnalysisReport;
pub use app_config::AppConfig;
pub use credentials::{ServiceCredentials, VisionCredentials};
pub use errors::{AnalysisError, ExtractionError};
pub use image_format::ImageFormat;
pub use image_payload::ImagePayload;
pub use ocr::TextAnnotation;
pub use pipeline_stage::{PipelineError, PipelineStage};
pub use user_settings::UserSettings;

#[cfg(test)]
pub(crate) use image_payload::encode_test_image;
