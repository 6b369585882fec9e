use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("{0}")]
    ServiceError(String),
    #[error("no text found in the image")]
    NoTextFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    ServiceError(String),
    #[error("there is no text to analyze")]
    EmptyInput,
}
