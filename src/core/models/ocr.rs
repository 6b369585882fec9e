use serde::{Deserialize, Serialize};

/// A detected text region as reported by the OCR service. The service lists
/// the full-page transcript first, followed by per-word regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnnotation {
    pub description: String,
}

#[cfg(test)]
impl TextAnnotation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
