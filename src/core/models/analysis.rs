use super::{AnalysisError, ExtractionError, PipelineStage};
use crate::global_constants;

/// Output of one user action. `feedback` is never set without `extracted_text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub extracted_text: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub run_id: String,
    pub stage: PipelineStage,
    pub result: AnalysisResult,
    pub extraction_error: Option<ExtractionError>,
    pub analysis_error: Option<AnalysisError>,
}

impl AnalysisReport {
    pub fn extraction_failed(run_id: String, error: ExtractionError) -> Self {
        Self {
            run_id,
            stage: PipelineStage::ExtractionFailed,
            result: AnalysisResult::default(),
            extraction_error: Some(error),
            analysis_error: None,
        }
    }

    /// A failed analysis keeps its error for logging and shows the generic
    /// apology as feedback.
    pub fn analyzed(
        run_id: String,
        extracted_text: String,
        feedback: Result<String, AnalysisError>,
    ) -> Self {
        let (stage, feedback, analysis_error) = match feedback {
            Ok(feedback) => (PipelineStage::Complete, feedback, None),
            Err(error) => (
                PipelineStage::AnalysisFailed,
                global_constants::ANALYSIS_FALLBACK_MESSAGE.to_string(),
                Some(error),
            ),
        };

        Self {
            run_id,
            stage,
            result: AnalysisResult {
                extracted_text: Some(extracted_text),
                feedback: Some(feedback),
            },
            extraction_error: None,
            analysis_error,
        }
    }
}
