use crate::core::models::{AnalysisReport, ExtractionError, ImagePayload, PipelineStage};
use crate::global_constants;

/// Text rendering of a finished pipeline run.
pub struct AnalysisReportView<'a> {
    report: &'a AnalysisReport,
    show_service_error_details: bool,
}

impl<'a> AnalysisReportView<'a> {
    pub fn build_with_report(report: &'a AnalysisReport, show_service_error_details: bool) -> Self {
        log::debug!(
            "[REPORT_VIEW] Rendering report {} in stage {}",
            report.run_id,
            report.stage
        );
        Self {
            report,
            show_service_error_details,
        }
    }

    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();

        if let Some(error) = &self.report.extraction_error {
            if let ExtractionError::ServiceError(message) = error {
                lines.push(format!("Error extracting text: {}", message));
            }
            lines.push(global_constants::USER_MESSAGE_EXTRACTION_FAILED.to_string());
            return lines.join("\n");
        }

        if let Some(extracted_text) = &self.report.result.extracted_text {
            lines.push(global_constants::USER_MESSAGE_EXTRACTION_SUCCEEDED.to_string());
            lines.push(String::new());
            lines.push(global_constants::HEADING_EXTRACTED_TEXT.to_string());
            lines.push(extracted_text.clone());
        }

        if let Some(feedback) = &self.report.result.feedback {
            lines.push(String::new());
            lines.push(global_constants::HEADING_ANALYSIS.to_string());
            lines.push(feedback.clone());
        }

        if self.show_service_error_details {
            if let Some(error) = &self.report.analysis_error {
                lines.push(format!("(details: {})", error));
            }
        }

        lines.join("\n")
    }
}

pub fn render_stage_status(stage: PipelineStage) -> Option<&'static str> {
    match stage {
        PipelineStage::Extracting => Some(global_constants::USER_MESSAGE_EXTRACTING),
        PipelineStage::Analyzing => Some(global_constants::USER_MESSAGE_ANALYZING),
        _ => None,
    }
}

pub fn render_image_summary(image: &ImagePayload) -> String {
    format!(
        "Loaded your handwritten text: {} image, {}x{} pixels. Type 'analyze' to continue.",
        image.format.mime_type(),
        image.width,
        image.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::AnalysisError;

    fn render(report: &AnalysisReport, details: bool) -> String {
        AnalysisReportView::build_with_report(report, details).render_text()
    }

    #[test]
    fn test_render_no_text_found_asks_for_clearer_photo() {
        let report =
            AnalysisReport::extraction_failed("run".to_string(), ExtractionError::NoTextFound);

        let output = render(&report, false);

        assert_eq!(output, global_constants::USER_MESSAGE_EXTRACTION_FAILED);
    }

    #[test]
    fn test_render_extraction_service_error_verbatim() {
        let report = AnalysisReport::extraction_failed(
            "run".to_string(),
            ExtractionError::ServiceError("Vision API error: Bad image data.".to_string()),
        );

        let output = render(&report, false);

        assert!(output.contains("Error extracting text: Vision API error: Bad image data."));
        assert!(output.contains(global_constants::USER_MESSAGE_EXTRACTION_FAILED));
    }

    #[test]
    fn test_render_complete_report_shows_both_sections_in_order() {
        let report = AnalysisReport::analyzed(
            "run".to_string(),
            "Hello  world".to_string(),
            Ok("Nice greeting!".to_string()),
        );

        let output = render(&report, false);

        let text_at = output.find("Hello  world").unwrap();
        let heading_at = output.find(global_constants::HEADING_ANALYSIS).unwrap();
        let feedback_at = output.find("Nice greeting!").unwrap();
        assert!(output.starts_with(global_constants::USER_MESSAGE_EXTRACTION_SUCCEEDED));
        assert!(text_at < heading_at && heading_at < feedback_at);
    }

    #[test]
    fn test_render_analysis_failure_hides_details_by_default() {
        let report = AnalysisReport::analyzed(
            "run".to_string(),
            "Hello".to_string(),
            Err(AnalysisError::ServiceError("quota exceeded".to_string())),
        );

        let hidden = render(&report, false);
        let shown = render(&report, true);

        assert!(hidden.contains(global_constants::ANALYSIS_FALLBACK_MESSAGE));
        assert!(!hidden.contains("quota exceeded"));
        assert!(shown.contains("(details: quota exceeded)"));
    }

    #[test]
    fn test_render_stage_status_only_for_running_stages() {
        assert_eq!(
            render_stage_status(PipelineStage::Extracting),
            Some(global_constants::USER_MESSAGE_EXTRACTING)
        );
        assert_eq!(
            render_stage_status(PipelineStage::Analyzing),
            Some(global_constants::USER_MESSAGE_ANALYZING)
        );
        assert_eq!(render_stage_status(PipelineStage::Complete), None);
    }

    #[test]
    fn test_render_image_summary_names_mime_type_and_size() {
        let image = crate::core::test_doubles::create_test_payload();

        let summary = render_image_summary(&image);

        assert!(summary.contains("image/png image, 8x4 pixels"));
    }
}
