use crate::core::models::{AnalysisReport, ImagePayload, PipelineError, PipelineStage};
use crate::core::services::{TextExtractor, WritingAnalyzer};

/// Drives one image through extraction and analysis. Each call to `run` is a
/// fresh user action; a finished run is reset to `Idle` before the next one.
pub struct AnalysisOrchestrator {
    text_extractor: TextExtractor,
    writing_analyzer: WritingAnalyzer,
    stage: PipelineStage,
}

impl AnalysisOrchestrator {
    pub fn build(text_extractor: TextExtractor, writing_analyzer: WritingAnalyzer) -> Self {
        Self {
            text_extractor,
            writing_analyzer,
            stage: PipelineStage::Idle,
        }
    }

    pub fn current_stage(&self) -> PipelineStage {
        self.stage
    }

    pub async fn run(
        &mut self,
        image: &ImagePayload,
        on_stage: &mut dyn FnMut(PipelineStage),
    ) -> Result<AnalysisReport, PipelineError> {
        let run_id = uuid::Uuid::new_v4().to_string();

        if self.stage.is_terminal() {
            self.advance(&run_id, PipelineStage::Idle, on_stage)?;
        }

        self.advance(&run_id, PipelineStage::Extracting, on_stage)?;
        let extracted_text = match self.text_extractor.extract(image).await {
            Ok(text) => text,
            Err(error) => {
                log::warn!("[ORCHESTRATOR] [{}] Extraction failed: {}", run_id, error);
                self.advance(&run_id, PipelineStage::ExtractionFailed, on_stage)?;
                return Ok(AnalysisReport::extraction_failed(run_id, error));
            }
        };
        self.advance(&run_id, PipelineStage::Extracted, on_stage)?;

        self.advance(&run_id, PipelineStage::Analyzing, on_stage)?;
        let feedback = self.writing_analyzer.analyze(&extracted_text).await;
        if let Err(error) = &feedback {
            log::error!("[ORCHESTRATOR] [{}] Analysis failed: {}", run_id, error);
        }

        let report = AnalysisReport::analyzed(run_id.clone(), extracted_text, feedback);
        self.advance(&run_id, report.stage, on_stage)?;

        Ok(report)
    }

    fn advance(
        &mut self,
        run_id: &str,
        next: PipelineStage,
        on_stage: &mut dyn FnMut(PipelineStage),
    ) -> Result<(), PipelineError> {
        self.stage = self.stage.transition_to(next)?;
        log::info!("[ORCHESTRATOR] [{}] Stage: {}", run_id, self.stage);
        on_stage(self.stage);
        Ok(())
    }
}
