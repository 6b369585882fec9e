use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Extracting,
    ExtractionFailed,
    Extracted,
    Analyzing,
    AnalysisFailed,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pipeline cannot move from {from} to {to}")]
pub struct PipelineError {
    pub from: PipelineStage,
    pub to: PipelineStage,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Idle => "Idle",
            PipelineStage::Extracting => "Extracting",
            PipelineStage::ExtractionFailed => "ExtractionFailed",
            PipelineStage::Extracted => "Extracted",
            PipelineStage::Analyzing => "Analyzing",
            PipelineStage::AnalysisFailed => "AnalysisFailed",
            PipelineStage::Complete => "Complete",
        };
        write!(f, "{}", name)
    }
}

impl Default for PipelineStage {
    fn default() -> Self {
        PipelineStage::Idle
    }
}

impl PipelineStage {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PipelineStage::ExtractionFailed | PipelineStage::AnalysisFailed | PipelineStage::Complete
        )
    }

    pub fn can_transition_to(&self, next: PipelineStage) -> bool {
        use PipelineStage::*;

        match (self, next) {
            (Idle, Extracting) => true,
            (Extracting, ExtractionFailed) | (Extracting, Extracted) => true,
            (Extracted, Analyzing) => true,
            (Analyzing, AnalysisFailed) | (Analyzing, Complete) => true,
            (current, Idle) => current.is_terminal(),
            _ => false,
        }
    }

    pub fn transition_to(self, next: PipelineStage) -> Result<PipelineStage, PipelineError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(PipelineError {
                from: self,
                to: next,
            })
        }
    }
}
