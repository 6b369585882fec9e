use std::sync::Arc;

use crate::core::interfaces::adapters::GenerativeTextService;
use crate::core::models::AnalysisError;

pub const ANALYSIS_INSTRUCTIONS: [&str; 5] = [
    "Grammar and spelling corrections (if any)",
    "Sentence structure improvements",
    "Content organization suggestions",
    "Overall writing flow assessment",
    "Any ideas for expanding or restructuring the content",
];

pub struct WritingAnalyzer {
    text_service: Arc<dyn GenerativeTextService>,
    model: String,
}

impl WritingAnalyzer {
    pub fn new(text_service: Arc<dyn GenerativeTextService>, model: String) -> Self {
        Self {
            text_service,
            model,
        }
    }

    pub fn build_prompt(text: &str) -> String {
        let instructions = ANALYSIS_INSTRUCTIONS
            .iter()
            .enumerate()
            .map(|(index, instruction)| format!("{}. {}", index + 1, instruction))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Analyze this handwritten text and provide helpful suggestions:\n\n\
             Text: \"{}\"\n\n\
             Please provide:\n\
             {}\n\n\
             Be constructive and encouraging in your feedback.",
            text, instructions
        )
    }

    pub async fn analyze(&self, text: &str) -> Result<String, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        log::info!(
            "[WRITING_ANALYZER] Requesting feedback from {} for {} characters",
            self.model,
            text.chars().count()
        );

        let prompt = Self::build_prompt(text);
        let feedback = self
            .text_service
            .generate_content(&self.model, &prompt)
            .await
            .map_err(|e| AnalysisError::ServiceError(format!("{:#}", e)))?;

        log::info!(
            "[WRITING_ANALYZER] Received {} characters of feedback",
            feedback.chars().count()
        );

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_doubles::MockGenerativeTextService;

    fn create_analyzer(service: Arc<MockGenerativeTextService>) -> WritingAnalyzer {
        WritingAnalyzer::new(service, "gemini-1.5-flash".to_string())
    }

    #[test]
    fn test_build_prompt_embeds_text_and_numbered_instructions() {
        let prompt = WritingAnalyzer::build_prompt("my  essay, with \"quotes\"");

        assert!(prompt.contains("Text: \"my  essay, with \"quotes\"\""));
        for (index, instruction) in ANALYSIS_INSTRUCTIONS.iter().enumerate() {
            assert!(prompt.contains(&format!("{}. {}", index + 1, instruction)));
        }
        assert!(prompt.ends_with("Be constructive and encouraging in your feedback."));
    }

    #[test]
    fn test_build_prompt_keeps_instruction_order() {
        let prompt = WritingAnalyzer::build_prompt("text");

        let positions: Vec<usize> = ANALYSIS_INSTRUCTIONS
            .iter()
            .map(|instruction| prompt.find(instruction).unwrap())
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn test_analyze_returns_service_response_unchanged() {
        let service = Arc::new(MockGenerativeTextService::returning(
            "  **Great work!**\n1. Fix 'teh'.\n",
        ));
        let analyzer = create_analyzer(service.clone());

        let feedback = analyzer.analyze("teh quick fox").await.unwrap();

        assert_eq!(feedback, "  **Great work!**\n1. Fix 'teh'.\n");
        let (model, prompt) = service.get_last_request().unwrap();
        assert_eq!(model, "gemini-1.5-flash");
        assert!(prompt.contains("teh quick fox"));
    }

    #[tokio::test]
    async fn test_analyze_wraps_service_fault() {
        let service = Arc::new(MockGenerativeTextService::failing("429 quota exceeded"));
        let analyzer = create_analyzer(service);

        let result = analyzer.analyze("some text").await;

        assert_eq!(
            result,
            Err(AnalysisError::ServiceError("429 quota exceeded".to_string()))
        );
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_text_without_calling_service() {
        let service = Arc::new(MockGenerativeTextService::returning("unused"));
        let analyzer = create_analyzer(service.clone());

        let result = analyzer.analyze("   ").await;

        assert_eq!(result, Err(AnalysisError::EmptyInput));
        assert_eq!(service.get_call_count(), 0);
    }
}
