use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::interfaces::adapters::GenerativeTextService;
use crate::global_constants;

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    prompt_feedback: Option<GeminiPromptFeedback>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

pub struct GeminiTextService {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiTextService {
    pub fn build(endpoint: String, api_key: String) -> Self {
        log::info!("[GEMINI] Initializing Gemini text service");
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    fn construct_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(model)
        )
    }

    fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }

    fn parse_response(response: GeminiResponse) -> Result<String> {
        if let Some(error) = response.error {
            anyhow::bail!("Gemini API error: {}", error.message);
        }

        let candidate = response
            .candidates
            .and_then(|candidates| candidates.into_iter().next());

        let Some(candidate) = candidate else {
            if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
                anyhow::bail!("Gemini blocked the prompt: {}", reason);
            }
            anyhow::bail!("Gemini returned no candidates");
        };

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            anyhow::bail!("Gemini returned an empty response");
        }

        Ok(text)
    }

    fn check_http_status(status: reqwest::StatusCode, body: &str) -> Result<()> {
        if status.is_success() {
            return Ok(());
        }

        match serde_json::from_str::<GeminiResponse>(body) {
            Ok(GeminiResponse {
                error: Some(error), ..
            }) => anyhow::bail!("Gemini API error ({}): {}", status, error.message),
            _ => anyhow::bail!("Gemini API error ({}): {}", status, body),
        }
    }
}

#[async_trait]
impl GenerativeTextService for GeminiTextService {
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String> {
        log::info!("[GEMINI] Generating content with {}", model);
        log::debug!("[GEMINI] Prompt length: {} characters", prompt.len());

        let response = self
            .client
            .post(self.construct_url(model))
            .header(global_constants::GOOGLE_API_KEY_HEADER, self.api_key.as_str())
            .json(&Self::build_request(prompt))
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Gemini API request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read Gemini API response")?;

        Self::check_http_status(status, &body)?;

        let parsed: GeminiResponse =
            serde_json::from_str(&body).context("Failed to parse Gemini API response")?;
        let text = Self::parse_response(parsed)?;

        log::info!("[GEMINI] Received {} characters", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<String> {
        GeminiTextService::parse_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_construct_url_targets_model_generate_content_without_key() {
        let service = GeminiTextService::build(
            "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            "GEMINI_SECRET_KEY".to_string(),
        );

        let url = service.construct_url("gemini-1.5-flash");

        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_content_transport_failure_does_not_leak_api_key() {
        let service = GeminiTextService::build(
            "http://127.0.0.1:9/v1beta".to_string(),
            "GEMINI_SECRET_KEY".to_string(),
        );

        let error = service
            .generate_content("gemini-1.5-flash", "Analyze this")
            .await
            .unwrap_err();
        let message = format!("{:#}", error);

        assert!(message.starts_with("Gemini API request failed"));
        assert!(!message.contains("GEMINI_SECRET_KEY"));
    }

    #[test]
    fn test_check_http_status_accepts_success() {
        assert!(GeminiTextService::check_http_status(reqwest::StatusCode::OK, "{}").is_ok());
    }

    #[test]
    fn test_check_http_status_prefers_api_message() {
        let error = GeminiTextService::check_http_status(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#,
        )
        .unwrap_err();

        assert!(error.to_string().contains("429"));
        assert!(error.to_string().contains("Resource has been exhausted"));
    }

    #[test]
    fn test_check_http_status_falls_back_to_raw_body() {
        let error = GeminiTextService::check_http_status(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
            "<html>backend down</html>",
        )
        .unwrap_err();

        assert!(error.to_string().contains("503"));
        assert!(error.to_string().contains("backend down"));
    }

    #[test]
    fn test_build_request_sends_prompt_as_single_text_part() {
        let json = serde_json::to_value(GeminiTextService::build_request("Analyze this")).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "Analyze this");
        assert_eq!(json["contents"][0]["parts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_response_joins_text_parts_of_first_candidate() {
        let text = parse(
            r#"{"candidates": [
                {"content": {"parts": [{"text": "Great "}, {"text": "job!"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(text, "Great job!");
    }

    #[test]
    fn test_parse_response_reports_blocked_prompt() {
        let error = parse(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap_err();

        assert_eq!(error.to_string(), "Gemini blocked the prompt: SAFETY");
    }

    #[test]
    fn test_parse_response_reports_api_error() {
        let error = parse(r#"{"error": {"code": 429, "message": "Quota exceeded"}}"#).unwrap_err();

        assert_eq!(error.to_string(), "Gemini API error: Quota exceeded");
    }

    #[test]
    fn test_parse_response_rejects_empty_candidate() {
        let error = parse(r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#).unwrap_err();

        assert_eq!(error.to_string(), "Gemini returned an empty response");
    }
}
