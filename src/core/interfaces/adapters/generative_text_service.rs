use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GenerativeTextService: Send + Sync {
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String>;
}
