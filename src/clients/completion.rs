use anyhow::Result;
use async_trait::async_trait;

/// Chat-completion backend used by the nutrition assistant.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String>;
}
