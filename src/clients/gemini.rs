use anyhow::Result;
use async_trait::async_trait;
use gemini_rust::Gemini;
use std::sync::Arc;

use crate::clients::completion::CompletionClient;

#[derive(Clone)]
pub struct GeminiClient {
    client: Arc<Gemini>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let model = normalize_model_name(&model);
        let client = Gemini::with_model(api_key, model.clone())
            .map_err(|e| anyhow::anyhow!("Failed to build Gemini client: {}", e))?;

        Ok(Self {
            client: Arc::new(client),
            model,
        })
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        tracing::debug!(model = %self.model, "gemini.request");

        let response = self
            .client
            .generate_content()
            .with_system_prompt(system_prompt)
            .with_user_message(user_message)
            .execute()
            .await
            .map_err(|e| anyhow::anyhow!("Gemini request failed: {}", e))?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(anyhow::anyhow!("Gemini returned an empty response"));
        }

        Ok(text)
    }
}

// Gemini addresses models as "models/<name>".
fn normalize_model_name(model: &str) -> String {
    let model = model.trim();
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}
