use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::clients::completion::CompletionClient;
use crate::clients::models::requests::ChatRequest;
use crate::clients::models::responses::ChatResponse;
use crate::services::{ai_parser, ai_prompt};

#[derive(Clone)]
pub struct NutritionChatService {
    completion_client: Arc<dyn CompletionClient>,
}

impl NutritionChatService {
    pub fn new(completion_client: Arc<dyn CompletionClient>) -> Self {
        Self { completion_client }
    }

    pub async fn reply(&self, request: ChatRequest) -> Result<ChatResponse> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(anyhow::anyhow!("Chat message is empty"));
        }

        let system_prompt = ai_prompt::build_coach_system_prompt(request.plan_data.as_deref());

        debug!(prompt = %system_prompt, message = %message, "chat.prompt");

        let reply = self
            .completion_client
            .complete(&system_prompt, message)
            .await?;

        debug!(response = %reply, "chat.response");

        let parsed = ai_parser::parse_chat_reply(&reply);

        tracing::info!(
            actionable = parsed.actionable,
            plan_days = request.plan_data.as_ref().map_or(0, |days| days.len()),
            "chat.reply_parsed"
        );

        Ok(parsed)
    }
}
