use serde_json::Value;

use crate::clients::models::chat::Suggestion;
use crate::clients::models::responses::ChatResponse;

pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble generating a response right now.";

/// Turns the raw model reply into a chat response. Replies that are not JSON,
/// or JSON without a usable suggestion, come back as plain text.
pub fn parse_chat_reply(reply: &str) -> ChatResponse {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return ChatResponse::plain(FALLBACK_REPLY);
    }

    let Some(json) = extract_json_from_response(trimmed) else {
        return ChatResponse::plain(trimmed);
    };

    let response_text = json
        .get("response")
        .and_then(|r| r.as_str())
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(trimmed)
        .to_string();

    let actionable = json
        .get("actionable")
        .and_then(|a| a.as_bool())
        .unwrap_or(false);

    if !actionable {
        return ChatResponse::plain(response_text);
    }

    match extract_suggestion(&json) {
        Some(suggestion) => ChatResponse {
            response: response_text,
            actionable: true,
            suggestion: Some(suggestion),
        },
        None => ChatResponse::plain(response_text),
    }
}

fn extract_suggestion(json: &Value) -> Option<Suggestion> {
    let value = json.get("suggestion")?;

    match serde_json::from_value::<Suggestion>(value.clone()) {
        Ok(suggestion) if !suggestion.title.trim().is_empty() => Some(suggestion),
        Ok(_) => {
            tracing::debug!("chat.suggestion_missing_title");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "chat.suggestion_unparseable");
            None
        }
    }
}

fn extract_json_from_response(response: &str) -> Option<Value> {
    if let Some(json_block_start) = response.find("```json") {
        let content_start = json_block_start + "```json".len();

        if let Some(remaining_content) = response.get(content_start..) {
            let block = match remaining_content.find("```") {
                Some(code_block_end) => &remaining_content[..code_block_end],
                None => remaining_content,
            };
            if let Some(value) = parse_json_object(block) {
                return Some(value);
            }
        }
    }

    if let Some(value) = parse_json_object(response) {
        return Some(value);
    }

    // Prose wrapped around a single object
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end <= start {
        return None;
    }
    parse_json_object(&response[start..=end])
}

fn parse_json_object(candidate: &str) -> Option<Value> {
    serde_json::from_str::<Value>(candidate.trim())
        .ok()
        .filter(|value| value.is_object())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::models::chat::{ChangeAction, ChangeContent, PlanField};

    #[test]
    fn test_plain_text_reply() {
        let parsed = parse_chat_reply("  Try swapping rice for sweet potato.  ");

        assert_eq!(parsed.response, "Try swapping rice for sweet potato.");
        assert!(!parsed.actionable);
        assert!(parsed.suggestion.is_none());
    }

    #[test]
    fn test_empty_reply_uses_fallback() {
        assert_eq!(parse_chat_reply("   ").response, FALLBACK_REPLY);
    }

    #[test]
    fn test_actionable_reply_with_suggestion() {
        let reply = r#"{
            "response": "Swapping salmon for cod keeps protein high.",
            "actionable": true,
            "suggestion": {
                "title": "Swap salmon for cod",
                "description": "Replaces salmon at dinner on day 3",
                "changes": {
                    "day": 3,
                    "field": "meals",
                    "action": "modify",
                    "content": {"oldIngredient": "salmon", "newIngredient": "cod", "mealType": "dinner"}
                }
            }
        }"#;

        let parsed = parse_chat_reply(reply);

        assert!(parsed.actionable);
        assert_eq!(parsed.response, "Swapping salmon for cod keeps protein high.");
        let suggestion = parsed.suggestion.unwrap();
        assert_eq!(suggestion.title, "Swap salmon for cod");
        assert_eq!(suggestion.changes.day, Some(3));
        assert_eq!(suggestion.changes.field, PlanField::Meals);
        assert_eq!(suggestion.changes.action, ChangeAction::Modify);
        assert!(matches!(
            suggestion.changes.content,
            ChangeContent::IngredientSwap(_)
        ));
    }

    #[test]
    fn test_fenced_json_reply() {
        let reply = "Here you go:\n```json\n{\"response\": \"Added a stretch.\", \"actionable\": true, \"suggestion\": {\"title\": \"Stretching\", \"description\": \"\", \"changes\": {\"day\": null, \"field\": \"recovery\", \"action\": \"add\", \"content\": \"Stretch 10 min\"}}}\n```";

        let parsed = parse_chat_reply(reply);

        assert!(parsed.actionable);
        assert_eq!(parsed.response, "Added a stretch.");
        assert_eq!(parsed.suggestion.unwrap().changes.day, None);
    }

    #[test]
    fn test_json_embedded_in_prose() {
        let reply = r#"Sure! {"response": "Hydration adjusted.", "actionable": true, "suggestion": {"title": "More water", "changes": {"day": 1, "field": "hydration", "action": "replace", "content": "140 oz"}}} Let me know."#;

        let parsed = parse_chat_reply(reply);

        assert!(parsed.actionable);
        assert_eq!(parsed.suggestion.unwrap().title, "More water");
    }

    #[test]
    fn test_non_actionable_json_uses_response_field() {
        let parsed = parse_chat_reply(r#"{"response": "Stay the course.", "actionable": false}"#);

        assert_eq!(parsed, ChatResponse::plain("Stay the course."));
    }

    #[test]
    fn test_malformed_suggestion_degrades_to_plain_reply() {
        let reply = r#"{"response": "Try this.", "actionable": true, "suggestion": {"title": "Bad", "changes": {"field": "sleep", "action": "add", "content": "x"}}}"#;

        let parsed = parse_chat_reply(reply);

        assert!(!parsed.actionable);
        assert_eq!(parsed.response, "Try this.");
        assert!(parsed.suggestion.is_none());
    }

    #[test]
    fn test_suggestion_without_title_is_dropped() {
        let reply = r#"{"response": "ok", "actionable": true, "suggestion": {"title": " ", "changes": {"day": 1, "field": "recovery", "action": "add", "content": "x"}}}"#;

        assert!(!parse_chat_reply(reply).actionable);
    }
}
