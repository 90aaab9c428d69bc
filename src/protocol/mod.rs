use serde_json::Value;

use crate::error::ReflexError;
use crate::model::emotion::EmotionResult;

pub fn render_result(result: &EmotionResult) -> Result<String, ReflexError> {
    Ok(serde_json::to_string(result)?)
}

/// Error payloads keep a space after the colon: `{"error": "..."}`.
pub fn render_error(message: &str) -> String {
    format!("{{\"error\": {}}}", Value::String(message.to_string()))
}
