use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Pulls the outermost `[...]` span out of free-form model output and parses
/// it as a JSON array. Prose or markdown fences around the array are ignored.
pub fn extract_records(response_text: &str) -> AppResult<Vec<Value>> {
    let start = response_text.find('[');
    let end = response_text.rfind(']');

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            return Err(AppError::Extraction(
                "No JSON array found in model response".to_string(),
            ))
        }
    };

    match serde_json::from_str::<Value>(&response_text[start..=end]) {
        Ok(Value::Array(records)) => Ok(records),
        Ok(_) => Err(AppError::Extraction(
            "Model response is not a JSON array".to_string(),
        )),
        Err(e) => Err(AppError::Extraction(format!(
            "Malformed JSON in model response: {}",
            e
        ))),
    }
}
