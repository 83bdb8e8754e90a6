//! Request body decoding with standardized error handling.
//!
//! Any JSON parse or shape failure becomes a 400 `AppError` with a sanitized
//! message, so malformed submissions never reach the database.

use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Deserialize a request body, mapping failures to `BAD_REQUEST`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice::<T>(body).map_err(|e| {
        let detail = classify_json_error(&e);

        debug!(
            trace_id = %trace_ctx::trace_id(),
            error = %e,
            body_size = body.len(),
            "JSON parsing failed"
        );

        AppError::bad_request(ErrorCode::BadRequest, detail)
    })
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: wrong types or missing fields".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
