//! Backend Requests
//!
//! Item categories and collection point creation.

use gloo_net::http::Request;
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{Item, NewPoint};

pub async fn list_items() -> Result<Vec<Item>, AppError> {
    let url = CONFIG.items_url();
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::ReferenceDataUnavailable(format!("Network error: {}", e)))?;
    if !response.ok() {
        return Err(AppError::ReferenceDataUnavailable(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        )));
    }
    let items = response
        .json::<Vec<Item>>()
        .await
        .map_err(|e| AppError::ReferenceDataUnavailable(format!("Parse error: {}", e)))?;
    log::info!("[API] Loaded {} items", items.len());
    Ok(items)
}

/// Create a collection point. The response body is only inspected on failure.
pub async fn create_point(point: &NewPoint) -> Result<(), AppError> {
    let url = CONFIG.points_url();
    log::info!("[API] Creating point {:?} with {} items", point.name, point.items.len());

    let response = Request::post(&url)
        .json(point)
        .map_err(|e| AppError::SubmissionRejected(format!("Serialization error: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::SubmissionRejected(format!("Network error: {}", e)))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let fallback = format!("HTTP {}: {}", status, response.status_text());
    let body = response.text().await.unwrap_or_default();
    log::warn!("[API] Point rejected with status {}", status);
    Err(AppError::SubmissionRejected(
        rejection_detail(&body).unwrap_or(fallback),
    ))
}

/// Pull a human-readable reason out of an error body.
///
/// Understands `{"message": ...}` and celebrate-style
/// `{"validation": {"body": {"message": ...}}}`; anything else that is not
/// JSON is returned as-is when non-empty.
pub fn rejection_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return Some(body.to_string());
    };

    let validation = value
        .get("validation")
        .and_then(Value::as_object)
        .and_then(|segments| {
            segments
                .values()
                .find_map(|segment| segment.get("message").and_then(Value::as_str))
        });

    validation
        .or_else(|| value.get("message").and_then(Value::as_str))
        .or_else(|| value.get("error").and_then(Value::as_str))
        .map(str::to_string)
}
