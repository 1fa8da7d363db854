//! Browser Geolocation
//!
//! One-shot position query bridged into a future.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::AppError;
use crate::models::Position;

fn read_f64(target: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

/// `GeolocationPosition` -> `Position`
fn position_from_js(value: &JsValue) -> Option<Position> {
    let coords = js_sys::Reflect::get(value, &JsValue::from_str("coords")).ok()?;
    Some(Position::new(
        read_f64(&coords, "latitude")?,
        read_f64(&coords, "longitude")?,
    ))
}

/// `GeolocationPositionError` -> message
fn error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "position unavailable".to_string())
}

/// Ask the browser for the current position once. No timeout is set; the
/// future resolves whenever the browser answers.
pub async fn current_position() -> Result<Position, AppError> {
    let geolocation = web_sys::window()
        .ok_or_else(|| AppError::GeolocationUnavailable("no window".to_string()))?
        .navigator()
        .geolocation()
        .map_err(|e| AppError::GeolocationUnavailable(error_message(&e)))?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let result = geolocation.get_current_position_with_error_callback(
            &resolve,
            Some(&reject),
        );
        if let Err(e) = result {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let value = JsFuture::from(promise)
        .await
        .map_err(|e| AppError::GeolocationUnavailable(error_message(&e)))?;

    position_from_js(&value)
        .ok_or_else(|| AppError::GeolocationUnavailable("malformed position".to_string()))
}
