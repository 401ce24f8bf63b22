//! Browser file access.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::{AppError, AppResult};

/// Read a user-selected file as UTF-8 text.
pub async fn read_text(file: &File) -> AppResult<String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| AppError::File(format!("{}: {}", file.name(), js_error_message(&e))))?;

    text.as_string()
        .ok_or_else(|| AppError::File(format!("{}: content is not text", file.name())))
}

/// Extract a readable message from a rejected JS promise.
pub(crate) fn js_error_message(error: &JsValue) -> String {
    js_sys::Reflect::get(error, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
