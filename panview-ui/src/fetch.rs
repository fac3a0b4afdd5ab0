//! Plain GET of a file body as text.

use panview_core::PanviewError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::errors::js_error_message;

/// Fetch `url` and read the body as text.
///
/// The HTTP status is not checked: an error page is still text and is
/// returned as such. Only a rejected request or an unreadable body fails.
pub async fn fetch_text(url: &str) -> Result<String, PanviewError> {
    let window =
        web_sys::window().ok_or_else(|| PanviewError::Network("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| PanviewError::Network(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| PanviewError::Network(js_error_message(&e)))?;

    let body = response
        .text()
        .map_err(|e| PanviewError::Body(js_error_message(&e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| PanviewError::Body(js_error_message(&e)))?;

    text.as_string()
        .ok_or_else(|| PanviewError::Body("response body is not a string".to_string()))
}
