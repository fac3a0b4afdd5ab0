use wasm_bindgen::{JsCast, JsValue};

/// Human-readable text for a rejected promise or thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(error.name());
        let message = String::from(error.message());
        return format!("{name}: {message}");
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
