//! Browser entry points for the file listing page.
//!
//! The page loads the wasm module and calls `start()` (or
//! `bootWithConfig(json)` for non-default markup). Booting also installs the
//! page actions as `window` globals so the templates' inline `onclick`
//! handlers (`toggleDark()`, `closePreview(event)`, ...) can reach them.

mod app;
mod errors;
mod events;
mod fetch;
mod page_view;
mod preview_view;
mod storage;

use panview_core::PageConfig;
use wasm_bindgen::prelude::*;

pub use app::App;
pub use fetch::fetch_text;
pub use page_view::DomPage;
pub use preview_view::DomPreview;
pub use storage::BrowserStore;

fn init_diagnostics() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

fn set_global(window: &web_sys::Window, name: &str, function: JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(window, &JsValue::from_str(name), &function)?;
    Ok(())
}

/// Install the page actions on `window` under the names the templates use.
fn expose_on_window() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let toggle_dark_fn = Closure::wrap(Box::new(toggle_dark) as Box<dyn FnMut()>);
    set_global(&window, "toggleDark", toggle_dark_fn.into_js_value())?;

    let toggle_nav_fn = Closure::wrap(Box::new(toggle_nav) as Box<dyn FnMut()>);
    set_global(&window, "toggleNav", toggle_nav_fn.into_js_value())?;

    let dropdown_fn = Closure::wrap(Box::new(toggle_chapter_dropdown) as Box<dyn FnMut()>);
    set_global(&window, "toggleChapterDropdown", dropdown_fn.into_js_value())?;

    let open_image_fn = Closure::wrap(
        Box::new(|url: String| open_preview(&url)) as Box<dyn FnMut(String)>
    );
    set_global(&window, "openPreview", open_image_fn.into_js_value())?;

    let open_text_fn = Closure::wrap(Box::new(open_text_preview) as Box<dyn FnMut(String)>);
    set_global(&window, "openTextPreview", open_text_fn.into_js_value())?;

    let open_file_fn = Closure::wrap(Box::new(|url: String, filename: String| {
        open_file_preview(url, &filename)
    }) as Box<dyn FnMut(String, String)>);
    set_global(&window, "openFilePreview", open_file_fn.into_js_value())?;

    let close_fn = Closure::wrap(Box::new(close_preview) as Box<dyn FnMut(web_sys::Event)>);
    set_global(&window, "closePreview", close_fn.into_js_value())?;

    Ok(())
}

/// Boot with the default element names.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    init_diagnostics();
    expose_on_window()?;
    app::boot(PageConfig::default());
    Ok(())
}

/// Boot with a JSON object of `PageConfig` overrides.
#[wasm_bindgen(js_name = bootWithConfig)]
pub fn boot_with_config(json: &str) -> Result<(), JsValue> {
    init_diagnostics();
    let config = PageConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    expose_on_window()?;
    app::boot(config);
    Ok(())
}

#[wasm_bindgen(js_name = toggleDark)]
pub fn toggle_dark() {
    app::with_app(|app| app.toggle_dark_mode());
}

#[wasm_bindgen(js_name = toggleNav)]
pub fn toggle_nav() {
    app::with_app(|app| app.toggle_nav());
}

#[wasm_bindgen(js_name = toggleChapterDropdown)]
pub fn toggle_chapter_dropdown() {
    app::with_app(|app| app.toggle_chapter_dropdown());
}

#[wasm_bindgen(js_name = openPreview)]
pub fn open_preview(image_url: &str) {
    app::with_app(|app| app.open_image(image_url));
}

#[wasm_bindgen(js_name = openTextPreview)]
pub fn open_text_preview(file_url: String) {
    app::with_app(|app| app.open_text(file_url));
}

/// Open whichever preview fits `filename`; files with no preview are ignored.
#[wasm_bindgen(js_name = openFilePreview)]
pub fn open_file_preview(file_url: String, filename: &str) {
    app::with_app(|app| app.open_file(file_url, filename));
}

#[wasm_bindgen(js_name = closePreview)]
pub fn close_preview(event: web_sys::Event) {
    app::with_app(|app| app.close(&event));
}
