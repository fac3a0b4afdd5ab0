//! Page configuration.
//!
//! Names every element and marker the controllers touch. Defaults match the
//! file listing templates; a page with different markup can pass overrides
//! as camelCase JSON.

use serde::Deserialize;

use crate::error::PanviewError;

/// Storage key for the dark-mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Delay before the secondary nav is repositioned after a toggle.
pub const NAV_SETTLE_DELAY_MS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Element id of the image preview modal (also its backdrop)
    pub image_modal_id: String,
    /// Element id of the `<img>` inside the image modal
    pub preview_image_id: String,
    /// Element id of the text preview modal (also its backdrop)
    pub text_modal_id: String,
    /// Element id of the text container inside the text modal
    pub text_content_id: String,
    pub primary_nav_selector: String,
    pub secondary_nav_selector: String,
    pub dropdown_toggle_selector: String,
    pub dropdown_menu_selector: String,
    /// Class applied to the page root while dark mode is on
    pub dark_marker: String,
    /// Class applied to the page root while the nav panel is open
    pub nav_open_marker: String,
    /// Class carried by controls that dismiss a preview
    pub close_marker: String,
    pub storage_key: String,
    pub nav_settle_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            image_modal_id: "imagePreviewModal".to_string(),
            preview_image_id: "previewImage".to_string(),
            text_modal_id: "textPreviewModal".to_string(),
            text_content_id: "textPreviewContent".to_string(),
            primary_nav_selector: ".nav-left".to_string(),
            secondary_nav_selector: ".nav-right".to_string(),
            dropdown_toggle_selector: ".dropdown-toggle".to_string(),
            dropdown_menu_selector: ".chapter-dropdown .dropdown-menu".to_string(),
            dark_marker: "dark".to_string(),
            nav_open_marker: "nav-open".to_string(),
            close_marker: "close".to_string(),
            storage_key: DARK_MODE_KEY.to_string(),
            nav_settle_delay_ms: NAV_SETTLE_DELAY_MS,
        }
    }
}

impl PageConfig {
    /// Parse a JSON object of overrides. Missing fields keep their defaults,
    /// and a blank string yields the default config.
    pub fn from_json(json: &str) -> Result<Self, PanviewError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
