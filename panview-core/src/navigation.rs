//! Dark mode, slide-out nav and chapter dropdown.

use std::time::Duration;

use crate::config::PageConfig;
use crate::page::{Display, PageView};
use crate::preference::{encode_dark_mode, parse_dark_mode, PreferenceStore};

/// `top` value placing the secondary nav directly below a primary nav of
/// `height` pixels.
pub fn nav_offset_css(height: f64) -> String {
    format!("calc(100% + {height}px)")
}

/// Controller for the page chrome. Holds no state of its own: markers live on
/// the page root and the preference lives in the store.
pub struct NavigationController<V: PageView, S: PreferenceStore> {
    view: V,
    store: S,
    dark_marker: String,
    nav_open_marker: String,
    storage_key: String,
    settle_delay: Duration,
}

impl<V: PageView, S: PreferenceStore> NavigationController<V, S> {
    pub fn new(view: V, store: S, config: &PageConfig) -> Self {
        Self {
            view,
            store,
            dark_marker: config.dark_marker.clone(),
            nav_open_marker: config.nav_open_marker.clone(),
            storage_key: config.storage_key.clone(),
            settle_delay: Duration::from_millis(u64::from(config.nav_settle_delay_ms)),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip dark mode and persist the new state. Returns whether dark mode is now on.
    pub fn toggle_dark_mode(&self) -> bool {
        let enabled = !self.view.has_marker(&self.dark_marker);
        self.view.set_marker(&self.dark_marker, enabled);

        if let Err(e) = self.store.set(&self.storage_key, encode_dark_mode(enabled)) {
            log::warn!("Failed to persist dark mode preference: {}", e);
        }
        enabled
    }

    /// Apply the persisted dark-mode preference. Never turns dark mode off.
    pub fn restore_preferences(&self) -> bool {
        let stored = self.store.get(&self.storage_key);
        let enabled = parse_dark_mode(stored.as_deref());
        if enabled {
            self.view.set_marker(&self.dark_marker, true);
        }
        enabled
    }

    /// Flip the nav-open marker. Returns whether the nav is now open.
    ///
    /// The caller must run [`Self::recompute_nav_offset`] once
    /// [`Self::settle_delay`] has elapsed so the panel has its new height.
    pub fn toggle_nav(&self) -> bool {
        let open = !self.view.has_marker(&self.nav_open_marker);
        self.view.set_marker(&self.nav_open_marker, open);
        open
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Move the secondary nav below the primary one. Returns the applied
    /// height, or `None` when either nav is missing.
    pub fn recompute_nav_offset(&self) -> Option<f64> {
        if !self.view.has_secondary_nav() {
            return None;
        }
        let height = self.view.primary_nav_height()?;
        self.view.set_secondary_nav_top(&nav_offset_css(height));
        Some(height)
    }

    /// Show or hide the chapter dropdown. Returns the new visibility, or
    /// `None` when the menu is missing.
    pub fn toggle_chapter_dropdown(&self) -> Option<bool> {
        let current = self.view.dropdown_display()?;
        let show = current != Display::Block.as_css();
        self.view.set_dropdown_display(if show {
            Display::Block
        } else {
            Display::None
        });
        Some(show)
    }
}
