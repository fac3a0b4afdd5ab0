#![allow(dead_code)]

use panview_core::{Display, ModalKind, PageView, PreviewView};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Page with both navs and a dropdown, all present.
#[derive(Default)]
pub struct FakePage {
    pub markers: RefCell<HashSet<String>>,
    pub secondary_top: RefCell<String>,
    pub dropdown: RefCell<String>,
}

impl PageView for FakePage {
    fn has_marker(&self, marker: &str) -> bool {
        self.markers.borrow().contains(marker)
    }

    fn set_marker(&self, marker: &str, present: bool) {
        let mut markers = self.markers.borrow_mut();
        if present {
            markers.insert(marker.to_string());
        } else {
            markers.remove(marker);
        }
    }

    fn primary_nav_height(&self) -> Option<f64> {
        Some(52.0)
    }

    fn has_secondary_nav(&self) -> bool {
        true
    }

    fn set_secondary_nav_top(&self, top: &str) {
        *self.secondary_top.borrow_mut() = top.to_string();
    }

    fn dropdown_display(&self) -> Option<String> {
        Some(self.dropdown.borrow().clone())
    }

    fn set_dropdown_display(&self, display: Display) {
        *self.dropdown.borrow_mut() = display.as_css().to_string();
    }
}

/// Preview modals with both dialogs starting hidden.
pub struct FakePreview {
    pub displays: RefCell<HashMap<ModalKind, Display>>,
    pub image_src: RefCell<String>,
    pub image_transform: RefCell<String>,
    pub text: RefCell<String>,
}

impl Default for FakePreview {
    fn default() -> Self {
        let displays = ModalKind::ALL.iter().map(|&m| (m, Display::None)).collect();
        Self {
            displays: RefCell::new(displays),
            image_src: RefCell::default(),
            image_transform: RefCell::default(),
            text: RefCell::default(),
        }
    }
}

impl FakePreview {
    pub fn is_open(&self, modal: ModalKind) -> bool {
        self.displays.borrow()[&modal] != Display::None
    }
}

impl PreviewView for FakePreview {
    fn set_image_source(&self, url: &str) {
        *self.image_src.borrow_mut() = url.to_string();
    }

    fn set_image_transform(&self, transform: &str) {
        *self.image_transform.borrow_mut() = transform.to_string();
    }

    fn set_text_content(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }

    fn set_modal_display(&self, modal: ModalKind, display: Display) {
        self.displays.borrow_mut().insert(modal, display);
    }
}
