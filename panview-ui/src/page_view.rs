// panview-ui/src/page_view.rs
use panview_core::{Display, PageConfig, PageView};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// First element matching `selector`, if it is an HTML element.
pub(crate) fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Page chrome resolved once at boot.
pub struct DomPage {
    root: Option<HtmlElement>,
    primary_nav: Option<HtmlElement>,
    secondary_nav: Option<HtmlElement>,
    dropdown_menu: Option<HtmlElement>,
}

impl DomPage {
    pub fn resolve(document: &Document, config: &PageConfig) -> Self {
        Self {
            root: document.body(),
            primary_nav: query_html(document, &config.primary_nav_selector),
            secondary_nav: query_html(document, &config.secondary_nav_selector),
            dropdown_menu: query_html(document, &config.dropdown_menu_selector),
        }
    }

    /// Names of the optional elements that were not found, for the boot log.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("primary nav", self.primary_nav.is_some()),
            ("secondary nav", self.secondary_nav.is_some()),
            ("dropdown menu", self.dropdown_menu.is_some()),
        ]
        .into_iter()
        .filter(|(_, found)| !found)
        .map(|(name, _)| name)
        .collect()
    }
}

impl PageView for DomPage {
    fn has_marker(&self, marker: &str) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.class_list().contains(marker))
    }

    fn set_marker(&self, marker: &str, present: bool) {
        if let Some(root) = &self.root {
            let _ = root.class_list().toggle_with_force(marker, present);
        }
    }

    fn primary_nav_height(&self) -> Option<f64> {
        self.primary_nav
            .as_ref()
            .map(|nav| f64::from(nav.offset_height()))
    }

    fn has_secondary_nav(&self) -> bool {
        self.secondary_nav.is_some()
    }

    fn set_secondary_nav_top(&self, top: &str) {
        if let Some(nav) = &self.secondary_nav {
            let _ = nav.style().set_property("top", top);
        }
    }

    fn dropdown_display(&self) -> Option<String> {
        let menu = self.dropdown_menu.as_ref()?;
        Some(menu.style().get_property_value("display").unwrap_or_default())
    }

    fn set_dropdown_display(&self, display: Display) {
        if let Some(menu) = &self.dropdown_menu {
            let _ = menu.style().set_property("display", display.as_css());
        }
    }
}
