//! View abstraction over the page chrome: root markers, the two nav panels
//! and the chapter dropdown.

/// CSS `display` values the controllers write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Flex => "flex",
        }
    }
}

/// Page elements used by the navigation controller.
///
/// Implementations resolve their elements once. Every method must tolerate
/// an element missing from the page by doing nothing (or returning `None`).
pub trait PageView {
    /// Whether the page root carries `marker`.
    fn has_marker(&self, marker: &str) -> bool;

    /// Add or remove `marker` on the page root.
    fn set_marker(&self, marker: &str, present: bool);

    /// Rendered height of the primary nav in CSS pixels, `None` if absent.
    fn primary_nav_height(&self) -> Option<f64>;

    fn has_secondary_nav(&self) -> bool;

    /// Set the secondary nav's `top` style.
    fn set_secondary_nav_top(&self, top: &str);

    /// Inline `display` style of the dropdown menu, `None` if the menu is absent.
    fn dropdown_display(&self) -> Option<String>;

    fn set_dropdown_display(&self, display: Display);
}
