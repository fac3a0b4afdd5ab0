//! Typed click events for dismissing preview modals.

/// The two preview modals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Image,
    Text,
}

impl ModalKind {
    pub const ALL: [ModalKind; 2] = [ModalKind::Image, ModalKind::Text];
}

/// What a click landed on, as far as closing previews is concerned.
///
/// An element can be both a modal backdrop and close-marked, so these are
/// independent facts rather than variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// Set when the target is the backdrop element of this modal
    pub backdrop_of: Option<ModalKind>,
    /// Set when the target carries the close marker
    pub close_marked: bool,
}

impl ClickTarget {
    pub fn backdrop(modal: ModalKind) -> Self {
        Self {
            backdrop_of: Some(modal),
            close_marked: false,
        }
    }

    pub fn close_control() -> Self {
        Self {
            backdrop_of: None,
            close_marked: true,
        }
    }

    /// Anything else on the page (modal content, image, text).
    pub fn other() -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseEvent {
    source: ClickTarget,
}

impl CloseEvent {
    pub fn new(source: ClickTarget) -> Self {
        Self { source }
    }

    pub fn source(&self) -> ClickTarget {
        self.source
    }

    /// Whether this event dismisses `modal`: a click on its own backdrop, or
    /// on any close-marked control.
    pub fn closes(&self, modal: ModalKind) -> bool {
        self.source.backdrop_of == Some(modal) || self.source.close_marked
    }
}
