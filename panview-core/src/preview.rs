//! Image and text preview modals.
//!
//! The controller owns the zoom/rotation state and the text request
//! generation. Fetching itself happens outside: callers take a ticket with
//! [`PreviewController::begin_text_fetch`], perform the request, and hand the
//! result back to [`PreviewController::finish_text_fetch`]. Only the result
//! for the newest ticket is displayed.

use crate::close_event::{CloseEvent, ModalKind};
use crate::error::PanviewError;
use crate::page::Display;
use crate::transform::PreviewTransform;

/// Preview modal elements. Implementations must ignore calls whose target
/// element is missing from the page.
pub trait PreviewView {
    fn set_image_source(&self, url: &str);

    fn set_image_transform(&self, transform: &str);

    /// Replace the text modal's content with `text`, verbatim.
    fn set_text_content(&self, text: &str);

    fn set_modal_display(&self, modal: ModalKind, display: Display);
}

/// Identifies one text preview request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a finished text request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Content displayed and the text modal opened
    Shown,
    /// The request failed; the error was logged and nothing changed
    Failed,
    /// A newer request was started meanwhile; the result was dropped
    Stale,
}

pub struct PreviewController<V: PreviewView> {
    view: V,
    transform: PreviewTransform,
    latest_generation: u64,
}

impl<V: PreviewView> PreviewController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            transform: PreviewTransform::default(),
            latest_generation: 0,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transform(&self) -> PreviewTransform {
        self.transform
    }

    /// Show `url` in the image modal. Zoom and rotation carry over from the
    /// previous image.
    pub fn open_image(&self, url: &str) {
        self.view.set_image_source(url);
        self.view.set_modal_display(ModalKind::Image, Display::Flex);
    }

    /// Start a text preview request. Any request begun earlier becomes stale.
    pub fn begin_text_fetch(&mut self) -> FetchTicket {
        self.latest_generation += 1;
        FetchTicket {
            generation: self.latest_generation,
        }
    }

    /// Complete a text preview request started with `ticket`.
    pub fn finish_text_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<String, PanviewError>,
    ) -> FetchOutcome {
        let text = match result {
            Ok(text) => text,
            Err(e) => {
                log::error!("Error loading file: {}", e);
                return FetchOutcome::Failed;
            }
        };

        if ticket.generation != self.latest_generation {
            log::debug!(
                "Dropping stale text preview (generation {}, latest {})",
                ticket.generation,
                self.latest_generation
            );
            return FetchOutcome::Stale;
        }

        self.view.set_text_content(&text);
        self.view.set_modal_display(ModalKind::Text, Display::Flex);
        FetchOutcome::Shown
    }

    /// Hide every modal the event dismisses. Both modals are checked
    /// independently.
    pub fn close(&self, event: &CloseEvent) {
        for modal in ModalKind::ALL {
            if event.closes(modal) {
                self.view.set_modal_display(modal, Display::None);
            }
        }
    }

    /// Handle a wheel tick over the preview image.
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.transform.zoom(delta_y);
        self.view.set_image_transform(&self.transform.scale_css());
    }

    /// Handle a right-click on the preview image.
    pub fn on_context_menu(&mut self) {
        self.transform.rotate();
        self.view.set_image_transform(&self.transform.css());
    }
}
