pub mod close_event;
pub mod config;
pub mod error;
pub mod navigation;
pub mod page;
pub mod preference;
pub mod preview;
pub mod preview_kind;
pub mod transform;

pub use close_event::{ClickTarget, CloseEvent, ModalKind};
pub use config::PageConfig;
pub use error::PanviewError;
pub use navigation::{nav_offset_css, NavigationController};
pub use page::{Display, PageView};
pub use preference::{parse_dark_mode, MemoryStore, PreferenceStore};
pub use preview::{FetchOutcome, FetchTicket, PreviewController, PreviewView};
pub use preview_kind::{preview_kind_for, PreviewKind};
pub use transform::PreviewTransform;
