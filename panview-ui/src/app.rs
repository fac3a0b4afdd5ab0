// panview-ui/src/app.rs
//! The booted page: both controllers plus the listeners that drive them.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use panview_core::{
    preview_kind_for, CloseEvent, NavigationController, PageConfig, PreviewController,
    PreviewKind,
};
use web_sys::{Document, MouseEvent, WheelEvent};

use crate::events::{listen, listen_active, on_dom_ready, on_window_load};
use crate::fetch::fetch_text;
use crate::page_view::{query_html, DomPage};
use crate::preview_view::DomPreview;
use crate::storage::BrowserStore;

thread_local! {
    /// Set once the DOM is ready. Exports called before that are ignored.
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

pub struct App {
    navigation: NavigationController<DomPage, BrowserStore>,
    preview: RefCell<PreviewController<DomPreview>>,
}

impl App {
    fn resolve(document: &Document, config: &PageConfig) -> Self {
        let page = DomPage::resolve(document, config);
        let missing = page.missing();
        if missing.is_empty() {
            log::info!("Page chrome ready");
        } else {
            log::info!("Page chrome ready; not on this page: {}", missing.join(", "));
        }

        Self {
            navigation: NavigationController::new(page, BrowserStore::open(), config),
            preview: RefCell::new(PreviewController::new(DomPreview::resolve(document, config))),
        }
    }

    pub fn toggle_dark_mode(&self) {
        self.navigation.toggle_dark_mode();
    }

    /// Flip the nav panel and reposition the secondary nav once layout settles.
    pub fn toggle_nav(self: &Rc<Self>) {
        self.navigation.toggle_nav();

        let app = Rc::clone(self);
        leptos::set_timeout(
            move || {
                app.navigation.recompute_nav_offset();
            },
            self.navigation.settle_delay(),
        );
    }

    pub fn recompute_nav_offset(&self) {
        self.navigation.recompute_nav_offset();
    }

    pub fn toggle_chapter_dropdown(&self) {
        self.navigation.toggle_chapter_dropdown();
    }

    pub fn open_image(&self, url: &str) {
        self.preview.borrow().open_image(url);
    }

    /// Fetch `url` and show it in the text modal. The ticket is taken before
    /// the request starts so call order decides which result wins.
    pub fn open_text(self: &Rc<Self>, url: String) {
        let ticket = self.preview.borrow_mut().begin_text_fetch();
        let app = Rc::clone(self);
        leptos::spawn_local(async move {
            let result = fetch_text(&url).await;
            app.preview.borrow_mut().finish_text_fetch(ticket, result);
        });
    }

    pub fn open_file(self: &Rc<Self>, url: String, filename: &str) {
        match preview_kind_for(filename) {
            Some(PreviewKind::Image) => self.open_image(&url),
            Some(PreviewKind::Text) => self.open_text(url),
            None => log::info!("No preview available for {}", filename),
        }
    }

    pub fn close(&self, event: &web_sys::Event) {
        let preview = self.preview.borrow();
        let target = preview.view().click_target(event);
        preview.close(&CloseEvent::new(target));
    }

    fn attach_listeners(self: &Rc<Self>, document: &Document, config: &PageConfig) {
        if let Some(toggle) = query_html(document, &config.dropdown_toggle_selector) {
            let app = Rc::clone(self);
            listen(&toggle, "click", move |e: MouseEvent| {
                // Keep the document-level click-away handler from closing it again
                e.stop_propagation();
                app.toggle_chapter_dropdown();
            });
        }

        if let Some(image) = self.preview.borrow().view().image() {
            let app = Rc::clone(self);
            listen_active(image, "wheel", move |e: WheelEvent| {
                app.preview.borrow_mut().on_wheel(e.delta_y());
                e.prevent_default();
            });

            let app = Rc::clone(self);
            listen(image, "contextmenu", move |e: MouseEvent| {
                app.preview.borrow_mut().on_context_menu();
                e.prevent_default();
            });
        }

        let app = Rc::clone(self);
        on_window_load(move || app.recompute_nav_offset());

        let app = Rc::clone(self);
        let _ = leptos::window_event_listener(ev::resize, move |_| app.recompute_nav_offset());
    }
}

/// Wire up the page once the DOM is ready. A second boot is ignored.
pub fn boot(config: PageConfig) {
    on_dom_ready(move || {
        if APP.with(|cell| cell.borrow().is_some()) {
            log::warn!("panview already booted; ignoring");
            return;
        }

        let document = leptos::document();
        let app = Rc::new(App::resolve(&document, &config));
        app.navigation.restore_preferences();
        app.attach_listeners(&document, &config);

        APP.with(|cell| *cell.borrow_mut() = Some(app));
    });
}

/// Run `f` against the booted app, or log and skip if boot has not finished.
pub fn with_app<R>(f: impl FnOnce(&Rc<App>) -> R) -> Option<R> {
    let app = APP.with(|cell| cell.borrow().clone());
    match app {
        Some(app) => Some(f(&app)),
        None => {
            log::warn!("panview called before the page finished booting");
            None
        }
    }
}
