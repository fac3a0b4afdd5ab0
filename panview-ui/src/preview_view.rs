use panview_core::{ClickTarget, Display, ModalKind, PageConfig, PreviewView};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

/// Preview modal elements resolved once at boot.
pub struct DomPreview {
    image_modal: Option<HtmlElement>,
    image: Option<HtmlImageElement>,
    text_modal: Option<HtmlElement>,
    text_content: Option<HtmlElement>,
    close_marker: String,
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

impl DomPreview {
    pub fn resolve(document: &Document, config: &PageConfig) -> Self {
        Self {
            image_modal: by_id(document, &config.image_modal_id),
            image: by_id(document, &config.preview_image_id),
            text_modal: by_id(document, &config.text_modal_id),
            text_content: by_id(document, &config.text_content_id),
            close_marker: config.close_marker.clone(),
        }
    }

    pub fn image(&self) -> Option<&HtmlImageElement> {
        self.image.as_ref()
    }

    fn modal(&self, modal: ModalKind) -> Option<&HtmlElement> {
        match modal {
            ModalKind::Image => self.image_modal.as_ref(),
            ModalKind::Text => self.text_modal.as_ref(),
        }
    }

    /// Classify a click for the close handler: is it a modal's own backdrop,
    /// and does it carry the close marker?
    pub fn click_target(&self, event: &web_sys::Event) -> ClickTarget {
        let Some(target) = event.target() else {
            return ClickTarget::other();
        };
        let target = AsRef::<JsValue>::as_ref(&target);

        let backdrop_of = ModalKind::ALL.into_iter().find(|&kind| {
            self.modal(kind).is_some_and(|modal| {
                js_sys::Object::is(AsRef::<JsValue>::as_ref(modal), target)
            })
        });
        let close_marked = target
            .dyn_ref::<Element>()
            .is_some_and(|el| el.class_list().contains(&self.close_marker));

        ClickTarget {
            backdrop_of,
            close_marked,
        }
    }
}

impl PreviewView for DomPreview {
    fn set_image_source(&self, url: &str) {
        if let Some(image) = &self.image {
            image.set_src(url);
        }
    }

    fn set_image_transform(&self, transform: &str) {
        if let Some(image) = &self.image {
            let _ = image.style().set_property("transform", transform);
        }
    }

    fn set_text_content(&self, text: &str) {
        if let Some(content) = &self.text_content {
            content.set_text_content(Some(text));
        }
    }

    fn set_modal_display(&self, modal: ModalKind, display: Display) {
        if let Some(el) = self.modal(modal) {
            let _ = el.style().set_property("display", display.as_css());
        }
    }
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use panview_core::{CloseEvent, PreviewController};
    use wasm_bindgen_test::*;
    use web_sys::EventTarget;

    wasm_bindgen_test_configure!(run_in_browser);

    const MARKUP: &str = r#"
        <div id="imagePreviewModal" style="display:none">
            <span class="close">&times;</span>
            <img id="previewImage">
        </div>
        <div id="textPreviewModal" style="display:none">
            <pre id="textPreviewContent"></pre>
        </div>"#;

    fn mount() -> (Document, HtmlElement) {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        container.set_inner_html(MARKUP);
        document.body().unwrap().append_child(&container).unwrap();
        (document, container)
    }

    /// Dispatch a click on `target`; the event keeps its target afterwards.
    fn classify_click(preview: &DomPreview, target: &EventTarget) -> ClickTarget {
        let event = web_sys::Event::new("click").unwrap();
        target.dispatch_event(&event).unwrap();
        preview.click_target(&event)
    }

    #[wasm_bindgen_test]
    fn classifies_backdrop_close_and_content() {
        let (document, container) = mount();
        let preview = DomPreview::resolve(&document, &PageConfig::default());

        let modal = document.get_element_by_id("imagePreviewModal").unwrap();
        assert_eq!(
            classify_click(&preview, &modal),
            ClickTarget::backdrop(ModalKind::Image)
        );

        let close = document.query_selector(".close").unwrap().unwrap();
        assert_eq!(
            classify_click(&preview, &close),
            ClickTarget::close_control()
        );

        let image = document.get_element_by_id("previewImage").unwrap();
        assert_eq!(classify_click(&preview, &image), ClickTarget::other());

        container.remove();
    }

    #[wasm_bindgen_test]
    fn open_and_close_image_modal() {
        let (document, container) = mount();
        let preview =
            PreviewController::new(DomPreview::resolve(&document, &PageConfig::default()));
        let modal = document
            .get_element_by_id("imagePreviewModal")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();

        preview.open_image("data:image/gif;base64,R0lGODlhAQABAAAAACw=");
        assert_eq!(modal.style().get_property_value("display").unwrap(), "flex");

        preview.close(&CloseEvent::new(ClickTarget::close_control()));
        assert_eq!(modal.style().get_property_value("display").unwrap(), "none");

        container.remove();
    }

    #[wasm_bindgen_test]
    fn wheel_and_rotate_write_transform() {
        let (document, container) = mount();
        let mut preview =
            PreviewController::new(DomPreview::resolve(&document, &PageConfig::default()));
        let image = preview.view().image().unwrap().clone();

        preview.on_wheel(100.0);
        assert_eq!(image.style().get_property_value("transform").unwrap(), "scale(0.9)");

        preview.on_context_menu();
        assert_eq!(
            image.style().get_property_value("transform").unwrap(),
            "scale(0.9) rotate(90deg)"
        );

        container.remove();
    }

    #[wasm_bindgen_test]
    fn text_content_is_not_parsed_as_html() {
        let (document, container) = mount();
        let mut preview =
            PreviewController::new(DomPreview::resolve(&document, &PageConfig::default()));

        let ticket = preview.begin_text_fetch();
        preview.finish_text_fetch(ticket, Ok("<b>bold</b>".to_string()));

        let content = document.get_element_by_id("textPreviewContent").unwrap();
        assert_eq!(content.text_content().unwrap(), "<b>bold</b>");
        assert_eq!(content.child_element_count(), 0);

        container.remove();
    }
}
