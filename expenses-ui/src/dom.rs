//! Browser implementations of the page seams

use expenses::{Document, PageError, PageResult, ScrollMetrics, Viewport};
use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

/// Convert a JS exception into a page error
pub fn js_error(value: JsValue) -> PageError {
    PageError::Dom(format!("{:?}", value))
}

/// `web_sys` document the feed renders into
#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl Document for WebDocument {
    type Node = Element;

    fn create_block(&self, class: &str, text: Option<&str>) -> PageResult<Element> {
        let element = self.document.create_element("div").map_err(js_error)?;
        element.set_class_name(class);
        if text.is_some() {
            element.set_text_content(text);
        }
        Ok(element)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> PageResult<()> {
        parent.append_child(child).map_err(js_error)?;
        Ok(())
    }

    fn set_text(&self, node: &Element, text: &str) -> PageResult<()> {
        node.set_text_content(Some(text));
        Ok(())
    }
}

/// Scroll geometry of the browser window
pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Viewport for WindowViewport {
    fn metrics(&self) -> ScrollMetrics {
        let document_height = self
            .window
            .document()
            .and_then(|d| d.body())
            .map(|body| body.offset_height() as f64)
            .unwrap_or(0.0);
        let scroll_offset = self.window.page_y_offset().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);

        ScrollMetrics::new(document_height, scroll_offset, viewport_height)
    }
}
