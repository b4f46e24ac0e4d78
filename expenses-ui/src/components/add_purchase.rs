//! Add-Purchase Toggle
//!
//! Reveals the hidden add-purchase form. Submission is plain HTML.

use expenses::config::ElementsConfig;
use expenses::{PageError, PageResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom::js_error;

const HIDDEN_CLASS: &str = "hidden";

/// Attach the click handler to the toggle control
///
/// Returns `Ok(false)` when the page has no toggle (signed-out visitors).
pub fn bind(document: &Document, elements: &ElementsConfig) -> PageResult<bool> {
    let Some(toggle) = document.get_element_by_id(&elements.toggle) else {
        return Ok(false);
    };

    let form = document
        .get_element_by_id(&elements.form)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", elements.form)))?;
    let name_field = form
        .query_selector(&format!("[name=\"{}\"]", elements.name_field))
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| {
            PageError::MissingElement(format!("#{} [name={}]", elements.form, elements.name_field))
        })?;

    let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let _ = form.class_list().remove_1(HIDDEN_CLASS);
        let _ = name_field.focus();
    }) as Box<dyn FnMut(web_sys::Event)>);
    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_click.forget();

    Ok(true)
}
