//! Small DOM helpers shared by the controllers.
//!
//! Lookups return `Option` because every element the forms depend on may be
//! missing from a given page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// The page's document, if running inside a window.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Current value of an input, select or text area. Missing or
/// non-form elements read as empty.
pub fn field_value(document: &Document, id: &str) -> String {
    let Some(element) = document.get_element_by_id(id) else {
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// `document.createElement(tag)` with a class list and optional text.
pub fn create_element(
    document: &Document,
    tag: &str,
    class: Option<&str>,
    text: Option<&str>,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    if text.is_some() {
        element.set_text_content(text);
    }
    Ok(element)
}

pub fn set_display(element: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    element
        .style()
        .set_property("display", if visible { "block" } else { "none" })
}
