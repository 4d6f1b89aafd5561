//! WebAssembly form controllers for GateDesk
//!
//! Mounts the advanced editor's predicate/filter lists and the simple
//! editor's example preview on whichever of them the current page contains.

pub mod dom;
pub mod list_builder;
pub mod previewer;

use std::cell::RefCell;
use std::sync::Once;

use gd_core::{ListSpec, PreviewConfig, PreviewInput, RewriteMode};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState};

use list_builder::{ListBuilderController, MountedList};
use previewer::{MountedPreviewer, PreviewIds, Previewer};

/// Controllers mounted on the current page.
#[derive(Default)]
pub struct Page {
    pub predicates: Option<MountedList>,
    pub filters: Option<MountedList>,
    pub previewer: Option<MountedPreviewer>,
}

impl Page {
    /// Mount every controller whose anchor element exists.
    pub fn mount(document: &Document) -> Self {
        Self {
            predicates: ListBuilderController::new(document.clone(), ListSpec::PREDICATES).mount(),
            filters: ListBuilderController::new(document.clone(), ListSpec::FILTERS).mount(),
            previewer: Previewer::new(document.clone(), PreviewIds::default(), PreviewConfig::default())
                .mount(),
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

static LOGGER: Once = Once::new();

fn mount_page(document: &Document) {
    let page = Page::mount(document);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Mount the page controllers now, or on `DOMContentLoaded` while the
/// document is still loading. Replaces any page mounted earlier.
pub fn mount_when_ready(document: &Document, ready_state: DocumentReadyState) {
    if ready_state == DocumentReadyState::Loading {
        let target = document.clone();
        EventListener::once(document, "DOMContentLoaded", move |_| mount_page(&target)).forget();
    } else {
        mount_page(document);
    }
}

/// Drop the mounted controllers and their listeners.
pub fn unmount() {
    PAGE.with(|slot| slot.borrow_mut().take());
}

#[wasm_bindgen(start)]
pub fn start() {
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::default()));

    let Some(document) = dom::document() else {
        return;
    };
    mount_when_ready(&document, document.ready_state());
}

fn with_page(f: impl FnOnce(&Page)) {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow().as_ref() {
            f(page);
        }
    });
}

#[wasm_bindgen(js_name = addPredicate)]
pub fn add_predicate() {
    with_page(|page| {
        if let Some(list) = &page.predicates {
            list.controller().add_item();
        }
    });
}

#[wasm_bindgen(js_name = addFilter)]
pub fn add_filter() {
    with_page(|page| {
        if let Some(list) = &page.filters {
            list.controller().add_item();
        }
    });
}

#[wasm_bindgen(js_name = toggleRewriteOptions)]
pub fn toggle_rewrite_options() {
    with_page(|page| {
        if let Some(mounted) = &page.previewer {
            mounted.previewer().toggle_rewrite_options();
        }
    });
}

#[wasm_bindgen(js_name = updateExample)]
pub fn update_example() {
    with_page(|page| {
        if let Some(mounted) = &page.previewer {
            mounted.previewer().update_preview();
        }
    });
}

/// Compute a preview without touching the page.
#[wasm_bindgen(js_name = previewExample)]
pub fn preview_example(
    incoming_path: &str,
    target_uri: &str,
    rewrite_type: &str,
    target_path: &str,
) -> JsValue {
    let preview = PreviewConfig::default().render(&PreviewInput {
        incoming_path,
        target_uri,
        mode: RewriteMode::from_value(rewrite_type),
        target_path,
    });

    let result = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&result, &"request".into(), &JsValue::from_str(&preview.request_url));
    let _ = js_sys::Reflect::set(&result, &"forward".into(), &JsValue::from_str(&preview.forward_url));
    let _ = js_sys::Reflect::set(&result, &"forwardPath".into(), &JsValue::from_str(&preview.forward_path));
    result.into()
}
