//! Predicate/filter list controller for the advanced route editor.

use std::cell::RefCell;
use std::rc::Rc;

use gd_core::{ItemBlueprint, ListBuilder, ListSpec};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom::create_element;

/// Class of the element wrapping one block.
pub const ITEM_CLASS: &str = "dynamic-item";
/// Marks the control that removes its enclosing block.
pub const REMOVE_ACTION: &str = "remove";

const REMOVE_SELECTOR: &str = "[data-action=\"remove\"]";
const ITEM_SELECTOR: &str = ".dynamic-item";

/// Adds blocks to one list. Cloning shares the counter.
#[derive(Clone)]
pub struct ListBuilderController {
    document: Document,
    builder: Rc<RefCell<ListBuilder>>,
}

/// A controller with its listeners registered. Dropping it unregisters them.
pub struct MountedList {
    controller: ListBuilderController,
    _listeners: Vec<EventListener>,
}

impl MountedList {
    pub fn controller(&self) -> &ListBuilderController {
        &self.controller
    }
}

impl ListBuilderController {
    pub fn new(document: Document, spec: ListSpec) -> Self {
        Self {
            document,
            builder: Rc::new(RefCell::new(ListBuilder::new(spec))),
        }
    }

    pub fn spec(&self) -> ListSpec {
        *self.builder.borrow().spec()
    }

    pub fn next_index(&self) -> usize {
        self.builder.borrow().next_index()
    }

    /// Append a new block to the container and advance the counter.
    ///
    /// Returns `None` when the container is not on the page; the counter is
    /// left alone in that case.
    pub fn add_item(&self) -> Option<Element> {
        match self.try_add_item() {
            Ok(item) => item,
            Err(e) => {
                log::warn!("Failed to add {} item: {:?}", self.spec().prefix, e);
                None
            }
        }
    }

    fn try_add_item(&self) -> Result<Option<Element>, JsValue> {
        let spec = self.spec();
        let Some(container) = self.document.get_element_by_id(spec.container_id) else {
            return Ok(None);
        };

        let blueprint = self.builder.borrow().peek();
        let item = render_item(&self.document, &blueprint)?;
        container.append_child(&item)?;
        self.builder.borrow_mut().next_item();

        log::debug!("Added {}", blueprint.title);
        Ok(Some(item))
    }

    /// Register the add-button and remove listeners.
    ///
    /// Returns `None` when the list's container is not on this page.
    pub fn mount(self) -> Option<MountedList> {
        let spec = self.spec();
        let container = self.document.get_element_by_id(spec.container_id)?;
        let mut listeners = Vec::with_capacity(2);

        if let Some(button) = self.document.get_element_by_id(spec.add_button_id) {
            let controller = self.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                controller.add_item();
            }));
        }

        // Remove clicks are delegated so blocks carry no handlers of their own.
        listeners.push(EventListener::new(&container, "click", |event| {
            let control = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(REMOVE_SELECTOR).ok().flatten());
            if let Some(control) = control {
                remove_item(&control);
            }
        }));

        log::info!("Mounted {} list on #{}", spec.prefix, spec.container_id);
        Some(MountedList {
            controller: self,
            _listeners: listeners,
        })
    }
}

/// Detach the block enclosing `control`.
///
/// Counters and sibling field names are untouched. Returns `false` when
/// `control` is not inside a block.
pub fn remove_item(control: &Element) -> bool {
    match control.closest(ITEM_SELECTOR) {
        Ok(Some(item)) => {
            item.remove();
            log::debug!("Removed list item");
            true
        }
        _ => false,
    }
}

fn render_item(document: &Document, item: &ItemBlueprint) -> Result<Element, JsValue> {
    let block = create_element(document, "div", Some(ITEM_CLASS), None)?;
    block.set_attribute("data-index", &item.index.to_string())?;

    let header = create_element(document, "div", Some("dynamic-item-header"), None)?;
    header.append_child(&create_element(
        document,
        "span",
        Some("item-number"),
        Some(&item.title),
    )?.into())?;
    let remove = create_element(
        document,
        "button",
        Some("btn btn-danger btn-small"),
        Some(ItemBlueprint::REMOVE_TEXT),
    )?;
    remove.set_attribute("type", "button")?;
    remove.set_attribute("data-action", REMOVE_ACTION)?;
    header.append_child(&remove)?;
    block.append_child(&header)?;

    let name_group = create_element(document, "div", Some("form-group"), None)?;
    name_group.append_child(&create_element(document, "label", None, Some(&item.name_label))?.into())?;
    let name = create_element(document, "input", None, None)?;
    name.set_attribute("type", "text")?;
    name.set_attribute("name", &item.name_field)?;
    name.set_attribute("placeholder", item.spec.name_placeholder)?;
    name_group.append_child(&name)?;
    name_group.append_child(&create_element(
        document,
        "div",
        Some("help-text"),
        Some(item.spec.name_help),
    )?.into())?;
    block.append_child(&name_group)?;

    let args_group = create_element(document, "div", Some("form-group"), None)?;
    args_group.append_child(&create_element(
        document,
        "label",
        None,
        Some(ItemBlueprint::ARGS_LABEL),
    )?.into())?;
    let args = create_element(document, "textarea", None, None)?;
    args.set_attribute("name", &item.args_field)?;
    args.set_attribute("placeholder", item.spec.args_placeholder)?;
    args.set_attribute("style", "min-height: 60px;")?;
    args_group.append_child(&args)?;
    args_group.append_child(&create_element(
        document,
        "div",
        Some("help-text"),
        Some(item.spec.args_help),
    )?.into())?;
    block.append_child(&args_group)?;

    Ok(block)
}
