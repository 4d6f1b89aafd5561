//! Live example preview for the simple route editor.

use std::rc::Rc;

use gd_core::{ExamplePreview, PreviewConfig, PreviewInput, RewriteMode};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::dom::{element_by_id, field_value, set_display};

/// Element ids the previewer reads from and writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewIds {
    pub incoming_path: &'static str,
    pub target_uri: &'static str,
    pub rewrite_type: &'static str,
    pub target_path: &'static str,
    pub rewrite_options: &'static str,
    pub example_text: &'static str,
}

impl Default for PreviewIds {
    fn default() -> Self {
        Self {
            incoming_path: "incomingPath",
            target_uri: "targetUri",
            rewrite_type: "rewriteType",
            target_path: "targetPath",
            rewrite_options: "rewriteOptions",
            example_text: "exampleText",
        }
    }
}

#[derive(Clone)]
pub struct Previewer {
    document: Document,
    ids: PreviewIds,
    config: Rc<PreviewConfig>,
}

/// A previewer with its field listeners registered.
pub struct MountedPreviewer {
    previewer: Previewer,
    _listeners: Vec<EventListener>,
}

impl MountedPreviewer {
    pub fn previewer(&self) -> &Previewer {
        &self.previewer
    }
}

impl Previewer {
    pub fn new(document: Document, ids: PreviewIds, config: PreviewConfig) -> Self {
        Self {
            document,
            ids,
            config: Rc::new(config),
        }
    }

    pub fn rewrite_mode(&self) -> RewriteMode {
        RewriteMode::from_value(&field_value(&self.document, self.ids.rewrite_type))
    }

    /// Show the rewrite options only in `rewrite` mode, then refresh the
    /// preview.
    pub fn toggle_rewrite_options(&self) {
        let mode = self.rewrite_mode();
        if let Some(options) = element_by_id::<HtmlElement>(&self.document, self.ids.rewrite_options) {
            if let Err(e) = set_display(&options, mode.shows_rewrite_options()) {
                log::warn!("Failed to toggle rewrite options: {:?}", e);
            }
        }
        self.update_preview();
    }

    /// Compute the example from the current field values.
    pub fn current_preview(&self) -> ExamplePreview {
        let incoming_path = field_value(&self.document, self.ids.incoming_path);
        let target_uri = field_value(&self.document, self.ids.target_uri);
        let target_path = field_value(&self.document, self.ids.target_path);

        self.config.render(&PreviewInput {
            incoming_path: &incoming_path,
            target_uri: &target_uri,
            mode: self.rewrite_mode(),
            target_path: &target_path,
        })
    }

    /// Rewrite the preview element. Does nothing when it is absent.
    pub fn update_preview(&self) {
        let Some(target) = self.document.get_element_by_id(self.ids.example_text) else {
            return;
        };
        let preview = self.current_preview();
        if let Err(e) = self.write_preview(&target, &preview) {
            log::warn!("Failed to write example preview: {:?}", e);
        }
    }

    fn write_preview(&self, target: &web_sys::Element, preview: &ExamplePreview) -> Result<(), JsValue> {
        target.set_text_content(None);
        target.append_child(&self.document.create_text_node(&preview.request_line()))?;
        target.append_child(&self.document.create_element("br")?.into())?;
        target.append_child(&self.document.create_text_node(&preview.forward_line()))?;
        Ok(())
    }

    /// Sync the panel and preview once, then follow field edits.
    ///
    /// Returns `None` when the rewrite-mode select is not on this page.
    pub fn mount(self) -> Option<MountedPreviewer> {
        let mode_select = self.document.get_element_by_id(self.ids.rewrite_type)?;
        self.toggle_rewrite_options();

        let mut listeners = Vec::with_capacity(4);
        for id in [self.ids.incoming_path, self.ids.target_uri, self.ids.target_path] {
            if let Some(field) = self.document.get_element_by_id(id) {
                let previewer = self.clone();
                listeners.push(EventListener::new(&field, "input", move |_| {
                    previewer.update_preview();
                }));
            }
        }

        let previewer = self.clone();
        listeners.push(EventListener::new(&mode_select, "change", move |_| {
            previewer.toggle_rewrite_options();
        }));

        log::info!("Mounted example previewer on #{}", self.ids.example_text);
        Some(MountedPreviewer {
            previewer: self,
            _listeners: listeners,
        })
    }
}
