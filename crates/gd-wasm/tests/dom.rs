//! Browser tests for the form controllers.
//!
//! Run with `wasm-pack test --headless --firefox crates/gd-wasm`.

use gd_core::{ListSpec, PreviewConfig};
use gd_wasm::list_builder::{remove_item, ListBuilderController};
use gd_wasm::previewer::{PreviewIds, Previewer};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    gd_wasm::dom::document().expect("tests run in a browser")
}

/// Mount `html` in a fresh fixture root, replacing any previous fixture.
fn fixture(html: &str) -> Element {
    let document = document();
    if let Some(old) = document.get_element_by_id("fixture") {
        old.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id("fixture");
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn field_names(container: &Element, selector: &str) -> Vec<String> {
    let nodes = container.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|element| element.get_attribute("name"))
        .collect()
}

fn set_input(id: &str, value: &str) {
    let input: HtmlInputElement = document().get_element_by_id(id).unwrap().dyn_into().unwrap();
    input.set_value(value);
}

fn set_mode(value: &str) {
    let select: HtmlSelectElement = document().get_element_by_id("rewriteType").unwrap().dyn_into().unwrap();
    select.set_value(value);
}

fn example_text() -> String {
    let example: HtmlElement = document().get_element_by_id("exampleText").unwrap().dyn_into().unwrap();
    example.inner_text()
}

fn options_display() -> String {
    let options: HtmlElement = document().get_element_by_id("rewriteOptions").unwrap().dyn_into().unwrap();
    options.style().get_property_value("display").unwrap()
}

const SIMPLE_FORM: &str = r#"
    <input id="incomingPath" type="text">
    <input id="targetUri" type="text">
    <select id="rewriteType">
        <option value="none">Pass through</option>
        <option value="strip">Strip prefix</option>
        <option value="rewrite">Rewrite</option>
    </select>
    <div id="rewriteOptions"><input id="targetPath" type="text"></div>
    <div id="exampleText"></div>
"#;

#[wasm_bindgen_test]
fn adds_items_in_order() {
    let root = fixture(r#"<div id="predicates-container"></div>"#);
    let controller = ListBuilderController::new(document(), ListSpec::PREDICATES);

    for _ in 0..3 {
        assert!(controller.add_item().is_some());
    }

    let container = document().get_element_by_id("predicates-container").unwrap();
    assert_eq!(container.child_element_count(), 3);
    assert_eq!(
        field_names(&container, "input"),
        vec!["predicates[0].name", "predicates[1].name", "predicates[2].name"]
    );
    assert_eq!(
        field_names(&container, "textarea"),
        vec!["predicates[0].args", "predicates[1].args", "predicates[2].args"]
    );
    assert_eq!(controller.next_index(), 3);

    let label = container.query_selector(".item-number").unwrap().unwrap();
    assert_eq!(label.text_content().as_deref(), Some("Predicate 1"));
    root.remove();
}

#[wasm_bindgen_test]
fn remove_keeps_counter_and_sibling_names() {
    let root = fixture(r#"<div id="filters-container"></div>"#);
    let controller = ListBuilderController::new(document(), ListSpec::FILTERS);
    let _first = controller.add_item().unwrap();
    let second = controller.add_item().unwrap();
    let _third = controller.add_item().unwrap();

    let remove = second.query_selector("[data-action=\"remove\"]").unwrap().unwrap();
    assert!(remove_item(&remove));

    let container = document().get_element_by_id("filters-container").unwrap();
    assert_eq!(container.child_element_count(), 2);
    assert_eq!(controller.next_index(), 3);
    assert_eq!(
        field_names(&container, "input"),
        vec!["filters[0].name", "filters[2].name"]
    );

    controller.add_item().unwrap();
    assert_eq!(
        field_names(&container, "input"),
        vec!["filters[0].name", "filters[2].name", "filters[3].name"]
    );
    root.remove();
}

#[wasm_bindgen_test]
fn remove_outside_item_is_noop() {
    let root = fixture(r#"<button id="loose">Remove</button>"#);
    let loose = document().get_element_by_id("loose").unwrap();
    assert!(!remove_item(&loose));
    assert!(document().get_element_by_id("loose").is_some());
    root.remove();
}

#[wasm_bindgen_test]
fn add_without_container_does_not_advance() {
    let root = fixture("");
    let controller = ListBuilderController::new(document(), ListSpec::PREDICATES);
    assert!(controller.add_item().is_none());
    assert_eq!(controller.next_index(), 0);
    root.remove();
}

#[wasm_bindgen_test]
fn mounted_list_follows_clicks() {
    let root = fixture(
        r#"<button id="add-predicate" type="button">Add</button><div id="predicates-container"></div>"#,
    );
    let mounted = ListBuilderController::new(document(), ListSpec::PREDICATES)
        .mount()
        .expect("container is present");

    let add: HtmlElement = document().get_element_by_id("add-predicate").unwrap().dyn_into().unwrap();
    add.click();
    add.click();

    let container = document().get_element_by_id("predicates-container").unwrap();
    assert_eq!(container.child_element_count(), 2);

    let remove: HtmlElement = container
        .query_selector("[data-action=\"remove\"]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    remove.click();

    assert_eq!(container.child_element_count(), 1);
    assert_eq!(field_names(&container, "input"), vec!["predicates[1].name"]);
    assert_eq!(mounted.controller().next_index(), 2);
    drop(mounted);
    root.remove();
}

#[wasm_bindgen_test]
fn preview_uses_defaults() {
    let root = fixture(SIMPLE_FORM);
    let previewer = Previewer::new(document(), PreviewIds::default(), PreviewConfig::default());
    set_mode("none");
    previewer.update_preview();

    assert_eq!(
        example_text(),
        "Request: http://localhost:8087/ye/token\nForwards to: http://192.168.0.188:8000/ye/token"
    );
    root.remove();
}

#[wasm_bindgen_test]
fn preview_follows_mode() {
    let root = fixture(SIMPLE_FORM);
    let previewer = Previewer::new(document(), PreviewIds::default(), PreviewConfig::default());
    set_input("incomingPath", "/foo");
    set_input("targetUri", "http://svc");
    set_input("targetPath", "/api");

    set_mode("strip");
    assert_eq!(previewer.current_preview().forward_url, "http://svc/token");

    set_mode("rewrite");
    assert_eq!(previewer.current_preview().forward_url, "http://svc/api/token");

    set_mode("none");
    assert_eq!(previewer.current_preview().forward_url, "http://svc/foo/token");
    root.remove();
}

#[wasm_bindgen_test]
fn toggle_tracks_current_mode() {
    let root = fixture(SIMPLE_FORM);
    let previewer = Previewer::new(document(), PreviewIds::default(), PreviewConfig::default());

    set_mode("rewrite");
    previewer.toggle_rewrite_options();
    assert_eq!(options_display(), "block");

    set_mode("strip");
    previewer.toggle_rewrite_options();
    assert_eq!(options_display(), "none");

    set_mode("rewrite");
    previewer.toggle_rewrite_options();
    assert_eq!(options_display(), "block");
    assert!(example_text().ends_with("/api/token"));
    root.remove();
}

#[wasm_bindgen_test]
fn mounted_previewer_reacts_to_input() {
    let root = fixture(SIMPLE_FORM);
    set_mode("none");
    let mounted = Previewer::new(document(), PreviewIds::default(), PreviewConfig::default())
        .mount()
        .expect("rewriteType is present");
    assert_eq!(options_display(), "none");

    set_input("incomingPath", "/orders");
    let input = document().get_element_by_id("incomingPath").unwrap();
    input.dispatch_event(&web_sys::Event::new("input").unwrap()).unwrap();
    assert!(example_text().starts_with("Request: http://localhost:8087/orders/token"));

    drop(mounted);
    root.remove();
}

#[wasm_bindgen_test]
fn preview_without_target_is_noop() {
    let root = fixture(r#"<select id="rewriteType"><option value="strip">Strip</option></select>"#);
    let previewer = Previewer::new(document(), PreviewIds::default(), PreviewConfig::default());
    previewer.update_preview();
    previewer.toggle_rewrite_options();
    assert!(previewer.mount().is_some());
    root.remove();
}
