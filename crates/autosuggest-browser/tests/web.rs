//! WASM browser tests for autosuggest-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

#![cfg(all(target_family = "wasm", target_os = "unknown"))]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use autosuggest_browser::{
    AutoSuggestEntry, DomSurface, SmolStr, SuggestConfig, SuggestOptions, TextSurface, mount,
};

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn container() -> web_sys::Element {
    let doc = document();
    let div = doc.create_element("div").unwrap();
    doc.body().unwrap().append_child(&div).unwrap();
    div
}

fn host() -> SuggestOptions<web_sys::Node> {
    SuggestOptions::new(|_: &web_sys::Node| {
        vec![SmolStr::new("Start"), SmolStr::new("Stage"), SmolStr::new("End")]
    })
    .with_can_suggest(|_, _| true)
}

/// Put `text` into the editor and a collapsed caret at `offset`.
fn type_into(editor: &web_sys::HtmlElement, text: &str, offset: u32) -> web_sys::Node {
    editor.focus().unwrap();
    editor.set_text_content(Some(text));
    let node = editor.first_child().unwrap();
    let range = document().create_range().unwrap();
    range.set_start(&node, offset).unwrap();
    range.collapse_with_to_start(true);
    let selection = web_sys::window().unwrap().get_selection().unwrap().unwrap();
    selection.remove_all_ranges().unwrap();
    selection.add_range(&range).unwrap();
    node
}

fn editor_of(root: &web_sys::Element) -> web_sys::HtmlElement {
    root.query_selector("[contenteditable]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn list_of(root: &web_sys::Element) -> web_sys::HtmlElement {
    root.query_selector(".bpp-autosuggest-list")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_mount_renders_entry() {
    let root = container();
    let entry: AutoSuggestEntry = AutoSuggestEntry::new("expr", "expression");
    let _binding = mount(&root, &entry, host(), SuggestConfig::default()).unwrap();

    let editor = editor_of(&root);
    assert_eq!(editor.id(), "camunda-expr");
    assert!(list_of(&root).first_child().is_none());
}

#[wasm_bindgen_test]
fn test_surface_reads_selection() {
    let root = container();
    let entry: AutoSuggestEntry = AutoSuggestEntry::new("sel", "sel");
    root.set_inner_html(&entry.markup());
    let surface = DomSurface::from_entry(&root, &SuggestConfig::default()).unwrap();

    let node = type_into(surface.editor(), "Hello wrld", 10);
    let snapshot = surface.selection().unwrap();
    assert_eq!(snapshot.focus_node, node);
    assert_eq!(snapshot.start_offset, 10);
    assert_eq!(surface.node_text(&node).unwrap(), "Hello wrld");
}

#[wasm_bindgen_test]
fn test_detached_node_has_no_text() {
    let root = container();
    let entry: AutoSuggestEntry = AutoSuggestEntry::new("gone", "gone");
    root.set_inner_html(&entry.markup());
    let surface = DomSurface::from_entry(&root, &SuggestConfig::default()).unwrap();

    let stray: web_sys::Node = document().create_text_node("Sta").into();
    assert!(surface.node_text(&stray).is_none());
}

#[wasm_bindgen_test]
fn test_suggest_and_click() {
    let root = container();
    let entry: AutoSuggestEntry = AutoSuggestEntry::new("flow", "flow");
    let binding = mount(&root, &entry, host(), SuggestConfig::default()).unwrap();
    let editor = editor_of(&root);
    let list = list_of(&root);

    type_into(&editor, "Sta", 3);
    assert!(binding.suggest());
    assert_eq!(binding.matches(), vec![SmolStr::new("Start"), SmolStr::new("Stage")]);
    assert_eq!(list.child_element_count(), 2);
    assert!(list.class_list().contains("active"));

    let second: web_sys::HtmlElement = list
        .last_element_child()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(second.inner_text(), "Stage");
    second.click();

    assert!(!binding.is_visible());
    assert!(!list.class_list().contains("active"));
    assert_eq!(editor.text_content().unwrap(), "Stage");
}

#[wasm_bindgen_test]
fn test_no_match_keeps_list_hidden() {
    let root = container();
    let entry: AutoSuggestEntry = AutoSuggestEntry::new("none", "none");
    let binding = mount(&root, &entry, host(), SuggestConfig::default()).unwrap();
    let editor = editor_of(&root);

    type_into(&editor, "xyz", 3);
    assert!(!binding.suggest());
    assert!(!list_of(&root).class_list().contains("active"));
}

#[wasm_bindgen_test]
fn test_click_applies_candidate_with_inner_whitespace() {
    let root = container();
    let entry: AutoSuggestEntry = AutoSuggestEntry::new("spaced", "spaced");
    let host = SuggestOptions::new(|_: &web_sys::Node| {
        vec![SmolStr::new("a  b"), SmolStr::new("x\ny")]
    })
    .with_can_suggest(|_, _| true);
    let binding = mount(&root, &entry, host, SuggestConfig::default()).unwrap();
    let editor = editor_of(&root);
    let list = list_of(&root);

    type_into(&editor, "a", 1);
    assert!(binding.suggest());
    assert_eq!(binding.matches(), vec![SmolStr::new("a  b")]);

    let item: web_sys::HtmlElement = list
        .first_element_child()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(item.get_attribute("data-index").as_deref(), Some("0"));
    assert_eq!(item.text_content().unwrap(), "a  b");
    item.click();

    assert!(!binding.is_visible());
    // contenteditable may store the second space as U+00A0.
    let text = editor.text_content().unwrap().replace('\u{a0}', " ");
    assert_eq!(text, "a  b");
}
