//! `TextSurface` implementation over a contenteditable element.
//!
//! Uses the DOM Selection API for caret and range handling and
//! `document.execCommand("insertText")` for replacement so the browser keeps
//! its native undo stack.

use std::ops::Range;

use autosuggest_core::{
    OverlayRect, PlatformError, Rect, SelectionSnapshot, Size, SmolStr, SuggestConfig, TextSurface,
};
use wasm_bindgen::JsCast;

use crate::offsets::{char_to_utf16_offset, utf16_to_char_offset};

/// Attribute holding an overlay entry's position in the match list.
pub const ITEM_INDEX_ATTR: &str = "data-index";

/// A contenteditable editor plus its suggestion list element.
pub struct DomSurface {
    editor: web_sys::HtmlElement,
    list: web_sys::HtmlElement,
    active_class: String,
    item_class: String,
}

impl DomSurface {
    pub fn new(editor: web_sys::HtmlElement, list: web_sys::HtmlElement, config: &SuggestConfig) -> Self {
        Self {
            editor,
            list,
            active_class: config.active_class.clone(),
            item_class: config.item_class.clone(),
        }
    }

    /// Locate the editor and list inside a rendered entry node.
    pub fn from_entry(entry_node: &web_sys::Element, config: &SuggestConfig) -> Result<Self, PlatformError> {
        let editor = query_html_element(entry_node, "[contenteditable]")?;
        let list = query_html_element(entry_node, &format!(".{}", config.list_class))?;
        Ok(Self::new(editor, list, config))
    }

    pub fn editor(&self) -> &web_sys::HtmlElement {
        &self.editor
    }

    pub fn list(&self) -> &web_sys::HtmlElement {
        &self.list
    }

    pub fn item_class(&self) -> &str {
        &self.item_class
    }

    fn current_range(&self) -> Option<(web_sys::Selection, web_sys::Range)> {
        let selection = web_sys::window()?.get_selection().ok()??;
        if selection.range_count() == 0 {
            return None;
        }
        let range = selection.get_range_at(0).ok()?;
        Some((selection, range))
    }
}

fn query_html_element(root: &web_sys::Element, selector: &str) -> Result<web_sys::HtmlElement, PlatformError> {
    root.query_selector(selector)
        .map_err(|e| format!("query_selector failed: {:?}", e))?
        .ok_or_else(|| format!("element not found: {}", selector))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| format!("{} is not HtmlElement", selector).into())
}

fn to_rect(rect: &web_sys::DomRect) -> Rect {
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

impl TextSurface for DomSurface {
    type Node = web_sys::Node;

    fn selection(&self) -> Option<SelectionSnapshot<web_sys::Node>> {
        let (selection, range) = self.current_range()?;
        let focus_node = selection.focus_node()?;
        let utf16_offset = range.start_offset().ok()? as usize;
        let text = self.node_text(&focus_node)?;
        let start_offset = utf16_to_char_offset(&text, utf16_offset);
        Some(SelectionSnapshot::new(focus_node, start_offset))
    }

    fn node_text(&self, node: &web_sys::Node) -> Option<String> {
        if !self.editor.contains(Some(node)) {
            return None;
        }
        if let Some(text) = node.dyn_ref::<web_sys::Text>() {
            return text.whole_text().ok();
        }
        if let Some(element) = node.dyn_ref::<web_sys::HtmlElement>() {
            return Some(element.inner_text());
        }
        node.text_content()
    }

    fn caret_rect(&self) -> Option<Rect> {
        let (_, range) = self.current_range()?;
        Some(to_rect(&range.get_bounding_client_rect()))
    }

    fn viewport_rect(&self) -> Rect {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| to_rect(&body.get_bounding_client_rect()))
            .unwrap_or_default()
    }

    fn select_range(&mut self, node: &web_sys::Node, range: Range<usize>) -> Result<(), PlatformError> {
        let text = self
            .node_text(node)
            .ok_or("node is not part of the editor")?;
        let start = char_to_utf16_offset(&text, range.start) as u32;
        let end = char_to_utf16_offset(&text, range.end) as u32;

        // The click that led here moved focus to the list.
        self.editor
            .focus()
            .map_err(|e| format!("focus failed: {:?}", e))?;

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let dom_range = document
            .create_range()
            .map_err(|e| format!("create_range failed: {:?}", e))?;
        dom_range
            .set_start(node, start)
            .map_err(|e| format!("set_start failed: {:?}", e))?;
        dom_range
            .set_end(node, end)
            .map_err(|e| format!("set_end failed: {:?}", e))?;

        let selection = window
            .get_selection()
            .map_err(|e| format!("get_selection failed: {:?}", e))?
            .ok_or("no selection object")?;
        selection
            .remove_all_ranges()
            .map_err(|e| format!("remove_all_ranges failed: {:?}", e))?;
        selection
            .add_range(&dom_range)
            .map_err(|e| format!("add_range failed: {:?}", e))?;
        Ok(())
    }

    fn insert_text(&mut self, text: &str) -> Result<(), PlatformError> {
        let document = web_sys::window()
            .ok_or("no window")?
            .document()
            .ok_or("no document")?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| "document is not an HtmlDocument")?;
        let applied = document
            .exec_command_with_show_ui_and_value("insertText", false, text)
            .map_err(|e| format!("insertText failed: {:?}", e))?;
        if !applied {
            return Err("insertText was not applied".into());
        }
        Ok(())
    }

    fn clear_overlay(&mut self) {
        while let Some(child) = self.list.first_child() {
            if let Err(e) = self.list.remove_child(&child) {
                tracing::warn!(target: "autosuggest::dom", "remove_child failed: {:?}", e);
                break;
            }
        }
    }

    fn render_overlay(&mut self, items: &[SmolStr]) {
        let Some(document) = self.list.owner_document() else {
            return;
        };
        for (index, item) in items.iter().enumerate() {
            let Ok(node) = document.create_element("div") else {
                continue;
            };
            node.set_class_name(&self.item_class);
            if let Err(e) = node.set_attribute(ITEM_INDEX_ATTR, &index.to_string()) {
                tracing::warn!(target: "autosuggest::dom", index, "set_attribute failed: {:?}", e);
                continue;
            }
            node.set_text_content(Some(item));
            if let Err(e) = self.list.append_child(&node) {
                tracing::warn!(target: "autosuggest::dom", "append_child failed: {:?}", e);
            }
        }
    }

    fn measure_overlay(&self) -> Size {
        to_rect(&self.list.get_bounding_client_rect()).size()
    }

    fn place_overlay(&mut self, rect: OverlayRect) {
        let style = self.list.style();
        let left = style.set_property("left", &format!("{}px", rect.x));
        let top = style.set_property("top", &format!("{}px", rect.y));
        if let Err(e) = left.and(top) {
            tracing::warn!(target: "autosuggest::dom", "positioning list failed: {:?}", e);
        }
    }

    fn set_overlay_active(&mut self, active: bool) {
        let classes = self.list.class_list();
        let result = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        if let Err(e) = result {
            tracing::warn!(target: "autosuggest::dom", active, "toggling list class failed: {:?}", e);
        }
    }
}
