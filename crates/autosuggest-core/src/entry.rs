//! Properties-panel entry descriptor for an autosuggest text box.
//!
//! The entry renders a label, a `contenteditable` text surface and an empty
//! suggestion list container. The data attributes name the handlers the panel
//! binds: `suggestItems` on input and `handleFocusLeave` on blur.

use std::fmt;

use pulldown_cmark_escape::{FmtWriter, StrWrite, escape_html, escape_html_body_text};
use smol_str::SmolStr;

/// CSS class carried by every autosuggest entry.
pub const AUTOSUGGEST_CSS_CLASS: &str = "bpp-autosuggest-textbox";

/// Prefix of the text surface's element id.
const ID_PREFIX: &str = "camunda-";

type ShowFn<C> = Box<dyn Fn(&C) -> bool>;

/// Declarative description of an autosuggest entry.
///
/// `C` is whatever context the host evaluates visibility against (usually
/// the selected diagram element).
pub struct AutoSuggestEntry<C = ()> {
    id: SmolStr,
    label: Option<String>,
    model_property: SmolStr,
    description: Option<String>,
    show: Option<ShowFn<C>>,
}

impl<C> AutoSuggestEntry<C> {
    pub fn new(id: impl Into<SmolStr>, model_property: impl Into<SmolStr>) -> Self {
        Self {
            id: id.into(),
            label: None,
            model_property: model_property.into(),
            description: None,
            show: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_show(mut self, show: impl Fn(&C) -> bool + 'static) -> Self {
        self.show = Some(Box::new(show));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Label text, falling back to the id.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    pub fn model_property(&self) -> &str {
        &self.model_property
    }

    /// Element id of the text surface.
    pub fn editor_id(&self) -> String {
        format!("{ID_PREFIX}{}", self.id)
    }

    pub fn css_classes(&self) -> &'static [&'static str] {
        &[AUTOSUGGEST_CSS_CLASS]
    }

    /// Evaluate the show predicate. Entries without one are always shown.
    pub fn is_shown(&self, ctx: &C) -> bool {
        self.show.as_ref().is_none_or(|show| show(ctx))
    }

    /// Render the entry's HTML.
    pub fn markup(&self) -> String {
        let mut html = String::new();
        // `fmt::Write` for `String` never fails.
        let _ = self.write_markup(&mut html);
        html
    }

    /// Write the entry's HTML into a Unicode-accepting buffer.
    ///
    /// Attribute values go through `escape_html`, text content through
    /// `escape_html_body_text`.
    pub fn write_markup<W: fmt::Write>(&self, writer: W) -> fmt::Result {
        let mut w = FmtWriter(writer);
        let show = if self.show.is_some() {
            r#" data-show="isShown""#
        } else {
            ""
        };
        let editor_id = self.editor_id();

        w.write_str(r#"<label for=""#)?;
        escape_html(&mut w, &editor_id)?;
        write!(w, "\"{show}>")?;
        escape_html_body_text(&mut w, self.label())?;
        w.write_str("</label>")?;

        write!(w, r#"<div class="bpp-field-wrapper"{show}>"#)?;
        w.write_str(r#"<div contenteditable="true" id=""#)?;
        escape_html(&mut w, &editor_id)?;
        w.write_str(r#"" name=""#)?;
        escape_html(&mut w, &self.model_property)?;
        w.write_str(concat!(
            r#"" data-auto-suggest="suggestItems" data-blur="handleFocusLeave"></div>"#,
            r#"<div class="bpp-autosuggest-list"></div>"#,
            "</div>",
        ))?;

        if let Some(description) = &self.description {
            w.write_str(r#"<div class="bpp-field-description">"#)?;
            escape_html_body_text(&mut w, description)?;
            w.write_str("</div>")?;
        }
        Ok(())
    }
}
