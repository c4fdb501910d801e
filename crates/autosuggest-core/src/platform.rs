//! Platform abstraction for the text surface an autosuggest box lives on.
//!
//! This trait is the interface between the suggestion logic and the
//! platform-specific implementation (browser DOM, native UI, test mocks).
//! Everything the controller needs from the outside world goes through it:
//! selection queries, range selection and insertion, bounding rectangles and
//! the overlay list itself.

use std::fmt::Debug;
use std::ops::Range;

use smol_str::SmolStr;

use crate::position::{OverlayRect, Rect, Size};
use crate::types::SelectionSnapshot;

/// Error type for platform operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// An editable text surface with a suggestion overlay attached.
///
/// All offsets are char offsets into the node's text. Implementations
/// convert to whatever unit the platform uses (UTF-16 for the DOM).
pub trait TextSurface {
    /// Handle to a text-bearing node.
    type Node: Clone + PartialEq + Debug;

    /// Current selection, or `None` when nothing is selected.
    fn selection(&self) -> Option<SelectionSnapshot<Self::Node>>;

    /// Full text of a node.
    ///
    /// Returns `None` if the node is no longer part of the surface.
    fn node_text(&self, node: &Self::Node) -> Option<String>;

    /// Bounding rectangle of the current selection/caret.
    fn caret_rect(&self) -> Option<Rect>;

    /// Bounding rectangle of the visible viewport.
    fn viewport_rect(&self) -> Rect;

    /// Select a char range within `node`.
    fn select_range(&mut self, node: &Self::Node, range: Range<usize>) -> Result<(), PlatformError>;

    /// Replace the current selection with `text`.
    fn insert_text(&mut self, text: &str) -> Result<(), PlatformError>;

    /// Remove all entries from the overlay.
    fn clear_overlay(&mut self);

    /// Append one overlay entry per item, in order.
    fn render_overlay(&mut self, items: &[SmolStr]);

    /// Measure the rendered overlay.
    fn measure_overlay(&self) -> Size;

    /// Move the overlay's top-left corner.
    fn place_overlay(&mut self, rect: OverlayRect);

    /// Show or hide the overlay.
    fn set_overlay_active(&mut self, active: bool);
}
