//! Core autosuggest types: word spans, caret and selection snapshots.
//!
//! All offsets are in Unicode scalar values (chars), not bytes or UTF-16.
//! Platform layers convert at the boundary.

use std::ops::Range;

use smol_str::SmolStr;

/// A token and its half-open char range within the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordMatch {
    /// The token text (equal to `source[start..end]` in chars)
    pub text: SmolStr,
    /// Char offset of the first char
    pub start: usize,
    /// Char offset one past the last char
    pub end: usize,
}

impl WordMatch {
    /// Create a new word match.
    pub fn new(text: impl Into<SmolStr>, start: usize, end: usize) -> Self {
        debug_assert!(start < end, "word span must not be empty");
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Words are never empty; provided for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a Range<usize>.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if a caret offset refers to a char inside this word.
    ///
    /// The caret offset names the char immediately before the selection
    /// boundary, so negative offsets never match.
    pub fn covers(&self, caret_offset: isize) -> bool {
        if caret_offset < 0 {
            return false;
        }
        let caret = caret_offset as usize;
        self.start <= caret && self.end - 1 >= caret
    }
}

/// The focused text-bearing node plus the caret offset into its content.
///
/// `offset` may be `-1` when the selection sits at the very start of the
/// node; such a caret never lies inside a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaretPosition<N> {
    pub node: N,
    pub offset: isize,
}

/// What the platform reports about the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionSnapshot<N> {
    /// Node the selection's focus lives in
    pub focus_node: N,
    /// Start offset of the first range, in chars
    pub start_offset: usize,
}

impl<N> SelectionSnapshot<N> {
    pub fn new(focus_node: N, start_offset: usize) -> Self {
        Self {
            focus_node,
            start_offset,
        }
    }
}
