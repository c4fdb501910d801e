use std::ops::Range;

use smol_str::SmolStr;

use crate::platform::PlatformError;

/// Errors surfaced to the host.
///
/// Missing selections, missing words and empty match lists are not errors;
/// they just keep the overlay hidden.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SuggestError {
    /// The text under a captured word changed before the replacement ran.
    #[error("stale word match at {range:?}: expected {expected:?}, found {found:?}")]
    StaleWordMatch {
        expected: SmolStr,
        found: String,
        range: Range<usize>,
    },

    /// The node the word was captured in is no longer part of the surface.
    #[error("text node of the captured word is gone")]
    NodeGone,

    /// Selection attempted while no suggestions are showing.
    #[error("no suggestions are visible")]
    NotVisible,

    /// The chosen value is not one of the visible suggestions.
    #[error("unknown suggestion: {0}")]
    UnknownSuggestion(SmolStr),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}
