//! autosuggest-core: caret-relative autosuggest logic without framework dependencies.
//!
//! This crate provides:
//! - `find_words` / `word_under_caret` - whitespace/bracket tokenizer with char offsets
//! - `locate_caret` - caret offset from a selection snapshot
//! - `match_suggestions` - substring filtering of host candidates
//! - `position_overlay` - quadrant placement of the suggestion overlay
//! - `AutoSuggest` - per-text-box state machine driving a `TextSurface`
//! - `AutoSuggestEntry` - properties-panel entry descriptor and markup

pub mod caret;
pub mod config;
pub mod controller;
pub mod entry;
pub mod error;
pub mod host;
pub mod matcher;
pub mod platform;
pub mod position;
pub mod replace;
pub mod timer;
pub mod types;
pub mod words;

pub use caret::locate_caret;
pub use config::SuggestConfig;
pub use controller::{AutoSuggest, SuggestionState, VisibleSuggestions};
pub use entry::{AUTOSUGGEST_CSS_CLASS, AutoSuggestEntry};
pub use error::SuggestError;
pub use host::{SuggestHost, SuggestOptions};
pub use matcher::{filter_candidates, match_suggestions};
pub use platform::{PlatformError, TextSurface};
pub use position::{OverlayPlacement, OverlayRect, Quadrant, Rect, Size, position_overlay};
pub use replace::{replace_word, splice_chars};
pub use smol_str::SmolStr;
pub use timer::HideTimer;
pub use types::{CaretPosition, SelectionSnapshot, WordMatch};
pub use words::{WordIter, find_words, is_word_char, word_under_caret};
