//! Browser DOM layer for autosuggest text boxes.
//!
//! This crate implements `TextSurface` on top of a `contenteditable` element
//! and wires browser events to the core `AutoSuggest` controller. It assumes
//! a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: Selection/Range access, bounding rects, overlay list DOM
//! - `binding`: input/blur/click listeners and the blur-hide timeout
//! - `offsets`: char ↔ UTF-16 offset conversion
//!
//! # Re-exports
//!
//! This crate re-exports `autosuggest-core` for convenience, so consumers
//! only need to depend on `autosuggest-browser`.

// Re-export core crate
pub use autosuggest_core;
pub use autosuggest_core::*;

pub mod binding;
pub mod offsets;
pub mod surface;

pub use binding::{AutoSuggestBinding, mount};
pub use surface::DomSurface;
