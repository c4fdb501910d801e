//! Suggestion list state machine for one autosuggest text box.
//!
//! # Flow
//!
//! 1. `on_input` runs on every keystroke: caret → word under caret → host gate
//!    → candidates → substring filter.
//! 2. A non-empty match list (re)renders the overlay, measures it and places
//!    it around the caret. An empty one hides it.
//! 3. `select` replaces the word captured at render time with the chosen
//!    entry and hides the overlay.
//! 4. `on_blur` defers the hide so a click on an entry can land first;
//!    `on_tick` fires it once due.
//!
//! State is replaced wholesale on every keystroke; there is no diffing.

use std::fmt::Debug;

use smol_str::SmolStr;
use web_time::Instant;

use crate::caret::locate_caret;
use crate::config::SuggestConfig;
use crate::error::SuggestError;
use crate::host::SuggestHost;
use crate::matcher::match_suggestions;
use crate::platform::TextSurface;
use crate::position::{OverlayPlacement, position_overlay};
use crate::replace::replace_word;
use crate::timer::HideTimer;
use crate::types::{CaretPosition, WordMatch};
use crate::words::word_under_caret;

/// Overlay contents while suggestions are showing.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleSuggestions<N> {
    /// Matching candidates in host order
    pub matches: Vec<SmolStr>,
    /// Caret the matches were computed for
    pub anchor: CaretPosition<N>,
    /// Word that a selection will replace
    pub word: WordMatch,
    /// Where the overlay was placed
    pub placement: OverlayPlacement,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SuggestionState<N> {
    #[default]
    Hidden,
    Visible(VisibleSuggestions<N>),
}

impl<N> SuggestionState<N> {
    pub fn is_visible(&self) -> bool {
        matches!(self, SuggestionState::Visible(_))
    }
}

/// Autosuggest controller for a single text box.
pub struct AutoSuggest<N, H> {
    host: H,
    config: SuggestConfig,
    state: SuggestionState<N>,
    blur_hide: HideTimer,
}

impl<N, H> AutoSuggest<N, H>
where
    N: Clone + PartialEq + Debug,
    H: SuggestHost<N>,
{
    pub fn new(host: H, config: SuggestConfig) -> Self {
        let blur_hide = HideTimer::new(config.focus_leave_delay);
        Self {
            host,
            config,
            state: SuggestionState::Hidden,
            blur_hide,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn state(&self) -> &SuggestionState<N> {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Currently shown matches (empty while hidden).
    pub fn matches(&self) -> &[SmolStr] {
        match &self.state {
            SuggestionState::Visible(visible) => &visible.matches,
            SuggestionState::Hidden => &[],
        }
    }

    /// Whether a blur-triggered hide is still pending.
    pub fn blur_hide_pending(&self) -> bool {
        self.blur_hide.is_pending()
    }

    /// Recompute suggestions after an input or selection change.
    ///
    /// Returns whether the overlay is visible afterwards.
    pub fn on_input<S>(&mut self, surface: &mut S) -> bool
    where
        S: TextSurface<Node = N>,
    {
        let selection = surface.selection();
        let Some(caret) = locate_caret(selection.as_ref()) else {
            tracing::trace!(target: "autosuggest::controller", "no selection, suppressing");
            self.hide(surface);
            return false;
        };
        let Some(text) = surface.node_text(&caret.node) else {
            tracing::trace!(target: "autosuggest::controller", node = ?caret.node, "focus node has no text");
            self.hide(surface);
            return false;
        };

        let word = word_under_caret(&text, caret.offset);
        let host = &self.host;
        let matches = match_suggestions(
            word.as_ref(),
            |w| host.can_suggest(w, &caret.node),
            || host.get_items(&caret.node),
        );

        tracing::trace!(
            target: "autosuggest::controller",
            caret = caret.offset,
            word = ?word.as_ref().map(|w| w.text.as_str()),
            matches = matches.len(),
            "suggestion pass"
        );

        // Non-empty matches imply a word.
        let Some(word) = word.filter(|_| !matches.is_empty()) else {
            self.hide(surface);
            return false;
        };
        let Some(caret_rect) = surface.caret_rect() else {
            tracing::trace!(target: "autosuggest::controller", "caret has no bounds");
            self.hide(surface);
            return false;
        };

        surface.clear_overlay();
        surface.set_overlay_active(true);
        surface.render_overlay(&matches);

        let viewport = surface.viewport_rect();
        let mut placement = position_overlay(&caret_rect, &viewport, surface.measure_overlay(), self.config.gap);
        if self.config.clamp_to_viewport {
            placement = placement.clamp_to(&viewport);
        }
        surface.place_overlay(placement.rect);

        tracing::debug!(
            target: "autosuggest::controller",
            matches = matches.len(),
            quadrant = %placement.quadrant,
            x = placement.rect.x,
            y = placement.rect.y,
            "showing suggestions"
        );

        self.state = SuggestionState::Visible(VisibleSuggestions {
            matches,
            anchor: caret,
            word,
            placement,
        });
        true
    }

    /// Apply the suggestion `value` to the captured word and hide.
    ///
    /// A stale capture is reported as an error and leaves the text untouched.
    /// The overlay is hidden either way.
    pub fn select<S>(&mut self, surface: &mut S, value: &str) -> Result<(), SuggestError>
    where
        S: TextSurface<Node = N>,
    {
        let SuggestionState::Visible(visible) = &self.state else {
            return Err(SuggestError::NotVisible);
        };
        if !visible.matches.iter().any(|m| m == value) {
            return Err(SuggestError::UnknownSuggestion(value.into()));
        }

        let node = visible.anchor.node.clone();
        let word = visible.word.clone();
        let result = replace_word(surface, &node, &word, value);
        if let Err(err) = &result {
            tracing::warn!(target: "autosuggest::controller", error = %err, "suggestion not applied");
        }
        self.hide(surface);
        result
    }

    /// Apply the suggestion at `index` in the visible match list.
    pub fn select_index<S>(&mut self, surface: &mut S, index: usize) -> Result<(), SuggestError>
    where
        S: TextSurface<Node = N>,
    {
        let value = self
            .matches()
            .get(index)
            .cloned()
            .ok_or(SuggestError::NotVisible)?;
        self.select(surface, &value)
    }

    /// Focus left the text surface: hide after the configured delay.
    pub fn on_blur(&mut self, now: Instant) {
        tracing::trace!(target: "autosuggest::controller", "focus lost, scheduling hide");
        self.blur_hide.schedule(now);
    }

    /// Fire a pending blur hide whose deadline has passed.
    ///
    /// Returns true if the overlay was hidden by this call.
    pub fn on_tick<S>(&mut self, surface: &mut S, now: Instant) -> bool
    where
        S: TextSurface<Node = N>,
    {
        if !self.blur_hide.fire_if_due(now) {
            return false;
        }
        self.hide(surface);
        true
    }

    /// Fire a pending blur hide regardless of its deadline.
    ///
    /// For platforms whose own timer already waited the delay.
    pub fn flush_blur_hide<S>(&mut self, surface: &mut S) -> bool
    where
        S: TextSurface<Node = N>,
    {
        if !self.blur_hide.is_pending() {
            return false;
        }
        self.hide(surface);
        true
    }

    /// Hide the overlay now. Cancels any pending blur hide.
    pub fn hide<S>(&mut self, surface: &mut S)
    where
        S: TextSurface<Node = N>,
    {
        self.blur_hide.cancel();
        if self.state.is_visible() {
            tracing::debug!(target: "autosuggest::controller", "hiding suggestions");
        }
        surface.set_overlay_active(false);
        self.state = SuggestionState::Hidden;
    }
}
