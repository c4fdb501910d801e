//! Host collaborators: where candidates come from and when to suggest.

use smol_str::SmolStr;

use crate::types::WordMatch;

/// Supplies candidates and gates suggestion for one text box.
///
/// The host owns whatever business-object context it needs (the selected
/// diagram element, the form field being edited) and answers per keystroke.
/// Candidates are fetched fresh on every call and never cached.
pub trait SuggestHost<N> {
    /// Full candidate set for the current keystroke.
    fn get_items(&self, focus_node: &N) -> Vec<SmolStr>;

    /// Whether suggestion may run for `word`. Defaults to never.
    fn can_suggest(&self, word: &WordMatch, focus_node: &N) -> bool {
        let _ = (word, focus_node);
        false
    }
}

type ItemsFn<N> = Box<dyn Fn(&N) -> Vec<SmolStr>>;
type GateFn<N> = Box<dyn Fn(&WordMatch, &N) -> bool>;

/// Closure-backed [`SuggestHost`].
///
/// ```
/// use autosuggest_core::{SmolStr, SuggestHost, SuggestOptions, WordMatch};
///
/// let host = SuggestOptions::new(|_: &u32| vec![SmolStr::new("Start")])
///     .with_can_suggest(|word, _| word.text.starts_with('S'));
/// assert!(host.can_suggest(&WordMatch::new("St", 0, 2), &0));
/// ```
pub struct SuggestOptions<N> {
    get_items: ItemsFn<N>,
    can_suggest: Option<GateFn<N>>,
}

impl<N> SuggestOptions<N> {
    pub fn new(get_items: impl Fn(&N) -> Vec<SmolStr> + 'static) -> Self {
        Self {
            get_items: Box::new(get_items),
            can_suggest: None,
        }
    }

    pub fn with_can_suggest(mut self, can_suggest: impl Fn(&WordMatch, &N) -> bool + 'static) -> Self {
        self.can_suggest = Some(Box::new(can_suggest));
        self
    }
}

impl<N> SuggestHost<N> for SuggestOptions<N> {
    fn get_items(&self, focus_node: &N) -> Vec<SmolStr> {
        (self.get_items)(focus_node)
    }

    fn can_suggest(&self, word: &WordMatch, focus_node: &N) -> bool {
        match &self.can_suggest {
            Some(gate) => gate(word, focus_node),
            None => false,
        }
    }
}
