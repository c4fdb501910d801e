//! Replacing the word under the caret with a chosen suggestion.

use std::ops::Range;

use crate::error::SuggestError;
use crate::platform::TextSurface;
use crate::types::WordMatch;

/// Replace `word` inside `node` with `replacement`.
///
/// The node's current text must still hold `word.text` at `word.range()`;
/// anything else means the surface changed since the word was captured and
/// the replacement is refused rather than applied to the wrong span.
pub fn replace_word<S: TextSurface>(
    surface: &mut S,
    node: &S::Node,
    word: &WordMatch,
    replacement: &str,
) -> Result<(), SuggestError> {
    let text = surface.node_text(node).ok_or(SuggestError::NodeGone)?;
    check_span(&text, word)?;

    tracing::debug!(
        target: "autosuggest::replace",
        word = %word.text,
        range = ?word.range(),
        replacement,
        "replacing word"
    );

    surface.select_range(node, word.range())?;
    surface.insert_text(replacement)?;
    Ok(())
}

/// Verify that `text` still contains `word` at its captured offsets.
fn check_span(text: &str, word: &WordMatch) -> Result<(), SuggestError> {
    let found: String = text.chars().skip(word.start).take(word.len()).collect();
    if found.chars().count() != word.len() || found != word.text {
        return Err(SuggestError::StaleWordMatch {
            expected: word.text.clone(),
            found,
            range: word.range(),
        });
    }
    Ok(())
}

/// Replace a char range of `text`. Out-of-range bounds are clamped.
pub fn splice_chars(text: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() + replacement.len());
    let mut inserted = false;
    for (idx, c) in text.chars().enumerate() {
        if idx == range.start {
            out.push_str(replacement);
            inserted = true;
        }
        if !range.contains(&idx) {
            out.push(c);
        }
    }
    if !inserted {
        out.push_str(replacement);
    }
    out
}
