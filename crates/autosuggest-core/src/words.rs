//! Word tokenization for suggestion lookup.
//!
//! A word is a maximal run of chars that are neither whitespace nor one of
//! the bracket chars `( ) { }`, so words inside expressions like `${foo}` or
//! `call(arg)` are found on their own.
//!
//! Whitespace is the ECMAScript `\s` set: Unicode `White_Space` plus the
//! byte order mark U+FEFF, minus NEXT LINE U+0085.

use std::iter::Enumerate;
use std::str::CharIndices;

use crate::types::WordMatch;

const BRACKETS: [char; 4] = ['(', ')', '{', '}'];

/// Check if a char can be part of a word.
pub fn is_word_char(c: char) -> bool {
    !is_space(c) && !BRACKETS.contains(&c)
}

fn is_space(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

/// Iterate over all words in `text`, left to right.
pub fn find_words(text: &str) -> WordIter<'_> {
    WordIter {
        source: text,
        chars: text.char_indices().enumerate(),
    }
}

/// Lazy iterator over the words of a string. See [`find_words`].
pub struct WordIter<'a> {
    source: &'a str,
    chars: Enumerate<CharIndices<'a>>,
}

impl Iterator for WordIter<'_> {
    type Item = WordMatch;

    fn next(&mut self) -> Option<WordMatch> {
        let (start, start_byte) = loop {
            let (idx, (byte, c)) = self.chars.next()?;
            if is_word_char(c) {
                break (idx, byte);
            }
        };

        let mut end = start + 1;
        let mut end_byte = self.source.len();
        for (idx, (byte, c)) in self.chars.by_ref() {
            if !is_word_char(c) {
                end_byte = byte;
                break;
            }
            end = idx + 1;
        }

        Some(WordMatch::new(&self.source[start_byte..end_byte], start, end))
    }
}

/// Find the word the caret refers to.
///
/// `caret_offset` is the char just before the selection boundary (see
/// [`locate_caret`](crate::locate_caret)); a word matches when
/// `start <= caret_offset <= end - 1`.
pub fn word_under_caret(text: &str, caret_offset: isize) -> Option<WordMatch> {
    if caret_offset < 0 {
        return None;
    }
    find_words(text)
        .take_while(|word| word.start as isize <= caret_offset)
        .find(|word| word.covers(caret_offset))
}
