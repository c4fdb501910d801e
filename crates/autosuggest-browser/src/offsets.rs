//! Offset conversion between the core (chars) and the DOM (UTF-16 units).

/// Convert a UTF-16 offset into `text` to a char offset.
///
/// Offsets past the end clamp to the char length; an offset inside a
/// surrogate pair rounds up to the next char.
pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (idx, c) in text.chars().enumerate() {
        if units >= utf16_offset {
            return idx;
        }
        units += c.len_utf16();
    }
    text.chars().count()
}

/// Convert a char offset into `text` to a UTF-16 offset.
pub fn char_to_utf16_offset(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).map(char::len_utf16).sum()
}
