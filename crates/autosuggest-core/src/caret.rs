//! Caret location from the platform's selection state.

use crate::types::{CaretPosition, SelectionSnapshot};

/// Derive the caret position from the current selection.
///
/// The caret offset is the selection start minus one: it names the char just
/// typed, which sits immediately before the reported boundary. A selection at
/// offset 0 therefore yields `-1`, and no word is ever found there.
///
/// Returns `None` when there is no selection; callers treat that as "no
/// suggestion this cycle".
pub fn locate_caret<N: Clone>(selection: Option<&SelectionSnapshot<N>>) -> Option<CaretPosition<N>> {
    let selection = selection?;
    Some(CaretPosition {
        node: selection.focus_node.clone(),
        offset: selection.start_offset as isize - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_one_before_boundary() {
        for k in 1..20usize {
            let sel = SelectionSnapshot::new("node", k);
            let caret = locate_caret(Some(&sel)).unwrap();
            assert_eq!(caret.offset, k as isize - 1);
            assert_eq!(caret.node, "node");
        }
    }

    #[test]
    fn test_offset_zero_maps_to_minus_one() {
        let sel = SelectionSnapshot::new(7u32, 0);
        let caret = locate_caret(Some(&sel)).unwrap();
        assert_eq!(caret.offset, -1);
        assert!(crate::word_under_caret("Start", caret.offset).is_none());
    }

    #[test]
    fn test_no_selection() {
        assert!(locate_caret::<u32>(None).is_none());
    }
}
