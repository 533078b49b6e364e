use crate::symbol::{Pair, Symbol};

/// Replaces every occurrence of `pair` with `symbol`.
///
/// Scans left to right; a match consumes both positions, so in a run like
/// `[a, a, a]` only the first `(a, a)` is replaced. Returns the rewritten
/// sequence and the number of replacements.
pub(crate) fn merge_pair(sequence: &[Symbol], pair: Pair, symbol: Symbol) -> (Vec<Symbol>, usize) {
    let mut merged = Vec::with_capacity(sequence.len());
    let mut replaced = 0;
    let mut i = 0;

    while i < sequence.len() {
        if Pair::at(sequence, i) == Some(pair) {
            merged.push(symbol);
            replaced += 1;
            i += 2;
        } else {
            merged.push(sequence[i]);
            i += 1;
        }
    }

    (merged, replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_all() {
        let (merged, replaced) = merge_pair(&[65, 66, 65, 66, 65, 66], Pair::new(65, 66), 256);
        assert_eq!(merged, vec![256, 256, 256]);
        assert_eq!(replaced, 3);
    }

    #[test]
    fn test_non_overlapping() {
        let (merged, replaced) = merge_pair(&[256, 256, 256], Pair::new(256, 256), 257);
        assert_eq!(merged, vec![257, 256]);
        assert_eq!(replaced, 1);

        let (merged, replaced) = merge_pair(&[1, 1, 1, 1], Pair::new(1, 1), 300);
        assert_eq!(merged, vec![300, 300]);
        assert_eq!(replaced, 2);
    }

    #[test]
    fn test_order_matters() {
        let (merged, replaced) = merge_pair(&[2, 1, 2], Pair::new(1, 2), 256);
        assert_eq!(merged, vec![2, 256]);
        assert_eq!(replaced, 1);
    }

    #[test]
    fn test_no_match() {
        let (merged, replaced) = merge_pair(&[1, 2, 3], Pair::new(3, 1), 256);
        assert_eq!(merged, vec![1, 2, 3]);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn test_empty() {
        let (merged, replaced) = merge_pair(&[], Pair::new(1, 2), 256);
        assert!(merged.is_empty());
        assert_eq!(replaced, 0);
    }
}
