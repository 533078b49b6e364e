//! Adjacent pair frequencies over a symbol sequence.

use crate::config::TieBreak;
use crate::symbol::{Pair, Symbol};
use ahash::AHashMap as HashMap;
use std::cmp::Ordering;

/// Count and leftmost position of one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PairRecord {
    count: usize,
    first_index: usize,
}

/// Frequencies of every distinct adjacent pair in a sequence.
///
/// Built in a single O(n) pass. Overlapping occurrences are all counted,
/// so `[a, a, a]` yields `(a, a): 2`.
#[derive(Debug, Clone, Default)]
pub struct PairStats {
    records: HashMap<Pair, PairRecord>,
}

impl PairStats {
    /// Counts all adjacent pairs in `sequence`.
    ///
    /// Empty and single-element sequences give empty statistics.
    pub fn from_sequence(sequence: &[Symbol]) -> Self {
        let mut records: HashMap<Pair, PairRecord> = HashMap::default();

        for (index, window) in sequence.windows(2).enumerate() {
            let pair = Pair::new(window[0], window[1]);
            records
                .entry(pair)
                .and_modify(|record| record.count += 1)
                .or_insert(PairRecord {
                    count: 1,
                    first_index: index,
                });
        }

        Self { records }
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Occurrences of `pair`, or 0 if it never appears.
    pub fn count(&self, pair: Pair) -> usize {
        self.records.get(&pair).map_or(0, |record| record.count)
    }

    /// Iterates `(pair, count)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, usize)> + '_ {
        self.records
            .iter()
            .map(|(&pair, record)| (pair, record.count))
    }

    /// Returns the most frequent pair and its count.
    ///
    /// Ties are resolved by `tie_break`; the result is the same for any
    /// iteration order of the underlying map.
    pub fn most_frequent(&self, tie_break: TieBreak) -> Option<(Pair, usize)> {
        self.records
            .iter()
            .max_by(|&(pair_a, a), &(pair_b, b)| {
                a.count
                    .cmp(&b.count)
                    .then_with(|| prefer(tie_break, (pair_a, a), (pair_b, b)))
            })
            .map(|(&pair, record)| (pair, record.count))
    }
}

/// `Greater` when `a` should win over `b` at equal counts.
fn prefer(tie_break: TieBreak, a: (&Pair, &PairRecord), b: (&Pair, &PairRecord)) -> Ordering {
    match tie_break {
        TieBreak::SmallestPair => b.0.cmp(a.0),
        TieBreak::LargestPair => a.0.cmp(b.0),
        TieBreak::FirstOccurrence => b.1.first_index.cmp(&a.1.first_index),
    }
}
