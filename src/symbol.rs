use crate::error::BpeError;
use std::fmt;
use std::str::FromStr;

/// A token in a sequence.
///
/// Ids below [`FIRST_COMPOSITE`] are base symbols (raw byte codes); ids at or
/// above it are composite symbols created by merges.
pub type Symbol = u32;

/// Number of base symbols, one per byte value.
pub const BASE_SYMBOLS: u32 = 256;

/// First id handed out to a merged pair.
pub const FIRST_COMPOSITE: Symbol = BASE_SYMBOLS;

/// Returns true if the symbol lies in the byte range.
pub fn is_base(symbol: Symbol) -> bool {
    symbol < FIRST_COMPOSITE
}

/// Two adjacent symbols, order-sensitive.
///
/// Ordering is lexicographic on `(first, second)`, which is what the
/// `SmallestPair` and `LargestPair` tie-breaks compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub first: Symbol,
    pub second: Symbol,
}

impl Pair {
    pub fn new(first: Symbol, second: Symbol) -> Self {
        Self { first, second }
    }

    /// Pair starting at `index`, if there is a second element.
    pub(crate) fn at(sequence: &[Symbol], index: usize) -> Option<Self> {
        match sequence.get(index..index + 2) {
            Some(&[first, second]) => Some(Self { first, second }),
            _ => None,
        }
    }
}

impl From<(Symbol, Symbol)> for Pair {
    fn from((first, second): (Symbol, Symbol)) -> Self {
        Self { first, second }
    }
}

impl From<Pair> for (Symbol, Symbol) {
    fn from(pair: Pair) -> Self {
        (pair.first, pair.second)
    }
}

/// Renders as `(first, second)`, the key form used in persisted vocabularies.
impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

impl FromStr for Pair {
    type Err = BpeError;

    /// Parses `(a, b)`. Surrounding parentheses and whitespace are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let malformed = || BpeError::MalformedModel(format!("invalid pair key: {s:?}"));

        let mut parts = inner.split(',');
        let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let first = first.trim().parse::<Symbol>().map_err(|_| malformed())?;
        let second = second.trim().parse::<Symbol>().map_err(|_| malformed())?;
        Ok(Self { first, second })
    }
}
