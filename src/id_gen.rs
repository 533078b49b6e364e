use crate::error::{BpeError, Result};
use crate::symbol::{Symbol, FIRST_COMPOSITE};

/// Hands out composite symbol ids.
///
/// Ids increase monotonically and are never reused, so a symbol recorded in
/// a rule always means the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IdGenerator {
    next: Symbol,
}

impl IdGenerator {
    /// Creates a generator whose first id is [`FIRST_COMPOSITE`].
    pub(crate) fn new() -> Self {
        Self {
            next: FIRST_COMPOSITE,
        }
    }

    /// Resumes from a persisted counter.
    pub(crate) fn starting_at(next: Symbol) -> Self {
        debug_assert!(next >= FIRST_COMPOSITE);
        Self { next }
    }

    /// The id the next call to `get` will return.
    pub(crate) fn peek(&self) -> Symbol {
        self.next
    }

    /// Allocates a new id.
    pub(crate) fn get(&mut self) -> Result<Symbol> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(BpeError::SymbolSpaceExhausted)?;
        Ok(id)
    }
}
