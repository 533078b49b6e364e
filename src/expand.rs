//! Iterator for reconstructing base sequences from merged ones.

use crate::model::Model;
use crate::symbol::Symbol;

/// Iterator that replaces composite symbols by the pairs they stand for,
/// recursively, yielding only symbols that have no rule.
///
/// Uses a stack of pending symbols instead of recursion, so deeply nested
/// rules do not grow the call stack.
pub struct ExpandIter<'a, I> {
    model: &'a Model,
    input: I,
    stack: Vec<Symbol>,
}

impl<'a, I: Iterator<Item = Symbol>> ExpandIter<'a, I> {
    pub(crate) fn new(model: &'a Model, input: I) -> Self {
        Self {
            model,
            input,
            stack: Vec::new(),
        }
    }
}

impl<'a, I: Iterator<Item = Symbol>> Iterator for ExpandIter<'a, I> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let symbol = match self.stack.pop() {
                Some(symbol) => symbol,
                None => self.input.next()?,
            };

            match self.model.pair_of(symbol) {
                Some(pair) => {
                    // Second goes in first so `first` is popped next.
                    self.stack.push(pair.second);
                    self.stack.push(pair.first);
                }
                None => return Some(symbol),
            }
        }
    }
}
