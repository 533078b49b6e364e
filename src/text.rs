//! Whitespace-delimited decimal text.
//!
//! Sequences usually arrive as files of space or newline separated integers
//! and leave the same way.

use crate::error::{BpeError, Result};
use crate::symbol::Symbol;
use log::warn;

/// Parses whitespace-separated non-negative integers.
///
/// Tokens that are not valid symbols are skipped with a warning. Fails with
/// [`BpeError::EmptyInput`] if nothing could be parsed.
pub fn parse_sequence(text: &str) -> Result<Vec<Symbol>> {
    let mut sequence = Vec::new();

    for token in text.split_whitespace() {
        match token.parse::<Symbol>() {
            Ok(symbol) => sequence.push(symbol),
            Err(e) => warn!("skipping invalid value {token:?}: {e}"),
        }
    }

    if sequence.is_empty() {
        return Err(BpeError::EmptyInput);
    }
    Ok(sequence)
}

/// Renders a sequence as space-separated decimals.
pub fn format_sequence(sequence: &[Symbol]) -> String {
    let mut out = String::with_capacity(sequence.len() * 4);
    for (i, symbol) in sequence.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&symbol.to_string());
    }
    out
}
