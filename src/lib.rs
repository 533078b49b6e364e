//! # bytepair-rs - Greedy Byte Pair Encoding
//!
//! Compresses integer symbol sequences by repeatedly replacing the most
//! frequent adjacent pair with a fresh symbol.
//!
//! Training records each replacement as a rule. The ordered rule list is a
//! [`Model`] that can be saved, loaded, replayed on new data with
//! [`Model::apply`], and reversed with [`Model::expand`].
//!
//! Symbols 0-255 are base symbols; merges allocate ids from 256 upwards and
//! never reuse them.
//!
//! ## Example
//!
//! ```
//! use bytepair_rs::{Model, Trainer, TrainerConfig};
//!
//! let input: Vec<u32> = "abcabcabc".bytes().map(u32::from).collect();
//!
//! let mut trainer = Trainer::new(TrainerConfig::new(4).unwrap());
//! let encoded = trainer.train(&input).unwrap();
//! assert!(encoded.len() < input.len());
//!
//! let model = Model::load(&trainer.model().save().unwrap()).unwrap();
//! assert_eq!(model.apply(&input), encoded);
//! assert_eq!(model.expand(&encoded), input);
//! ```
//!
//! ## Determinism
//!
//! Ties between equally frequent pairs are broken by an explicit
//! [`TieBreak`] policy, so the same input and merge count always give the
//! same rules.
//!
//! ## Performance
//!
//! - Each merge is one full pass over the sequence: O(merges × n) to train
//! - Applying a model is O(rules × n)

mod config;
mod error;
mod expand;
mod format;
mod id_gen;
mod merge;
mod model;
mod pair_stats;
mod symbol;
pub mod text;
mod trainer;


pub use config::{TieBreak, TrainerConfig};
pub use error::{BpeError, Result};
pub use expand::ExpandIter;
pub use model::{MergeRule, Model};
pub use pair_stats::PairStats;
pub use symbol::{is_base, Pair, Symbol, BASE_SYMBOLS, FIRST_COMPOSITE};
pub use trainer::{CompressionStats, MergeEvent, Trainer};
