//! Greedy byte pair merge training.
//!
//! Training repeatedly counts adjacent pairs, gives the most frequent one a
//! new symbol, and rewrites the sequence with it. Like RePair it is a batch
//! algorithm over the complete input, but it stops after a fixed number of
//! merges and keeps the rules so they can be replayed on new data.
//!
//! # Example
//!
//! ```
//! use bytepair_rs::{Trainer, TrainerConfig};
//!
//! let mut trainer = Trainer::new(TrainerConfig::new(2).unwrap());
//! let encoded = trainer.train(&[65, 66, 65, 66, 65, 66]).unwrap();
//! assert_eq!(encoded, vec![257, 256]);
//!
//! // Replaying the rules gives the same output.
//! let model = trainer.into_model();
//! assert_eq!(model.apply(&[65, 66, 65, 66, 65, 66]), encoded);
//! ```

use crate::config::TrainerConfig;
use crate::error::{BpeError, Result};
use crate::merge::merge_pair;
use crate::model::Model;
use crate::pair_stats::PairStats;
use crate::symbol::{Pair, Symbol, FIRST_COMPOSITE};
use log::{debug, info};

/// Reported after each merge of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent {
    /// Zero-based index of the merge within this run
    pub step: usize,
    /// Pair that was merged
    pub pair: Pair,
    /// Symbol assigned to the pair
    pub symbol: Symbol,
    /// Count of the pair before the merge (overlaps included)
    pub frequency: usize,
    /// Occurrences actually replaced
    pub replaced: usize,
    /// Sequence length after the merge
    pub length: usize,
}

/// Owns a [`Model`] and grows it from training data.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainerConfig,
    model: Model,
    stats: CompressionStats,
}

impl Trainer {
    /// Creates a trainer with an empty model.
    pub fn new(config: TrainerConfig) -> Self {
        Self::from_model(Model::new(), config)
    }

    /// Resumes training on top of an existing model.
    pub fn from_model(model: Model, config: TrainerConfig) -> Self {
        let total_rules = model.len();
        Self {
            config,
            model,
            stats: CompressionStats {
                total_rules,
                ..CompressionStats::default()
            },
        }
    }

    /// Learns up to `max_merges` rules from `sequence` and returns it encoded.
    ///
    /// Existing rules are applied first. An empty sequence is returned
    /// unchanged and learns nothing.
    pub fn train(&mut self, sequence: &[Symbol]) -> Result<Vec<Symbol>> {
        self.train_with_progress(sequence, |_| {})
    }

    /// Like [`Trainer::train`], calling `progress` after every merge.
    pub fn train_with_progress<F>(
        &mut self,
        sequence: &[Symbol],
        mut progress: F,
    ) -> Result<Vec<Symbol>>
    where
        F: FnMut(&MergeEvent),
    {
        self.check_symbols(sequence)?;

        info!(
            "training: up to {} merges over {} symbols ({} existing rules, tie-break {})",
            self.config.max_merges,
            sequence.len(),
            self.model.len(),
            self.config.tie_break
        );

        let mut working = self.model.apply(sequence);
        let mut learned = 0;

        for step in 0..self.config.max_merges {
            let stats = PairStats::from_sequence(&working);

            let Some((pair, frequency)) = stats.most_frequent(self.config.tie_break) else {
                debug!("training: no pairs left after {step} merges");
                break;
            };
            if frequency < self.config.min_frequency {
                debug!(
                    "training: best pair {pair} occurs {frequency} times, below minimum {}",
                    self.config.min_frequency
                );
                break;
            }

            let rule = self.model.push_rule(pair)?;
            let (merged, replaced) = merge_pair(&working, pair, rule.symbol);
            working = merged;
            learned += 1;

            debug!(
                "training: merge {step}: {pair} -> {} (count {frequency}, replaced {replaced}, length {})",
                rule.symbol,
                working.len()
            );

            progress(&MergeEvent {
                step,
                pair,
                symbol: rule.symbol,
                frequency,
                replaced,
                length: working.len(),
            });
        }

        self.stats = CompressionStats {
            input_length: sequence.len(),
            output_length: working.len(),
            rules_learned: learned,
            total_rules: self.model.len(),
        };

        info!(
            "training: done, {} rules learned, {} -> {} symbols ({:.2}% saved)",
            learned,
            sequence.len(),
            working.len(),
            self.stats.space_saving()
        );

        Ok(working)
    }

    /// Rejects symbols the model owns or may hand out during this run.
    ///
    /// Both the input and the pairs of existing rules are checked: a rule
    /// may hold a large base symbol that a new merge would otherwise reuse.
    fn check_symbols(&self, sequence: &[Symbol]) -> Result<()> {
        let budget = Symbol::try_from(self.config.max_merges).unwrap_or(Symbol::MAX);
        let next_symbol = self.model.next_symbol();
        let limit = next_symbol.saturating_add(budget);
        let allocated = |symbol: Symbol| (FIRST_COMPOSITE..next_symbol).contains(&symbol);
        let upcoming = |symbol: Symbol| (next_symbol..limit).contains(&symbol);

        let in_rules = self
            .model
            .rules()
            .iter()
            .flat_map(|rule| [rule.pair.first, rule.pair.second])
            .find(|&symbol| upcoming(symbol));
        let in_input = || {
            sequence
                .iter()
                .copied()
                .find(|&symbol| allocated(symbol) || upcoming(symbol))
        };

        match in_rules.or_else(in_input) {
            Some(symbol) => Err(BpeError::SymbolRangeCollision {
                symbol,
                first_composite: FIRST_COMPOSITE,
                limit,
            }),
            None => Ok(()),
        }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }

    /// Statistics of the most recent `train` call.
    pub fn stats(&self) -> CompressionStats {
        self.stats
    }
}

/// Statistics about a training run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of input symbols
    pub input_length: usize,
    /// Number of symbols after encoding
    pub output_length: usize,
    /// Rules learned by this run
    pub rules_learned: usize,
    /// Rules in the model afterwards
    pub total_rules: usize,
}

impl CompressionStats {
    /// Returns the compression ratio as a percentage.
    ///
    /// Lower is better. 100% means no compression.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_length == 0 {
            0.0
        } else {
            (self.output_length as f64 / self.input_length as f64) * 100.0
        }
    }

    /// Returns the share of symbols removed, as a percentage.
    pub fn space_saving(&self) -> f64 {
        if self.input_length == 0 {
            0.0
        } else {
            ((self.input_length - self.output_length) as f64 / self.input_length as f64) * 100.0
        }
    }
}
