//! Ordered merge rules and the operations that only read them.

use crate::error::{BpeError, Result};
use crate::expand::ExpandIter;
use crate::id_gen::IdGenerator;
use crate::merge::merge_pair;
use crate::symbol::{Pair, Symbol, FIRST_COMPOSITE};
use ahash::AHashMap as HashMap;

/// One learned substitution: `pair` becomes `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRule {
    pub pair: Pair,
    pub symbol: Symbol,
}

impl MergeRule {
    pub fn new(pair: impl Into<Pair>, symbol: Symbol) -> Self {
        Self {
            pair: pair.into(),
            symbol,
        }
    }
}

/// A trained merge model.
///
/// The rule list is the source of truth and is kept in discovery order,
/// which `apply` depends on. The vocabulary (pair to symbol) and its
/// inverse are caches rebuilt from the rules.
#[derive(Debug, Clone)]
pub struct Model {
    rules: Vec<MergeRule>,
    vocab: HashMap<Pair, Symbol>,
    expansions: HashMap<Symbol, Pair>,
    id_gen: IdGenerator,
}

impl Model {
    /// Creates a model with no rules; the first merge will get id 256.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            vocab: HashMap::default(),
            expansions: HashMap::default(),
            id_gen: IdGenerator::new(),
        }
    }

    /// Rebuilds a model from an ordered rule list and counter.
    ///
    /// Fails with [`BpeError::MalformedModel`] unless:
    /// - the counter is at least 256,
    /// - rule symbols are composite, strictly increasing and below the counter,
    /// - no pair appears twice,
    /// - no pair refers to its own symbol or a later one.
    pub fn from_rules(rules: Vec<MergeRule>, next_symbol: Symbol) -> Result<Self> {
        if next_symbol < FIRST_COMPOSITE {
            return Err(BpeError::MalformedModel(format!(
                "next_symbol {next_symbol} is inside the base range"
            )));
        }

        let mut model = Self {
            rules: Vec::with_capacity(rules.len()),
            vocab: HashMap::with_capacity(rules.len()),
            expansions: HashMap::with_capacity(rules.len()),
            id_gen: IdGenerator::starting_at(next_symbol),
        };

        let mut floor = FIRST_COMPOSITE;
        for (index, rule) in rules.into_iter().enumerate() {
            if rule.symbol < floor || rule.symbol >= next_symbol {
                return Err(BpeError::MalformedModel(format!(
                    "rule {index}: symbol {} is out of order or outside {floor}..{next_symbol}",
                    rule.symbol
                )));
            }
            let forward = |s: Symbol| s >= rule.symbol && s < next_symbol;
            if forward(rule.pair.first) || forward(rule.pair.second) {
                return Err(BpeError::MalformedModel(format!(
                    "rule {index}: pair {} refers to a symbol not yet defined",
                    rule.pair
                )));
            }
            if model.vocab.contains_key(&rule.pair) {
                return Err(BpeError::MalformedModel(format!(
                    "rule {index}: pair {} is merged twice",
                    rule.pair
                )));
            }

            model.insert(rule);
            floor = rule.symbol + 1;
        }

        Ok(model)
    }

    /// Allocates the next symbol for `pair` and records the rule.
    pub(crate) fn push_rule(&mut self, pair: Pair) -> Result<MergeRule> {
        let rule = MergeRule {
            pair,
            symbol: self.id_gen.get()?,
        };
        self.insert(rule);
        Ok(rule)
    }

    fn insert(&mut self, rule: MergeRule) {
        self.vocab.insert(rule.pair, rule.symbol);
        self.expansions.insert(rule.symbol, rule.pair);
        self.rules.push(rule);
    }

    /// Rules in the order they were learned.
    pub fn rules(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Iterates `(pair, symbol)` entries in unspecified order.
    ///
    /// Use [`Model::rules`] for training order.
    pub fn vocab(&self) -> impl Iterator<Item = (Pair, Symbol)> + '_ {
        self.vocab.iter().map(|(&pair, &symbol)| (pair, symbol))
    }

    /// Symbol that replaces `pair`, if it was merged.
    pub fn get(&self, pair: Pair) -> Option<Symbol> {
        self.vocab.get(&pair).copied()
    }

    /// Pair a composite symbol stands for.
    pub fn pair_of(&self, symbol: Symbol) -> Option<Pair> {
        self.expansions.get(&symbol).copied()
    }

    /// The id the next learned rule will receive.
    pub fn next_symbol(&self) -> Symbol {
        self.id_gen.peek()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Encodes `sequence` with the learned rules.
    ///
    /// Each rule is applied over the whole sequence, in training order,
    /// before the next one. The model is not modified.
    pub fn apply(&self, sequence: &[Symbol]) -> Vec<Symbol> {
        let mut working = sequence.to_vec();

        for rule in &self.rules {
            if working.len() < 2 {
                break;
            }
            working = merge_pair(&working, rule.pair, rule.symbol).0;
        }

        working
    }

    /// Undoes `apply`: replaces every composite symbol by the base
    /// symbols it was built from.
    pub fn expand(&self, sequence: &[Symbol]) -> Vec<Symbol> {
        self.expand_iter(sequence.iter().copied()).collect()
    }

    /// Lazy form of [`Model::expand`].
    pub fn expand_iter<I>(&self, sequence: I) -> ExpandIter<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Symbol>,
    {
        ExpandIter::new(self, sequence.into_iter())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

/// Two models are equal when they hold the same rules in the same order
/// and the same counter.
impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules && self.next_symbol() == other.next_symbol()
    }
}

impl Eq for Model {}
