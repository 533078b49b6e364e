//! Saving and loading merge models.
//!
//! Models are stored as pretty-printed JSON:
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "vocab": { "(65, 66)": 256 },
//!   "merges": [[[65, 66], 256]],
//!   "next_symbol": 257
//! }
//! ```
//!
//! Only `merges` and `next_symbol` are needed to rebuild a model. `vocab`
//! is written for readers that expect it and is checked against the rules
//! on load.

use crate::error::{BpeError, Result};
use crate::model::{MergeRule, Model};
use crate::symbol::{Pair, Symbol};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// On-disk form of a [`Model`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializedModel {
    /// Crate version that wrote the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    /// Pair key `"(a, b)"` -> symbol, sorted for stable output
    vocab: BTreeMap<String, Symbol>,
    /// Rules in training order
    merges: Vec<([Symbol; 2], Symbol)>,
    /// Id of the next rule
    next_symbol: Symbol,
}

impl From<&Model> for SerializedModel {
    fn from(model: &Model) -> Self {
        Self {
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            vocab: model
                .rules()
                .iter()
                .map(|rule| (rule.pair.to_string(), rule.symbol))
                .collect(),
            merges: model
                .rules()
                .iter()
                .map(|rule| ([rule.pair.first, rule.pair.second], rule.symbol))
                .collect(),
            next_symbol: model.next_symbol(),
        }
    }
}

impl SerializedModel {
    /// Rebuilds the model, checking `vocab` against the rules.
    fn into_model(self) -> Result<Model> {
        let rules = self
            .merges
            .into_iter()
            .map(|([first, second], symbol)| MergeRule::new((first, second), symbol))
            .collect();
        let model = Model::from_rules(rules, self.next_symbol)?;

        if self.vocab.len() != model.len() {
            return Err(BpeError::MalformedModel(format!(
                "vocab has {} entries but there are {} merges",
                self.vocab.len(),
                model.len()
            )));
        }
        for (key, symbol) in &self.vocab {
            let pair: Pair = key.parse()?;
            if model.get(pair) != Some(*symbol) {
                return Err(BpeError::MalformedModel(format!(
                    "vocab entry {key} -> {symbol} does not match the merges"
                )));
            }
        }

        Ok(model)
    }
}

impl Model {
    /// Serializes the model to a JSON string.
    pub fn save(&self) -> Result<String> {
        serde_json::to_string_pretty(&SerializedModel::from(self)).map_err(BpeError::Serialize)
    }

    /// Rebuilds a model from the output of [`Model::save`].
    ///
    /// Nothing is returned unless the whole document is valid.
    pub fn load(json: &str) -> Result<Self> {
        let serialized: SerializedModel = serde_json::from_str(json)
            .map_err(|e| BpeError::MalformedModel(e.to_string()))?;
        serialized.into_model()
    }

    /// Writes the model to `path`, replacing any existing file.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| BpeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &SerializedModel::from(self))
            .map_err(BpeError::Serialize)?;
        writer.flush().map_err(io_err)?;

        debug!("saved {} rules to {}", self.len(), path.display());
        Ok(())
    }

    /// Reads a model written by [`Model::save_to_path`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| BpeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::load(&json)?;

        debug!("loaded {} rules from {}", model.len(), path.display());
        Ok(model)
    }
}
