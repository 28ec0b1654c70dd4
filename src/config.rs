// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weights files: sparse, human-editable weight tables.
//!
//! A weights file lists only the costs that differ from 1.0, keyed by
//! single-character strings:
//!
//! ```json
//! {
//!   "alphabet_size": 128,
//!   "insert": { "a": 5.0 },
//!   "delete": { "z": 7.5 },
//!   "substitute": { "a": { "z": 1.2 }, "z": { "a": 0.1 } },
//!   "transpose": { "a": { "z": 1.5 } }
//! }
//! ```
//!
//! Every field is optional. A component that appears in the file is
//! materialized as a dense table (all ones, then the overrides); one that does
//! not stays unset. `BTreeMap` keeps entries in key order so the first error
//! reported for a broken file is stable.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WeightError;
use crate::types::{Symbol, DEFAULT_ALPHABET_SIZE};
use crate::weights::WeightTable;

/// Error loading or applying a weights file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The file is not valid JSON for [`WeightsConfig`].
    Parse(serde_json::Error),
    /// A key is not exactly one character.
    InvalidKey { key: String },
    /// The costs themselves were rejected by the weight table.
    Weights(WeightError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read weights file {}: {}", path.display(), source)
            }
            ConfigError::Parse(err) => write!(f, "invalid weights file: {}", err),
            ConfigError::InvalidKey { key } => {
                write!(f, "weights key {:?} must be exactly one character", key)
            }
            ConfigError::Weights(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::InvalidKey { .. } => None,
            ConfigError::Weights(err) => Some(err),
        }
    }
}

impl From<WeightError> for ConfigError {
    fn from(err: WeightError) -> Self {
        ConfigError::Weights(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

fn default_alphabet_size() -> usize {
    DEFAULT_ALPHABET_SIZE
}

/// Sparse weights as written in a weights file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsConfig {
    #[serde(default = "default_alphabet_size")]
    pub alphabet_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitute: Option<BTreeMap<String, BTreeMap<String, f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transpose: Option<BTreeMap<String, BTreeMap<String, f64>>>,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            insert: None,
            delete: None,
            substitute: None,
            transpose: None,
        }
    }
}

fn key_symbol(key: &str) -> Result<Symbol, ConfigError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Symbol::from(c)),
        _ => Err(ConfigError::InvalidKey {
            key: key.to_string(),
        }),
    }
}

impl WeightsConfig {
    /// Parse a weights file from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a weights file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        debug!(path = %path.display(), alphabet_size = config.alphabet_size, "loaded weights file");
        Ok(config)
    }

    /// Build the dense weight table these overrides describe.
    pub fn to_table(&self) -> Result<WeightTable, ConfigError> {
        let mut table = WeightTable::new(self.alphabet_size);
        table.validate()?;

        if let Some(insert) = &self.insert {
            let costs = table.insert_costs_mut();
            for (key, &cost) in insert {
                costs.set(key_symbol(key)?, cost)?;
            }
        }
        if let Some(delete) = &self.delete {
            let costs = table.delete_costs_mut();
            for (key, &cost) in delete {
                costs.set(key_symbol(key)?, cost)?;
            }
        }
        if let Some(substitute) = &self.substitute {
            let costs = table.substitute_costs_mut();
            for (from, row) in substitute {
                let from = key_symbol(from)?;
                for (to, &cost) in row {
                    costs.set(from, key_symbol(to)?, cost)?;
                }
            }
        }
        if let Some(transpose) = &self.transpose {
            let costs = table.transpose_costs_mut();
            for (first, row) in transpose {
                let first = key_symbol(first)?;
                for (second, &cost) in row {
                    costs.set(first, key_symbol(second)?, cost)?;
                }
            }
        }

        Ok(table)
    }
}

/// Load a weights file straight into a weight table.
pub fn load_weights(path: impl AsRef<Path>) -> Result<WeightTable, ConfigError> {
    WeightsConfig::load(path)?.to_table()
}
