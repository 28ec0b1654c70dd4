// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distances where every edit has its own price.
//!
//! Levenshtein, Optimal String Alignment and (true) Damerau-Levenshtein
//! distances, with insertion and deletion costs per symbol and substitution and
//! transposition costs per ordered symbol pair. Leave a component out and it
//! costs 1.0 everywhere, which gives back the classic unit-cost distances.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────────────┐
//! │  types.rs   │────▶│  weights.rs  │────▶│  distance/            │
//! │  (Symbol,   │     │ (WeightTable,│     │  lev · osa · dam_lev  │
//! │  Sequence)  │     │  SymbolCosts,│     │                       │
//! └─────────────┘     │  PairCosts)  │     └───────────────────────┘
//!                     └──────────────┘                 │
//!                            ▲                         ▼
//!                     ┌──────────────┐     ┌───────────────────────┐
//!                     │  config.rs   │     │  batch.rs (rayon)     │
//!                     │ (JSON files) │     │  distances · pairwise │
//!                     └──────────────┘     └───────────────────────┘
//! ```
//!
//! | Module      | Role                                                 |
//! |-------------|------------------------------------------------------|
//! | `types`     | Symbol codes, `Sequence` conversions, alphabet limits |
//! | `weights`   | Dense cost tables with 1.0 defaults                  |
//! | `distance`  | The three DP engines and `Metric` dispatch           |
//! | `batch`     | Many distances against one shared table              |
//! | `config`    | Sparse weights files (feature `serde`)               |
//! | `contracts` | Debug-mode result checks                             |
//!
//! # Usage
//!
//! ```
//! use weighted_levenshtein::{dam_lev, lev, osa, WeightTable};
//!
//! let mut weights = WeightTable::default();
//! weights.set_substitute_cost(b'a'.into(), b'z'.into(), 1.2).unwrap();
//! weights.set_substitute_cost(b'z'.into(), b'a'.into(), 0.1).unwrap();
//!
//! assert_eq!(lev("a", "z", &weights).unwrap(), 1.2);
//! assert_eq!(lev("z", "a", &weights).unwrap(), 0.1);
//! assert_eq!(osa("ab", "ba", &weights).unwrap(), 1.0);
//! assert_eq!(dam_lev("ab", "bca", &weights).unwrap(), 2.0);
//! ```
//!
//! Every call checks the table and both sequences before doing any work. A
//! symbol outside the table's alphabet is an error, never a silent default.

pub mod batch;
#[cfg(feature = "serde")]
pub mod config;
pub mod contracts;
mod distance;
mod error;
pub mod testing;
mod types;
mod weights;

pub use distance::{dam_lev, lev, lev_within, osa, Metric, UnknownMetric};
pub use error::{Component, WeightError};
pub use types::{
    Sequence, Symbol, DEFAULT_ALPHABET_SIZE, DEFAULT_COST, MAX_ALPHABET_SIZE,
};
pub use weights::{PairCosts, SymbolCosts, WeightTable};

#[cfg(feature = "serde")]
pub use config::{load_weights, ConfigError, WeightsConfig};
