// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised before any distance is computed.
//!
//! Every failure here is fatal to the call and happens up front: a bad symbol or a
//! table of the wrong shape is reported before the cost matrix exists, so there is
//! never a partial result to discard.

use std::fmt;

use crate::types::Symbol;

/// One of the four weight components of a [`crate::WeightTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Insert,
    Delete,
    Substitute,
    Transpose,
    /// A table not attached to any component, or the table's alphabet size.
    Table,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Insert => "insert",
            Component::Delete => "delete",
            Component::Substitute => "substitute",
            Component::Transpose => "transpose",
            Component::Table => "weight table",
        };
        f.write_str(name)
    }
}

/// Error type for weight lookups and distance calls.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightError {
    /// A symbol code lies outside the alphabet of the weight table.
    ///
    /// `position` is the index within the offending sequence, or `None` for a
    /// direct table lookup.
    InvalidSymbol {
        symbol: Symbol,
        position: Option<usize>,
        alphabet_size: usize,
    },
    /// A component's dimensions disagree with the table's alphabet size.
    MalformedWeightTable {
        component: Component,
        expected: usize,
        found: usize,
    },
    /// A cost that is negative, NaN or infinite.
    InvalidCost { value: f64 },
}

impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightError::InvalidSymbol {
                symbol,
                position: Some(position),
                alphabet_size,
            } => {
                write!(
                    f,
                    "symbol {} at position {} is outside the alphabet [0, {})",
                    symbol, position, alphabet_size
                )
            }
            WeightError::InvalidSymbol {
                symbol,
                position: None,
                alphabet_size,
            } => {
                write!(
                    f,
                    "symbol {} is outside the alphabet [0, {})",
                    symbol, alphabet_size
                )
            }
            WeightError::MalformedWeightTable {
                component,
                expected,
                found,
            } => {
                write!(
                    f,
                    "malformed {} costs: expected dimension {}, found {}",
                    component, expected, found
                )
            }
            WeightError::InvalidCost { value } => {
                write!(f, "invalid cost {}: costs must be finite and non-negative", value)
            }
        }
    }
}

impl std::error::Error for WeightError {}
