// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weight tables: what each edit costs.
//!
//! A [`WeightTable`] bundles four optional components. Insert and delete costs
//! are keyed by one symbol ([`SymbolCosts`]), substitute and transpose costs by
//! an ordered pair ([`PairCosts`]). A component that was never configured costs
//! [`DEFAULT_COST`] everywhere, so `WeightTable::default()` gives the classic
//! unit-cost distances.
//!
//! Components are dense arrays indexed by symbol code. Lookups are a bounds
//! check away from an array read; the engines skip even that by validating their
//! sequences once up front.
//!
//! # Invariants
//!
//! - Every stored cost is finite and `≥ 0` (enforced by constructors and setters)
//! - `SymbolCosts::len() == alphabet_size` and `PairCosts` is
//!   `alphabet_size × alphabet_size` (checked by [`WeightTable::validate`] at call entry)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Component, WeightError};
use crate::types::{Symbol, DEFAULT_ALPHABET_SIZE, DEFAULT_COST, MAX_ALPHABET_SIZE};

#[inline]
fn check_cost(value: f64) -> Result<f64, WeightError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WeightError::InvalidCost { value })
    }
}

// =============================================================================
// PER-SYMBOL COSTS
// =============================================================================

/// Costs keyed by a single symbol (insertion or deletion).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct SymbolCosts {
    costs: Vec<f64>,
}

impl SymbolCosts {
    /// Every symbol in `[0, alphabet_size)` costs `cost`.
    pub fn uniform(alphabet_size: usize, cost: f64) -> Result<Self, WeightError> {
        Ok(Self {
            costs: vec![check_cost(cost)?; alphabet_size],
        })
    }

    /// Every symbol costs [`DEFAULT_COST`].
    pub fn ones(alphabet_size: usize) -> Self {
        Self {
            costs: vec![DEFAULT_COST; alphabet_size],
        }
    }

    /// Wrap a dense cost vector, one entry per symbol code.
    pub fn from_vec(costs: Vec<f64>) -> Result<Self, WeightError> {
        for &cost in &costs {
            check_cost(cost)?;
        }
        Ok(Self { costs })
    }

    /// Number of symbols covered.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Cost for `symbol`.
    pub fn get(&self, symbol: Symbol) -> Result<f64, WeightError> {
        self.costs
            .get(symbol as usize)
            .copied()
            .ok_or(WeightError::InvalidSymbol {
                symbol,
                position: None,
                alphabet_size: self.costs.len(),
            })
    }

    /// Overwrite the cost for `symbol`.
    pub fn set(&mut self, symbol: Symbol, cost: f64) -> Result<(), WeightError> {
        let cost = check_cost(cost)?;
        let alphabet_size = self.costs.len();
        let slot = self
            .costs
            .get_mut(symbol as usize)
            .ok_or(WeightError::InvalidSymbol {
                symbol,
                position: None,
                alphabet_size,
            })?;
        *slot = cost;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.costs
    }

    #[inline(always)]
    fn at(&self, symbol: Symbol) -> f64 {
        self.costs[symbol as usize]
    }
}

impl TryFrom<Vec<f64>> for SymbolCosts {
    type Error = WeightError;

    fn try_from(costs: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_vec(costs)
    }
}

impl From<SymbolCosts> for Vec<f64> {
    fn from(costs: SymbolCosts) -> Self {
        costs.costs
    }
}

// =============================================================================
// PER-PAIR COSTS
// =============================================================================

/// Costs keyed by an ordered symbol pair (substitution or transposition).
///
/// Stored row-major: `(from, to)` lives at `from * cols + to`. Nothing forces the
/// matrix to be square here; a table of the wrong shape is reported when a
/// [`WeightTable`] holding it is validated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct PairCosts {
    rows: usize,
    cols: usize,
    costs: Vec<f64>,
}

impl PairCosts {
    /// Every pair over `[0, alphabet_size)` costs `cost`.
    pub fn uniform(alphabet_size: usize, cost: f64) -> Result<Self, WeightError> {
        Ok(Self {
            rows: alphabet_size,
            cols: alphabet_size,
            costs: vec![check_cost(cost)?; alphabet_size * alphabet_size],
        })
    }

    /// Every pair costs [`DEFAULT_COST`].
    pub fn ones(alphabet_size: usize) -> Self {
        Self {
            rows: alphabet_size,
            cols: alphabet_size,
            costs: vec![DEFAULT_COST; alphabet_size * alphabet_size],
        }
    }

    /// Build from nested rows. Rows must all have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, WeightError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut costs = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(WeightError::MalformedWeightTable {
                    component: Component::Table,
                    expected: cols,
                    found: row.len(),
                });
            }
            for &cost in row {
                costs.push(check_cost(cost)?);
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            costs,
        })
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All costs, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.costs
    }

    /// Cost for the ordered pair `(from, to)`.
    pub fn get(&self, from: Symbol, to: Symbol) -> Result<f64, WeightError> {
        let (from, to) = (from as usize, to as usize);
        for (symbol, bound) in [(from, self.rows), (to, self.cols)] {
            if symbol >= bound {
                return Err(WeightError::InvalidSymbol {
                    symbol: symbol as Symbol,
                    position: None,
                    alphabet_size: bound,
                });
            }
        }
        Ok(self.costs[from * self.cols + to])
    }

    /// Overwrite the cost for `(from, to)`.
    pub fn set(&mut self, from: Symbol, to: Symbol, cost: f64) -> Result<(), WeightError> {
        let cost = check_cost(cost)?;
        self.get(from, to)?;
        self.costs[from as usize * self.cols + to as usize] = cost;
        Ok(())
    }

    #[inline(always)]
    fn at(&self, from: Symbol, to: Symbol) -> f64 {
        self.costs[from as usize * self.cols + to as usize]
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairCosts {
    type Error = WeightError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<PairCosts> for Vec<Vec<f64>> {
    fn from(costs: PairCosts) -> Self {
        if costs.cols == 0 {
            return vec![Vec::new(); costs.rows];
        }
        costs.costs.chunks(costs.cols).map(<[f64]>::to_vec).collect()
    }
}

// =============================================================================
// WEIGHT TABLE
// =============================================================================

/// The four weight components plus the alphabet they cover.
///
/// Callers own the table, tweak it before a call, and can share one table
/// across any number of calls (and threads) without copying it.
///
/// ```
/// use weighted_levenshtein::{lev, WeightTable};
///
/// let mut weights = WeightTable::default();
/// weights.set_insert_cost(b'a'.into(), 5.0).unwrap();
///
/// assert_eq!(lev("", "a", &weights).unwrap(), 5.0);
/// assert_eq!(lev("a", "", &weights).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "WeightTableRepr")
)]
pub struct WeightTable {
    alphabet_size: usize,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    insert: Option<SymbolCosts>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    delete: Option<SymbolCosts>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    substitute: Option<PairCosts>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    transpose: Option<PairCosts>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET_SIZE)
    }
}

impl WeightTable {
    /// Unit costs over `[0, alphabet_size)`. Sizes above [`MAX_ALPHABET_SIZE`]
    /// are rejected by [`WeightTable::validate`].
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            alphabet_size,
            insert: None,
            delete: None,
            substitute: None,
            transpose: None,
        }
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub fn with_insert_costs(mut self, costs: SymbolCosts) -> Self {
        self.insert = Some(costs);
        self
    }

    pub fn with_delete_costs(mut self, costs: SymbolCosts) -> Self {
        self.delete = Some(costs);
        self
    }

    pub fn with_substitute_costs(mut self, costs: PairCosts) -> Self {
        self.substitute = Some(costs);
        self
    }

    pub fn with_transpose_costs(mut self, costs: PairCosts) -> Self {
        self.transpose = Some(costs);
        self
    }

    pub fn insert_costs(&self) -> Option<&SymbolCosts> {
        self.insert.as_ref()
    }

    pub fn delete_costs(&self) -> Option<&SymbolCosts> {
        self.delete.as_ref()
    }

    pub fn substitute_costs(&self) -> Option<&PairCosts> {
        self.substitute.as_ref()
    }

    pub fn transpose_costs(&self) -> Option<&PairCosts> {
        self.transpose.as_ref()
    }

    /// Insert costs, materialized as all-ones the first time they are touched.
    pub fn insert_costs_mut(&mut self) -> &mut SymbolCosts {
        let n = self.alphabet_size;
        self.insert.get_or_insert_with(|| SymbolCosts::ones(n))
    }

    pub fn delete_costs_mut(&mut self) -> &mut SymbolCosts {
        let n = self.alphabet_size;
        self.delete.get_or_insert_with(|| SymbolCosts::ones(n))
    }

    pub fn substitute_costs_mut(&mut self) -> &mut PairCosts {
        let n = self.alphabet_size;
        self.substitute.get_or_insert_with(|| PairCosts::ones(n))
    }

    pub fn transpose_costs_mut(&mut self) -> &mut PairCosts {
        let n = self.alphabet_size;
        self.transpose.get_or_insert_with(|| PairCosts::ones(n))
    }

    pub fn set_insert_cost(&mut self, symbol: Symbol, cost: f64) -> Result<(), WeightError> {
        self.insert_costs_mut().set(symbol, cost)
    }

    pub fn set_delete_cost(&mut self, symbol: Symbol, cost: f64) -> Result<(), WeightError> {
        self.delete_costs_mut().set(symbol, cost)
    }

    pub fn set_substitute_cost(
        &mut self,
        from: Symbol,
        to: Symbol,
        cost: f64,
    ) -> Result<(), WeightError> {
        self.substitute_costs_mut().set(from, to, cost)
    }

    /// Cost of swapping the adjacent pair `first second` into `second first`.
    pub fn set_transpose_cost(
        &mut self,
        first: Symbol,
        second: Symbol,
        cost: f64,
    ) -> Result<(), WeightError> {
        self.transpose_costs_mut().set(first, second, cost)
    }

    // -------------------------------------------------------------------------
    // Checked lookups
    // -------------------------------------------------------------------------

    fn check_symbol(&self, symbol: Symbol) -> Result<(), WeightError> {
        if (symbol as usize) < self.alphabet_size {
            Ok(())
        } else {
            Err(WeightError::InvalidSymbol {
                symbol,
                position: None,
                alphabet_size: self.alphabet_size,
            })
        }
    }

    pub fn insert_cost(&self, symbol: Symbol) -> Result<f64, WeightError> {
        self.check_symbol(symbol)?;
        self.insert.as_ref().map_or(Ok(DEFAULT_COST), |c| c.get(symbol))
    }

    pub fn delete_cost(&self, symbol: Symbol) -> Result<f64, WeightError> {
        self.check_symbol(symbol)?;
        self.delete.as_ref().map_or(Ok(DEFAULT_COST), |c| c.get(symbol))
    }

    pub fn substitute_cost(&self, from: Symbol, to: Symbol) -> Result<f64, WeightError> {
        self.check_symbol(from)?;
        self.check_symbol(to)?;
        self.substitute
            .as_ref()
            .map_or(Ok(DEFAULT_COST), |c| c.get(from, to))
    }

    pub fn transpose_cost(&self, first: Symbol, second: Symbol) -> Result<f64, WeightError> {
        self.check_symbol(first)?;
        self.check_symbol(second)?;
        self.transpose
            .as_ref()
            .map_or(Ok(DEFAULT_COST), |c| c.get(first, second))
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Check that the alphabet size is supported and every configured
    /// component matches it.
    pub fn validate(&self) -> Result<(), WeightError> {
        let n = self.alphabet_size;
        if n == 0 || n > MAX_ALPHABET_SIZE {
            return Err(WeightError::MalformedWeightTable {
                component: Component::Table,
                expected: MAX_ALPHABET_SIZE,
                found: n,
            });
        }

        for (component, costs) in [
            (Component::Insert, &self.insert),
            (Component::Delete, &self.delete),
        ] {
            if let Some(costs) = costs {
                if costs.len() != n {
                    return Err(WeightError::MalformedWeightTable {
                        component,
                        expected: n,
                        found: costs.len(),
                    });
                }
            }
        }

        for (component, costs) in [
            (Component::Substitute, &self.substitute),
            (Component::Transpose, &self.transpose),
        ] {
            if let Some(costs) = costs {
                let (rows, cols) = costs.shape();
                let found = if rows != n { rows } else { cols };
                if found != n {
                    return Err(WeightError::MalformedWeightTable {
                        component,
                        expected: n,
                        found,
                    });
                }
            }
        }

        Ok(())
    }

    /// Check every symbol of a sequence against the alphabet.
    pub fn check_sequence(&self, sequence: &[Symbol]) -> Result<(), WeightError> {
        match sequence
            .iter()
            .position(|&s| s as usize >= self.alphabet_size)
        {
            None => Ok(()),
            Some(position) => Err(WeightError::InvalidSymbol {
                symbol: sequence[position],
                position: Some(position),
                alphabet_size: self.alphabet_size,
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Unchecked lookups for the engines (symbols validated up front)
    // -------------------------------------------------------------------------

    #[inline(always)]
    pub(crate) fn ins(&self, symbol: Symbol) -> f64 {
        self.insert.as_ref().map_or(DEFAULT_COST, |c| c.at(symbol))
    }

    #[inline(always)]
    pub(crate) fn del(&self, symbol: Symbol) -> f64 {
        self.delete.as_ref().map_or(DEFAULT_COST, |c| c.at(symbol))
    }

    #[inline(always)]
    pub(crate) fn sub(&self, from: Symbol, to: Symbol) -> f64 {
        self.substitute
            .as_ref()
            .map_or(DEFAULT_COST, |c| c.at(from, to))
    }

    #[inline(always)]
    pub(crate) fn tra(&self, first: Symbol, second: Symbol) -> f64 {
        self.transpose
            .as_ref()
            .map_or(DEFAULT_COST, |c| c.at(first, second))
    }
}

/// Deserialization mirror of [`WeightTable`]; validated on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct WeightTableRepr {
    alphabet_size: usize,
    #[serde(default)]
    insert: Option<SymbolCosts>,
    #[serde(default)]
    delete: Option<SymbolCosts>,
    #[serde(default)]
    substitute: Option<PairCosts>,
    #[serde(default)]
    transpose: Option<PairCosts>,
}

#[cfg(feature = "serde")]
impl TryFrom<WeightTableRepr> for WeightTable {
    type Error = WeightError;

    fn try_from(repr: WeightTableRepr) -> Result<Self, Self::Error> {
        let table = WeightTable {
            alphabet_size: repr.alphabet_size,
            insert: repr.insert,
            delete: repr.delete,
            substitute: repr.substitute,
            transpose: repr.transpose,
        };
        table.validate()?;
        Ok(table)
    }
}
