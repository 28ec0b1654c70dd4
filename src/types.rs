// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Symbols and the sequences built from them.
//!
//! Every engine works on plain symbol codes. A `&str` becomes its Unicode scalar
//! values, a `&[u8]` its bytes, so `"a"` and `b"a"` are the same sequence. Codes
//! are not range-checked here; the weight table owns the alphabet and the engines
//! check every sequence against it before touching a cost matrix.
//!
//! # Invariants
//!
//! - **Alphabet**: `0 < alphabet_size ≤ MAX_ALPHABET_SIZE`
//! - **Symbol**: valid only when `symbol < alphabet_size` of the table in use

/// A single symbol code.
pub type Symbol = u32;

/// Alphabet size used when no weight component says otherwise (ASCII).
pub const DEFAULT_ALPHABET_SIZE: usize = 128;

/// Largest alphabet a dense weight table may cover (single-byte codes).
pub const MAX_ALPHABET_SIZE: usize = 256;

/// Cost of any edit whose weight component was never configured.
pub const DEFAULT_COST: f64 = 1.0;

/// Anything that can be read as a sequence of symbols.
///
/// Implemented for the common text and byte containers. Engines call
/// [`Sequence::symbols`] once per input and work on the resulting buffer.
pub trait Sequence {
    /// Collect the symbol codes of this sequence in order.
    fn symbols(&self) -> Vec<Symbol>;
}

impl Sequence for str {
    fn symbols(&self) -> Vec<Symbol> {
        self.chars().map(Symbol::from).collect()
    }
}

impl Sequence for String {
    fn symbols(&self) -> Vec<Symbol> {
        self.as_str().symbols()
    }
}

impl Sequence for [u8] {
    fn symbols(&self) -> Vec<Symbol> {
        self.iter().map(|&b| Symbol::from(b)).collect()
    }
}

impl<const N: usize> Sequence for [u8; N] {
    fn symbols(&self) -> Vec<Symbol> {
        self.as_slice().symbols()
    }
}

impl Sequence for [char] {
    fn symbols(&self) -> Vec<Symbol> {
        self.iter().map(|&c| Symbol::from(c)).collect()
    }
}

impl Sequence for [Symbol] {
    fn symbols(&self) -> Vec<Symbol> {
        self.to_vec()
    }
}

impl<T: Sequence + ?Sized> Sequence for &T {
    fn symbols(&self) -> Vec<Symbol> {
        (**self).symbols()
    }
}
