// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for weights-file parsing.
//!
//! Arbitrary text must either fail to parse with an error or produce a table
//! that validates. Parsing must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use weighted_levenshtein::WeightsConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = WeightsConfig::from_json(text) else {
        return;
    };
    if let Ok(weights) = config.to_table() {
        assert!(weights.validate().is_ok());
    }
});
