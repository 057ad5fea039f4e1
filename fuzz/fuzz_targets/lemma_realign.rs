// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lemma realignment.
//!
//! The lemma and surface streams have unrelated lengths, including empty
//! ones, so the projected index can land anywhere.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lectio::highlight::{realign_text, MULTI_TERM_RADIUS};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    lemmas: &'a str,
    surface: &'a str,
    query: &'a str,
    slop: u8,
    ordered: bool,
}

fuzz_target!(|input: Input<'_>| {
    // INVARIANT 1: never panics
    let windows = realign_text(
        input.lemmas,
        input.surface,
        input.query,
        input.slop as usize,
        input.ordered,
    );

    // INVARIANT 2: windows are non-empty and bounded
    for w in &windows {
        let n = w.split_whitespace().count();
        assert!(n >= 1 && n <= 2 * MULTI_TERM_RADIUS);
    }
});
