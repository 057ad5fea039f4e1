// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for passage highlighting.
//!
//! Rendered passages come from an upstream renderer we don't control. Broken
//! markup must come back unchanged and well-formed markup must highlight the
//! same way twice.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lectio::{highlight_passage, Passage};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    markup: &'a str,
    sentences: Vec<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let sentences: Vec<&str> = input.sentences.into_iter().take(4).collect();

    // INVARIANT 1: never panics
    let once = highlight_passage(input.markup, &sentences);

    match Passage::parse(input.markup) {
        // INVARIANT 2: unparsable markup is returned unchanged
        Err(_) => assert_eq!(once, input.markup),
        // INVARIANT 3: a second pass is a no-op
        Ok(_) => assert_eq!(highlight_passage(&once, &sentences), once),
    }
});
