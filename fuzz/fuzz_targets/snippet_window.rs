// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet windowing.
//!
//! Engine fragments are arbitrary user text with tags spliced in. Offsets are
//! counted in characters but sliced in bytes, so a miscounted boundary panics
//! on the first multi-byte character it lands inside.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lectio::{window, POST_TAG, PRE_TAG};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    before: &'a str,
    hit: &'a str,
    after: &'a str,
    chars_before: u8,
    chars_after: u8,
    tagged: bool,
}

fuzz_target!(|input: Input<'_>| {
    let fragment = if input.tagged {
        format!("{}{}{}{}{}", input.before, PRE_TAG, input.hit, POST_TAG, input.after)
    } else {
        format!("{}{}{}", input.before, input.hit, input.after)
    };

    // INVARIANT 1: never panics
    let out = window(
        &fragment,
        input.chars_before as usize,
        input.chars_after as usize,
        PRE_TAG,
        POST_TAG,
    );

    // INVARIANT 2: the window is a slice of the fragment
    assert!(fragment.contains(&out), "window {:?} not in {:?}", out, fragment);

    // INVARIANT 3: the first highlight survives
    if let Some(pre) = fragment.find(PRE_TAG) {
        if fragment[pre..].contains(POST_TAG) {
            assert!(out.contains(PRE_TAG));
        }
    }
});
