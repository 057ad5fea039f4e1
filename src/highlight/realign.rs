// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lemma-to-surface realignment.
//!
//! A lemma search matches the lemma stream, but readers want to see the
//! inflected text. The two streams come from the same passage with different
//! tokenizers (clitics split, compounds joined), so they rarely line up
//! one-to-one. We project each matching lemma index onto the surface stream
//! by the ratio of their lengths and cut a fixed-radius window around it.
//!
//! This is an approximation. When the tokenizers disagree early in a passage
//! the projection drifts, and a window can land a few tokens off the actual
//! match. The radius is wide enough that the match is normally still inside.

use std::collections::HashSet;

/// Surface tokens kept on each side of a single-term match.
pub const SINGLE_TERM_RADIUS: usize = 10;
/// Surface tokens kept on each side of a multi-term match.
pub const MULTI_TERM_RADIUS: usize = 15;

/// Project lemma index `i` onto the surface stream.
///
/// Half-way cases round to even, so 2.5 projects to 2 and 3.5 to 4.
pub fn project_index(i: usize, ratio: f64) -> usize {
    let projected = (i as f64 * ratio).round_ties_even();
    if projected <= 0.0 {
        0
    } else {
        projected as usize
    }
}

/// Surface windows for every place the query matches the lemma stream.
///
/// A single-term query yields one ±10 window per occurrence of the term. A
/// multi-term query anchors on occurrences of the first term and accepts the
/// anchor when every query term appears among the lemmas in
/// `[i - (slop + addend), i + slop + terms)`, with `addend` 1 for unordered
/// searches and 0 for ordered ones; each accepted anchor yields a ±15 window.
///
/// No match, an empty query or an empty lemma stream give an empty list.
pub fn realign<S: AsRef<str>>(
    lemma_tokens: &[S],
    surface_tokens: &[S],
    query_terms: &[S],
    slop: usize,
    ordered: bool,
) -> Vec<String> {
    if lemma_tokens.is_empty() || query_terms.is_empty() {
        return Vec::new();
    }
    let ratio = surface_tokens.len() as f64 / lemma_tokens.len() as f64;
    let first = query_terms[0].as_ref();

    let anchors: Vec<usize> = if query_terms.len() == 1 {
        lemma_tokens
            .iter()
            .enumerate()
            .filter(|(_, lemma)| lemma.as_ref() == first)
            .map(|(i, _)| i)
            .collect()
    } else {
        let wanted: HashSet<&str> = query_terms.iter().map(AsRef::as_ref).collect();
        let addend = usize::from(!ordered);
        lemma_tokens
            .iter()
            .enumerate()
            .filter(|(_, lemma)| lemma.as_ref() == first)
            .map(|(i, _)| i)
            .filter(|&i| {
                let lo = i.saturating_sub(slop.saturating_add(addend));
                let hi = i
                    .saturating_add(slop)
                    .saturating_add(query_terms.len())
                    .min(lemma_tokens.len());
                let present: HashSet<&str> =
                    lemma_tokens[lo..hi].iter().map(AsRef::as_ref).collect();
                wanted.is_subset(&present)
            })
            .collect()
    };

    let radius = if query_terms.len() == 1 {
        SINGLE_TERM_RADIUS
    } else {
        MULTI_TERM_RADIUS
    };

    anchors
        .into_iter()
        .filter_map(|i| surface_window(surface_tokens, project_index(i, ratio), radius))
        .collect()
}

/// Whitespace-tokenizing wrapper over [`realign`] for stored field values.
pub fn realign_text(
    lemmas: &str,
    text: &str,
    query: &str,
    slop: usize,
    ordered: bool,
) -> Vec<String> {
    let lemma_tokens: Vec<&str> = lemmas.split_whitespace().collect();
    let surface_tokens: Vec<&str> = text.split_whitespace().collect();
    let query_terms: Vec<&str> = query.split_whitespace().collect();
    realign(&lemma_tokens, &surface_tokens, &query_terms, slop, ordered)
}

fn surface_window<S: AsRef<str>>(tokens: &[S], center: usize, radius: usize) -> Option<String> {
    let start = center.saturating_sub(radius).min(tokens.len());
    let end = center.saturating_add(radius).min(tokens.len());
    if start >= end {
        return None;
    }
    Some(
        tokens[start..end]
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" "),
    )
}
