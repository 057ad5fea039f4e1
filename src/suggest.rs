// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type completions.
//!
//! The partial word is searched against the autocomplete variant of the
//! requested field with wide highlight fragments. For each fragment we keep
//! what follows the first highlighted term, cut at the first whitespace past
//! a character budget, and strip punctuation.

use std::collections::BTreeSet;

use crate::engine::SearchEngine;
use crate::searcher::Searcher;
use crate::types::{Field, SearchRequest};
use crate::utils::strip_punctuation;

/// Completions for `partial_word`, sorted and deduplicated.
///
/// Search parameters other than the query and field are taken from
/// `request`. Failures of any kind yield no completions.
pub fn suggest<E: SearchEngine>(
    searcher: &Searcher<E>,
    partial_word: &str,
    request: &SearchRequest,
) -> Vec<String> {
    let config = searcher.config();
    let mut request = request.clone();
    request.query = partial_word.trim().to_string();
    request.field = autocomplete_field(request.field);
    request.fragment_size = Some(config.suggest_fragment_size);

    if request.query.is_empty() {
        return Vec::new();
    }

    let page = match searcher.advanced_search(&request) {
        Ok(page) => page,
        Err(err) => {
            tracing::debug!(error = %err, "no suggestions");
            return Vec::new();
        }
    };

    let fragments = page.hits.iter().flat_map(|hit| hit.fragments.iter());
    extract_suggestions(fragments, &config.pre_tag, &config.post_tag, config.suggest_budget)
}

fn autocomplete_field(field: Field) -> Field {
    match field {
        Field::Lemmas | Field::AutocompleteLemmas => Field::AutocompleteLemmas,
        Field::Text | Field::Autocomplete => Field::Autocomplete,
    }
}

/// Continuations after the first highlighted term of each fragment.
pub fn extract_suggestions<I, S>(fragments: I, pre_tag: &str, post_tag: &str, budget: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found = BTreeSet::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        let Some(start) = fragment.find(post_tag) else {
            continue;
        };
        let tail = fragment[start + post_tag.len()..]
            .replace(pre_tag, "")
            .replace(post_tag, "");
        let tail = tail.trim_start();
        let suggestion = strip_punctuation(cut_after(tail, budget));
        let suggestion = suggestion.trim();
        if !suggestion.is_empty() {
            found.insert(suggestion.to_string());
        }
    }
    found.into_iter().collect()
}

/// Prefix of `text` ending at the first whitespace at or after `budget` chars.
fn cut_after(text: &str, budget: usize) -> &str {
    let from = text
        .char_indices()
        .nth(budget)
        .map_or(text.len(), |(i, _)| i);
    match text[from..].find(char::is_whitespace) {
        Some(offset) => &text[..from + offset],
        None => text,
    }
}
