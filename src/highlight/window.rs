// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet windowing: trim an engine fragment to the context around its
//! highlights.
//!
//! Engine fragments are sized in characters and happily start or end in the
//! middle of a word. The window keeps `chars_before` characters ahead of the
//! first pre-tag and `chars_after` behind the last post-tag, then widens each
//! side to the nearest whitespace so no word is cut.
//!
//! **Invariant**: the window starts at or before the first pre-tag, ends at
//! or after the last post-tag, and each edge is a string boundary or a
//! whitespace character.
//!
//! Offsets are counted in characters, not bytes; polytonic Greek is mostly
//! multi-byte.

/// Cut `fragment` down to a word-aligned window around its highlighted span.
///
/// The start edge is the last whitespace before `first_pre - chars_before`,
/// or 0 when there is none (or when the fragment has no more than
/// `chars_before` characters ahead of the tag). The end edge is the first
/// whitespace at or after `last_post + chars_after`, or the end of the
/// fragment. A fragment without tags comes back whole.
pub fn window(
    fragment: &str,
    chars_before: usize,
    chars_after: usize,
    pre_tag: &str,
    post_tag: &str,
) -> String {
    let start = fragment
        .find(pre_tag)
        .and_then(|pre| chars_back(fragment, pre, chars_before))
        .map(|limit| fragment[..limit].rfind(char::is_whitespace).unwrap_or(0))
        .unwrap_or(0);

    let end = fragment
        .rfind(post_tag)
        .and_then(|post| chars_forward(fragment, post + post_tag.len(), chars_after))
        .map(|limit| {
            fragment[limit..]
                .find(char::is_whitespace)
                .map_or(fragment.len(), |i| limit + i)
        })
        .unwrap_or(fragment.len());

    if start >= end {
        return fragment.to_string();
    }
    fragment[start..end].to_string()
}

/// Byte offset `n` characters before `pos`, if that lands strictly after the
/// start of the string.
fn chars_back(s: &str, pos: usize, n: usize) -> Option<usize> {
    let limit = if n == 0 {
        pos
    } else {
        s[..pos].char_indices().rev().nth(n - 1)?.0
    };
    (limit > 0).then_some(limit)
}

/// Byte offset `n` characters after `pos`, if that lands strictly before the
/// end of the string.
fn chars_forward(s: &str, pos: usize, n: usize) -> Option<usize> {
    s[pos..].char_indices().nth(n).map(|(i, _)| pos + i)
}
