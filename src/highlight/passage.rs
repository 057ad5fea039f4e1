// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Passage highlighting: flag previously matched sentences in rendered text.
//!
//! After a reader clicks through from a search hit, the passage is rendered
//! in full and the matched sentences come along separately. We find each
//! sentence as a run of consecutive word tokens and mark it:
//!
//! 1. the first token of the run gets the start class, the last the end class;
//! 2. a token that opens or closes its sentence container inside the run also
//!    gets start/end, so a match spanning two lines is framed on both;
//! 3. every start..end pair within a container is wrapped in one matched
//!    element so styling can treat the phrase as a unit.
//!
//! Only the first run per sentence is tagged. Sentences with no run are
//! skipped. Running the highlighter again over its own output changes
//! nothing: classes are sets and an already wrapped pair is not wrapped again.

use super::markup::{Element, Node, Passage};
use crate::utils::{normalize_word, normalized_words};

/// Class names used to recognise and mark tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightClasses {
    /// Class identifying a word token.
    pub word: String,
    pub start: String,
    pub end: String,
    /// Class of the wrapper placed around a start..end run.
    pub matched: String,
}

impl Default for HighlightClasses {
    fn default() -> Self {
        Self {
            word: "w".to_string(),
            start: "searched-start".to_string(),
            end: "searched-end".to_string(),
            matched: "searched".to_string(),
        }
    }
}

/// A word token in a rendered passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    /// Text content with markup removed (not yet normalized).
    pub text: String,
    /// Position among the passage's word tokens.
    pub index: usize,
    pub classes: Vec<String>,
    /// Child-index path from the passage root.
    pub path: Vec<usize>,
    /// Path of the enclosing sentence container (matched wrappers skipped).
    pub container: Vec<usize>,
    pub first_in_container: bool,
    pub last_in_container: bool,
}

/// Collect word tokens with their container adjacency.
pub fn tokens(passage: &Passage, classes: &HighlightClasses) -> Vec<TokenSpan> {
    let paths = passage.find_paths(|el| el.has_class(&classes.word));
    let mut spans: Vec<TokenSpan> = paths
        .into_iter()
        .enumerate()
        .filter_map(|(index, path)| {
            let el = passage.element(&path)?;
            Some(TokenSpan {
                text: el.text_content(),
                index,
                classes: el.classes().map(str::to_string).collect(),
                container: container_of(passage, &path, &classes.matched),
                path,
                first_in_container: false,
                last_in_container: false,
            })
        })
        .collect();

    for i in 0..spans.len() {
        spans[i].first_in_container = i == 0 || spans[i - 1].container != spans[i].container;
        spans[i].last_in_container =
            i + 1 == spans.len() || spans[i + 1].container != spans[i].container;
    }
    spans
}

/// Nearest ancestor path that is not a matched wrapper.
fn container_of(passage: &Passage, path: &[usize], matched_class: &str) -> Vec<usize> {
    let mut container = &path[..path.len().saturating_sub(1)];
    while !container.is_empty() {
        match passage.element(container) {
            Some(el) if el.has_class(matched_class) => {
                container = &container[..container.len() - 1];
            }
            _ => break,
        }
    }
    container.to_vec()
}

/// Highlights matched sentences in passage markup.
#[derive(Debug, Clone, Default)]
pub struct PassageHighlighter {
    classes: HighlightClasses,
}

impl PassageHighlighter {
    pub fn new(classes: HighlightClasses) -> Self {
        Self { classes }
    }

    /// Tag and wrap every matched sentence. Markup that cannot be parsed is
    /// returned unchanged.
    pub fn highlight<S: AsRef<str>>(&self, markup: &str, sentences: &[S]) -> String {
        match Passage::parse(markup) {
            Ok(mut passage) => {
                self.highlight_tree(&mut passage, sentences);
                passage.to_markup()
            }
            Err(err) => {
                tracing::warn!(error = %err, "passage markup not highlighted");
                markup.to_string()
            }
        }
    }

    /// Tag and wrap in place. Returns how many sentences were found.
    pub fn highlight_tree<S: AsRef<str>>(&self, passage: &mut Passage, sentences: &[S]) -> usize {
        let spans = tokens(passage, &self.classes);
        let candidates: Vec<(usize, String)> = spans
            .iter()
            .map(|s| (s.index, normalize_word(&s.text)))
            .filter(|(_, w)| !w.is_empty())
            .collect();

        let mut found = 0;
        for sentence in sentences {
            let words = normalized_words(sentence.as_ref());
            let Some(run) = find_run(&candidates, &words) else {
                tracing::debug!(sentence = sentence.as_ref(), "sentence not found in passage");
                continue;
            };
            found += 1;
            self.mark_run(passage, &spans, &run);
        }

        if found > 0 {
            self.wrap_runs(passage);
        }
        found
    }

    fn mark_run(&self, passage: &mut Passage, spans: &[TokenSpan], run: &[usize]) {
        let (Some(&first), Some(&last)) = (run.first(), run.last()) else {
            return;
        };
        for &index in run {
            let span = &spans[index];
            let Some(el) = passage.element_mut(&span.path) else {
                continue;
            };
            if index == first || span.first_in_container {
                el.add_class(&self.classes.start);
            }
            if index == last || span.last_in_container {
                el.add_class(&self.classes.end);
            }
        }
    }

    /// Wrap each start..end pair of tokens sharing a container.
    fn wrap_runs(&self, passage: &mut Passage) {
        let spans = tokens(passage, &self.classes);
        let mut groups: Vec<(Vec<usize>, usize, usize)> = Vec::new();
        let mut open: Option<&TokenSpan> = None;

        for span in &spans {
            if open.is_some_and(|o| o.container != span.container) {
                open = None;
            }
            if open.is_none() && span.classes.contains(&self.classes.start) {
                open = Some(span);
            }
            if span.classes.contains(&self.classes.end) {
                if let Some(start) = open.take() {
                    let depth = start.container.len();
                    groups.push((start.container.clone(), start.path[depth], span.path[depth]));
                }
            }
        }

        // Later groups first, so earlier paths stay valid while wrapping.
        groups.sort_by(|a, b| {
            let pa: Vec<usize> = a.0.iter().copied().chain([a.1]).collect();
            let pb: Vec<usize> = b.0.iter().copied().chain([b.1]).collect();
            pb.cmp(&pa)
        });

        for (container, lo, hi) in groups {
            if lo == hi && self.is_wrapper(passage, &container, lo) {
                continue;
            }
            let mut wrapper = Element::new("span");
            wrapper.add_class(&self.classes.matched);
            passage.wrap_children(&container, lo, hi, wrapper);
        }
    }

    fn is_wrapper(&self, passage: &Passage, container: &[usize], index: usize) -> bool {
        matches!(
            passage.children(container).and_then(|c| c.get(index)),
            Some(Node::Element(el)) if el.has_class(&self.classes.matched)
        )
    }
}

/// Token indices of the first run whose normalized words equal `words`.
fn find_run(candidates: &[(usize, String)], words: &[String]) -> Option<Vec<usize>> {
    if words.is_empty() || words.len() > candidates.len() {
        return None;
    }
    candidates
        .windows(words.len())
        .find(|window| window.iter().zip(words).all(|((_, w), q)| w == q))
        .map(|window| window.iter().map(|(i, _)| *i).collect())
}

/// Highlight with the default class names.
pub fn highlight_passage<S: AsRef<str>>(markup: &str, sentences: &[S]) -> String {
    PassageHighlighter::default().highlight(markup, sentences)
}
