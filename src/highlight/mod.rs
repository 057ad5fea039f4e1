// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting: making matches visible in their original context.
//!
//! Three different problems share this module. Engine fragments need
//! trimming to a readable window. Lemma hits have no usable engine
//! highlights at all, so their context is rebuilt from the surface text by
//! position. And full passages, rendered long after the search, need the
//! matched sentences flagged again inside their markup.

pub mod markup;
pub mod passage;
pub mod realign;
pub mod window;

pub use markup::{Element, Node, Passage};
pub use passage::{highlight_passage, tokens, HighlightClasses, PassageHighlighter, TokenSpan};
pub use realign::{realign, realign_text, MULTI_TERM_RADIUS, SINGLE_TERM_RADIUS};
pub use window::window;
