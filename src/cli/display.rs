// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the lectio CLI.
//!
//! OneDark for dark terminals, One Light for light ones. `LECTIO_THEME`
//! ("dark" or "light") wins, then `COLORFGBG`, then dark. Highlight tags in
//! fragments become bold accents on a color terminal and `[brackets]`
//! everywhere else. Respects `NO_COLOR` and non-TTY detection for pipelines.

use std::sync::OnceLock;

use lectio::{Hit, SearchPage};

pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LECTIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// Replace highlight tags with terminal emphasis and unescape entities.
pub fn render_fragment(fragment: &str, pre_tag: &str, post_tag: &str, colored: bool) -> String {
    let (open, close) = if colored {
        (format!("{}{}", BOLD, YELLOW()), RESET.to_string())
    } else {
        ("[".to_string(), "]".to_string())
    };
    let text = fragment.replace(pre_tag, &open).replace(post_tag, &close);
    let text = text.replace("<small>", "").replace("</small>", "");
    let unescaped = quick_xml::escape::unescape(&text).map(|u| u.into_owned());
    unescaped.unwrap_or(text)
}

fn print_hit(position: usize, hit: &Hit, pre_tag: &str, post_tag: &str) {
    let colored = use_colors();
    println!(
        "{:>3}. {}",
        position,
        themed(BLUE, &[BOLD], &hit.id)
    );
    if hit.fragments.is_empty() {
        if let Some(text) = hit.source.get("text").and_then(|v| v.as_str()) {
            let preview: String = text.chars().take(BOX_WIDTH).collect();
            println!("     {}", themed(GRAY, &[DIM], &preview));
        }
    }
    for fragment in &hit.fragments {
        println!("     {}", render_fragment(fragment, pre_tag, post_tag, colored));
    }
}

/// Print a page of hits with its total and facet counts.
pub fn print_page(page: &SearchPage, first_position: usize, pre_tag: &str, post_tag: &str) {
    section_top(&format!("{} hits", page.total));
    for (i, hit) in page.hits.iter().enumerate() {
        print_hit(first_position.saturating_add(i), hit, pre_tag, post_tag);
    }
    if let Some(buckets) = page
        .aggregations
        .get("corpus")
        .and_then(|agg| agg.get("buckets"))
        .and_then(|b| b.as_object())
    {
        let counts: Vec<String> = buckets
            .iter()
            .map(|(name, bucket)| {
                let count = bucket.get("doc_count").and_then(|c| c.as_u64()).unwrap_or(0);
                format!("{} {}", name, count)
            })
            .collect();
        println!("     {}", themed(GRAY, &[], &counts.join("  ")));
    }
    section_bot();
}
