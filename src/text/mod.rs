//
//  jira-fetcher
//  text/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Text Cleaning
//!
//! Issue descriptions and comment bodies arrive in Jira wiki markup. Before
//! they go into a document's content they are passed through a
//! [`TextCleaner`]. The fetcher only depends on the trait; [`MarkupCleaner`]
//! is the implementation used by default.
//!
//! ## Example
//!
//! ```rust
//! use jira_fetcher::text::{MarkupCleaner, TextCleaner};
//!
//! let cleaner = MarkupCleaner::new();
//! assert_eq!(
//!     cleaner.clean("h2. Steps\nSee [the docs|https://example.com] and ping [~jdoe]"),
//!     "Steps\nSee the docs (https://example.com) and ping @jdoe"
//! );
//! ```

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Turns marked-up text into plain text.
pub trait TextCleaner: Send + Sync {
    fn clean(&self, text: &str) -> String;
}

impl<F> TextCleaner for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn clean(&self, text: &str) -> String {
        self(text)
    }
}

/// `{code}`, `{code:java}`, `{noformat}`, `{quote}`, `{panel:title=x}`, `{color:red}`
static MACRO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(?:code|noformat|quote|panel|color)(?::[^}]*)?\}").unwrap()
});

/// `h1. Title` through `h6. Title`
static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^h[1-6]\.\s*").unwrap());

/// `[~jdoe]` or `[~accountid:5b10a2844c20165700ede21g]`
static MENTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[~(?:accountid:)?([^\]]+)\]").unwrap());

/// `[text|https://example.com]`
static LABELED_LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^|\]]+)\|([^\]]+)\]").unwrap());

/// `[https://example.com]`
static BARE_LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[((?:https?|mailto|ftp):[^\]]+)\]").unwrap());

/// `{{monospace}}`
static MONOSPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{(.+?)\}\}").unwrap());

/// Inline effects: `*strong*`, `_emphasis_`, `-deleted-`, `+inserted+`, `^sup^`, `~sub~`.
/// The markers must not touch word characters on the outside or whitespace
/// on the inside, so `snake_case_name` and `a - b` are left alone.
static EFFECT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ['*', '_', '-', '+', '^', '~']
        .iter()
        .map(|marker| {
            let m = regex::escape(&marker.to_string());
            Regex::new(&format!(
                r"(?m)(^|[^\w{m}]){m}([^{m}\s](?:[^{m}\n]*[^{m}\s])?){m}($|[^\w{m}])"
            ))
            .unwrap()
        })
        .collect()
});

static BLANK_LINES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").unwrap());

/// Strips Jira wiki markup down to readable plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupCleaner;

impl MarkupCleaner {
    pub fn new() -> Self {
        Self
    }
}

impl TextCleaner for MarkupCleaner {
    fn clean(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n");
        let text = MACRO_PATTERN.replace_all(&text, "");
        let text = HEADING_PATTERN.replace_all(&text, "");
        let text = MENTION_PATTERN.replace_all(&text, "@${1}");
        let text = LABELED_LINK_PATTERN.replace_all(&text, "${1} (${2})");
        let text = BARE_LINK_PATTERN.replace_all(&text, "${1}");
        let mut text = MONOSPACE_PATTERN.replace_all(&text, "${1}").into_owned();

        // Each match consumes its boundary characters, so adjacent spans such
        // as `*a* *b*` need another pass.
        for pattern in EFFECT_PATTERNS.iter() {
            loop {
                let next = match pattern.replace_all(&text, "${1}${2}${3}") {
                    Cow::Borrowed(_) => break,
                    Cow::Owned(next) => next,
                };
                text = next;
            }
        }

        BLANK_LINES_PATTERN
            .replace_all(&text, "\n\n")
            .trim()
            .to_string()
    }
}
