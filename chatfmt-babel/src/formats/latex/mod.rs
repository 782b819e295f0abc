//! LaTeX math to plain text
//!
//! Chat transports render neither LaTeX nor MathJax, so math is rewritten into readable
//! Unicode/ASCII notation: `\frac{a}{b}` becomes `(a)/(b)`, `\sqrt{x+1}` becomes `√(x+1)`,
//! `\alpha \leq \pi` becomes `alpha ≤ pi`.
//!
//! # Pipeline
//!
//! [`rewrite`] runs the ordered rule set in [`rules::CATEGORY_ORDER`]: delimiters are
//! stripped, commands substituted category by category, square roots and inverse-trig
//! spellings unified, whitespace normalized, and redundant script parentheses dropped.
//!
//! [`rewrite_document`] first resolves explicit math regions (`\[…\]`, `$$…$$`, `\(…\)`,
//! `$…$`), rewriting each region's content, then runs [`rewrite`] over the whole text to catch
//! bare commands outside delimiters.
//!
//! # Limitations
//!
//! - Unknown commands are left as literal backslash text.
//! - Argument constructs capture one brace level: `\frac{\sqrt{2}}{2}` is not rewritten
//!   correctly.
//! - A lone `$` is treated as a math delimiter and removed, including currency signs.

pub mod matcher;
pub mod rules;

use crate::format::Format;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rules::RULESET;
use std::borrow::Cow;
use tracing::trace;

static DISPLAY_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\\\[(.*?)\\\]").unwrap());
static DISPLAY_DOLLARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").unwrap());
static INLINE_PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\((.*?)\\\)").unwrap());
static INLINE_DOLLARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(.*?)\$").unwrap());
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Format implementation for math-only rewriting
pub struct LatexFormat;

impl Format for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "LaTeX math rewritten to Unicode/ASCII notation"
    }

    fn render(&self, source: &str) -> String {
        rewrite_document(source)
    }
}

/// Rewrite LaTeX commands in `text` to plain notation.
///
/// Empty input is returned unchanged. Line breaks survive; runs of other whitespace collapse
/// to one space and the result is trimmed.
pub fn rewrite(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut current = text.to_string();
    for rule in RULESET.iter() {
        let next = match rule.apply(&current) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        if let Some(next) = next {
            trace!(category = ?rule.category, rule = %rule.source, "rewrite rule applied");
            current = next;
        }
    }

    current.trim().to_string()
}

/// Rewrite explicit math regions, then any bare commands left in the text.
pub fn rewrite_document(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut current = text.to_string();
    for region in [
        &*DISPLAY_BRACKETS,
        &*DISPLAY_DOLLARS,
        &*INLINE_PARENS,
        &*INLINE_DOLLARS,
    ] {
        let next = match region.replace_all(&current, |caps: &Captures| rewrite(&caps[1])) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        if let Some(next) = next {
            current = next;
        }
    }

    let current = rewrite(&current);
    EXCESS_NEWLINES
        .replace_all(&current, "\n\n")
        .into_owned()
}
