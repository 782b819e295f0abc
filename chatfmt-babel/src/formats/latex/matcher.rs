//! Span matchers for rewrite rules
//!
//! A matcher finds spans in the text and hands their captured arguments to a
//! [`Replacement`]. Rule application only talks to the [`Matcher`] trait, so the one-level
//! regex capture used for argument constructs can be replaced by a real parser without
//! touching the rule pipeline.

use regex::{Captures, Regex};
use std::borrow::Cow;

/// How a matched span is replaced
#[derive(Debug, Clone, Copy)]
pub enum Replacement {
    /// Fixed text, no arguments used
    Text(&'static str),
    /// Built from the captured argument groups (missing groups are empty strings)
    With(fn(&[&str]) -> String),
}

impl Replacement {
    pub fn produce(&self, args: &[&str]) -> String {
        match self {
            Replacement::Text(text) => (*text).to_string(),
            Replacement::With(build) => build(args),
        }
    }
}

/// Finds spans and substitutes them. Returns `Cow::Borrowed` when nothing matched.
pub trait Matcher: Send + Sync {
    fn replace_all<'t>(&self, text: &'t str, replacement: &Replacement) -> Cow<'t, str>;
}

/// Literal LaTeX command such as `\sin` or `\,`.
///
/// When the command name ends in a letter, a match is refused if the next character is also
/// a letter: `\in` does not match inside `\int` or `\infty`. Digits, `_`, braces and
/// backslashes all end a command, so `\int_0^1` and `\alpha2` still match.
#[derive(Debug, Clone)]
pub struct CommandMatcher {
    needle: String,
    ends_in_letter: bool,
}

impl CommandMatcher {
    /// `name` is the command without its leading backslash.
    pub fn new(name: &str) -> Self {
        CommandMatcher {
            needle: format!("\\{name}"),
            ends_in_letter: name.ends_with(|c: char| c.is_ascii_alphabetic()),
        }
    }
}

impl Matcher for CommandMatcher {
    fn replace_all<'t>(&self, text: &'t str, replacement: &Replacement) -> Cow<'t, str> {
        let mut out = String::new();
        let mut last = 0;
        let mut replaced = false;
        for (start, _) in text.match_indices(self.needle.as_str()) {
            let end = start + self.needle.len();
            if self.ends_in_letter && text[end..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                continue;
            }
            out.push_str(&text[last..start]);
            out.push_str(&replacement.produce(&[]));
            last = end;
            replaced = true;
        }
        if !replaced {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Regex-backed matcher for argument constructs (`\frac{A}{B}`, `^{X}`, ...)
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(regex: Regex) -> Self {
        PatternMatcher { regex }
    }
}

impl Matcher for PatternMatcher {
    fn replace_all<'t>(&self, text: &'t str, replacement: &Replacement) -> Cow<'t, str> {
        self.regex.replace_all(text, |caps: &Captures| {
            let args: Vec<&str> = caps
                .iter()
                .skip(1)
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect();
            replacement.produce(&args)
        })
    }
}
