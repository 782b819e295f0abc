//! Markdown to chat plain text
//!
//! Model answers arrive as Markdown; chat transports show it raw. This module maps the
//! structure onto plain text the transport can display:
//!
//! | Markdown            | Output                                  |
//! |---------------------|-----------------------------------------|
//! | `# ` to `### `      | rule line, `*text*`, rule line          |
//! | `#### ` and deeper  | `🔹 *text*`                             |
//! | `1. item`           | `  1. item`                             |
//! | `- item`            | `  • item`                              |
//! | `**bold**`/`__b__`  | `*bold*` (the transport's bold)         |
//! | `` `code` ``        | `[code]` (body lines only)              |
//!
//! LaTeX in headings, list items and body lines is rewritten with
//! [`rewrite_document`](crate::formats::latex::rewrite_document). Blank separators are
//! inserted by the [`lines::LineContext`] policy and never doubled.

pub mod lines;
pub mod serializer;

use crate::format::Format;
use serde::{Deserialize, Serialize};
use serializer::{convert_bold, Reformatter};

/// Decorations used by the reformatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReformatRules {
    /// Line emitted above and below level 1–3 headings
    pub heading_rule: String,

    /// Prefix for level 4+ headings
    pub subheading_marker: String,

    /// Glyph for unordered list items
    pub bullet_marker: String,
}

impl Default for ReformatRules {
    fn default() -> Self {
        Self {
            heading_rule: "━".repeat(20),
            subheading_marker: "🔹".to_string(),
            bullet_marker: "•".to_string(),
        }
    }
}

/// Format implementation for Markdown reformatting
pub struct MarkdownFormat {
    rules: ReformatRules,
}

impl MarkdownFormat {
    pub fn new(rules: ReformatRules) -> Self {
        Self { rules }
    }
}

impl Default for MarkdownFormat {
    fn default() -> Self {
        Self::new(ReformatRules::default())
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown structure and LaTeX math to chat plain text"
    }

    fn render(&self, source: &str) -> String {
        reformat_with_rules(source, &self.rules)
    }
}

/// Reformat Markdown with the default decorations
pub fn reformat(text: &str) -> String {
    reformat_with_rules(text, &ReformatRules::default())
}

/// Reformat Markdown with custom decorations. Empty input is returned unchanged.
pub fn reformat_with_rules(text: &str, rules: &ReformatRules) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = convert_bold(text);
    let mut reformatter = Reformatter::new(rules);
    for line in text.split('\n') {
        reformatter.push(line);
    }
    reformatter.finish()
}
