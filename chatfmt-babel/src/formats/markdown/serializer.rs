//! Plain-text emission for classified lines

use super::lines::{Line, LineContext};
use super::ReformatRules;
use crate::formats::latex::rewrite_document;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+?)\*\*").unwrap());
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static STRAY_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*").unwrap());
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Rewrite `**X**` and `__X__` to the transport's `*X*` bold.
pub fn convert_bold(text: &str) -> String {
    let text = BOLD_STARS.replace_all(text, "*${1}*");
    BOLD_UNDERSCORES.replace_all(&text, "*${1}*").into_owned()
}

/// Single pass over lines, accumulating output lines
pub struct Reformatter<'r> {
    rules: &'r ReformatRules,
    lines: Vec<String>,
    context: LineContext,
}

impl<'r> Reformatter<'r> {
    pub fn new(rules: &'r ReformatRules) -> Self {
        Reformatter {
            rules,
            lines: Vec::new(),
            context: LineContext::default(),
        }
    }

    pub fn push(&mut self, raw: &str) {
        let line = Line::classify(raw);
        if line.wants_separator(self.context) {
            self.separate();
        }

        match line {
            Line::Heading { level, text } if level >= 4 => {
                let text = bold(&rewrite_document(text));
                self.lines
                    .push(format!("{} {text}", self.rules.subheading_marker));
            }
            Line::Heading { text, .. } => {
                let text = bold(&rewrite_document(text));
                self.lines.push(self.rules.heading_rule.clone());
                self.lines.push(text);
                self.lines.push(self.rules.heading_rule.clone());
            }
            Line::OrderedItem { number, text } => {
                self.lines
                    .push(format!("  {number}. {}", rewrite_document(text)));
            }
            Line::BulletItem(text) => {
                self.lines.push(format!(
                    "  {} {}",
                    self.rules.bullet_marker,
                    rewrite_document(text)
                ));
            }
            Line::Blank => self.separate(),
            Line::Plain(text) => {
                let text = rewrite_document(text);
                self.lines
                    .push(INLINE_CODE.replace_all(&text, "[${1}]").into_owned());
            }
        }

        self.context = line.context_after();
    }

    /// Join the emitted lines, dropping stray `**` and extra blank lines.
    pub fn finish(self) -> String {
        let text = self.lines.join("\n");
        let text = STRAY_BOLD.replace_all(&text, "");
        let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
        text.trim().to_string()
    }

    /// Append one blank line unless nothing was emitted yet or the last line is blank.
    fn separate(&mut self) {
        if self.lines.last().is_some_and(|last| !last.is_empty()) {
            self.lines.push(String::new());
        }
    }
}

/// Wrap in bold unless the text already carries bold markers.
fn bold(text: &str) -> String {
    if text.contains('*') {
        text.to_string()
    } else {
        format!("*{text}*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_conversion() {
        assert_eq!(convert_bold("a **b** c"), "a *b* c");
        assert_eq!(convert_bold("__x__ and **y**"), "*x* and *y*");
        assert_eq!(convert_bold("* item"), "* item");
    }

    #[test]
    fn already_bold_text_is_not_rewrapped() {
        assert_eq!(bold("plain"), "*plain*");
        assert_eq!(bold("*Step* one"), "*Step* one");
    }

    #[test]
    fn separator_is_never_leading_or_doubled() {
        let rules = ReformatRules::default();
        let mut reformatter = Reformatter::new(&rules);
        reformatter.push("");
        reformatter.push("");
        reformatter.push("text");
        reformatter.push("");
        reformatter.push("");
        reformatter.push("more");
        assert_eq!(reformatter.lines, vec!["text", "", "more"]);
    }
}
