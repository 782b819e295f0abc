//! Full answer pipeline: Markdown reformatting followed by a spacing pass.

use crate::format::Format;
use crate::formats::markdown::{reformat_with_rules, ReformatRules};
use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(📌|•)").unwrap());
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Format implementation for the complete answer pipeline
pub struct AnswerFormat {
    rules: ReformatRules,
}

impl AnswerFormat {
    pub fn new(rules: ReformatRules) -> Self {
        Self { rules }
    }
}

impl Default for AnswerFormat {
    fn default() -> Self {
        Self::new(ReformatRules::default())
    }
}

impl Format for AnswerFormat {
    fn name(&self) -> &str {
        "answer"
    }

    fn description(&self) -> &str {
        "Model answer to chat-ready text (markdown plus spacing cleanup)"
    }

    fn render(&self, source: &str) -> String {
        format_answer_with_rules(source, &self.rules)
    }
}

/// Format a model answer with the default decorations
pub fn format_answer(text: &str) -> String {
    format_answer_with_rules(text, &ReformatRules::default())
}

/// Format a model answer.
///
/// Lines opening with `📌` or `•` get a blank line before them, runs of spaces collapse to one
/// and blank-line runs collapse to one blank line. The result is trimmed.
pub fn format_answer_with_rules(text: &str, rules: &ReformatRules) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = reformat_with_rules(text, rules);
    let text = MARKER_LINE.replace_all(&text, "\n\n${1}");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ReformatRules {
        ReformatRules {
            heading_rule: "R".to_string(),
            ..ReformatRules::default()
        }
    }

    #[test]
    fn full_answer() {
        let input = "## Solution\nWe have $x^2 = 4$.\n1. Take roots\n2. Get $x = \\pm 2$\nSo **done**.";
        assert_eq!(
            format_answer_with_rules(input, &rules()),
            "R\n*Solution*\nR\n\nWe have x^2 = 4.\n\n 1. Take roots\n 2. Get x = ± 2\n\nSo *done*."
        );
    }

    #[test]
    fn pin_lines_are_spaced() {
        assert_eq!(format_answer("Result\n📌 Note"), "Result\n\n📌 Note");
    }

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(format_answer(""), "");
    }

    #[test]
    fn answer_format_uses_its_rules() {
        let format = AnswerFormat::new(rules());
        assert_eq!(format.render("# Hi"), "R\n*Hi*\nR");
    }
}
