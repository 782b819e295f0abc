//! Rendering of split message parts
//!
//! Text mode prints every part followed by a footer line so the boundaries are visible:
//!
//! ```text
//! first part text
//! --- part 1/2 (4000 chars) ---
//! second part text
//! --- part 2/2 (12 chars) ---
//! ```
//!
//! JSON mode prints an array of [`Part`] objects for scripting.

use serde::Serialize;

/// One outbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part<'a> {
    /// 1-based position in the sequence
    pub index: usize,
    /// Length in characters
    pub chars: usize,
    pub text: &'a str,
}

/// Number the chunks produced by the splitter.
pub fn parts<'a>(chunks: &[&'a str]) -> Vec<Part<'a>> {
    chunks
        .iter()
        .copied()
        .enumerate()
        .map(|(i, text)| Part {
            index: i + 1,
            chars: text.chars().count(),
            text,
        })
        .collect()
}

pub fn render_text(parts: &[Part<'_>]) -> String {
    let total = parts.len();
    let mut out = String::new();
    for part in parts {
        out.push_str(part.text);
        if !part.text.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&format!(
            "--- part {}/{total} ({} chars) ---\n",
            part.index, part.chars
        ));
    }
    out
}

pub fn render_json(parts: &[Part<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_parts_from_one() {
        let numbered = parts(&["ab", "√"]);
        assert_eq!(
            numbered,
            vec![
                Part {
                    index: 1,
                    chars: 2,
                    text: "ab"
                },
                Part {
                    index: 2,
                    chars: 1,
                    text: "√"
                },
            ]
        );
    }

    #[test]
    fn text_rendering_adds_footers() {
        let numbered = parts(&["hello ", "world"]);
        assert_eq!(
            render_text(&numbered),
            "hello \n--- part 1/2 (6 chars) ---\nworld\n--- part 2/2 (5 chars) ---\n"
        );
    }

    #[test]
    fn text_rendering_does_not_double_newlines() {
        let numbered = parts(&["line\n"]);
        assert_eq!(render_text(&numbered), "line\n--- part 1/1 (5 chars) ---\n");
    }

    #[test]
    fn json_rendering() {
        let numbered = parts(&["hi"]);
        let json = render_json(&numbered).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["index"], 1);
        assert_eq!(value[0]["chars"], 2);
        assert_eq!(value[0]["text"], "hi");
    }

    #[test]
    fn empty_part_still_gets_a_footer() {
        let numbered = parts(&[""]);
        assert_eq!(render_text(&numbered), "\n--- part 1/1 (0 chars) ---\n");
    }
}
