//! Line classification and the blank-separator policy
//!
//! Each input line is classified on its own. The only state carried between lines is a
//! [`LineContext`], which decides whether a blank separator goes in front of the next block.

use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").unwrap());
static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+]\s+(.+)$").unwrap());

/// What the previously classified line was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineContext {
    #[default]
    None,
    AfterHeading,
    AfterListItem,
}

/// A classified, trimmed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `#` to `######` followed by a space
    Heading { level: usize, text: &'a str },
    /// `N. text`
    OrderedItem { number: &'a str, text: &'a str },
    /// `- text`, `* text` or `+ text`
    BulletItem(&'a str),
    Blank,
    Plain(&'a str),
}

impl<'a> Line<'a> {
    /// Classify one line. Priority: heading, ordered item, bullet, blank, plain.
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return Line::Blank;
        }
        if let Some((level, text)) = heading(line) {
            return Line::Heading { level, text };
        }
        if let Some(caps) = ORDERED_ITEM.captures(line) {
            if let (Some(number), Some(text)) = (caps.get(1), caps.get(2)) {
                return Line::OrderedItem {
                    number: number.as_str(),
                    text: text.as_str(),
                };
            }
        }
        if let Some(text) = BULLET_ITEM.captures(line).and_then(|caps| caps.get(1)) {
            return Line::BulletItem(text.as_str());
        }
        Line::Plain(line)
    }

    /// Context the next line sees after this one
    pub fn context_after(&self) -> LineContext {
        match self {
            Line::Heading { .. } => LineContext::AfterHeading,
            Line::OrderedItem { .. } | Line::BulletItem(_) => LineContext::AfterListItem,
            Line::Blank | Line::Plain(_) => LineContext::None,
        }
    }

    /// Whether a blank separator should precede this line (if the last emitted line is
    /// non-blank)
    pub fn wants_separator(&self, context: LineContext) -> bool {
        match self {
            Line::Heading { .. } => true,
            Line::OrderedItem { .. } | Line::BulletItem(_) => {
                context != LineContext::AfterListItem
            }
            Line::Blank => false,
            Line::Plain(text) => match context {
                LineContext::AfterHeading => true,
                LineContext::AfterListItem => !starts_like_list_marker(text),
                LineContext::None => false,
            },
        }
    }
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    Some((level, text.trim()))
}

/// Continuation lines of a list start with a marker character or digit.
fn starts_like_list_marker(text: &str) -> bool {
    text.starts_with(|c: char| matches!(c, '-' | '*' | '+') || c.is_ascii_digit())
}
