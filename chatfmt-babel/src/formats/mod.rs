//! Rendering stages
//!
//! - latex: MathRewriter, LaTeX command sequences to Unicode/ASCII notation
//! - markdown: MarkdownReformatter, headings/lists/emphasis to plain text (uses latex)
//! - answer: the full answer pipeline (markdown plus a spacing post-pass)

pub mod answer;
pub mod latex;
pub mod markdown;
