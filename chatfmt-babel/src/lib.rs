//! Chat-transport plain text from model answers
//!
//!     This crate converts model-generated answers (Markdown headings, lists, bold emphasis and
//!     embedded LaTeX) into plain text that chat transports without rich rendering can display,
//!     and splits the result into transport-sized messages.
//!
//!     This is a pure lib, that is, it powers chatfmt-cli but is shell agnostic: no code here
//!     prints, reads env vars or touches files. Every entry point takes a `&str` and returns
//!     owned text. Malformed markup is an expected input class, not an error: rendering never
//!     fails, the worst case is imperfect formatting.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError (registry lookups only)
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── chunk.rs                # ChunkingPolicy and Transport limits
//!     ├── formats
//!     │   ├── latex               # MathRewriter: ordered rule set + matchers
//!     │   ├── markdown            # MarkdownReformatter: line classification + emission
//!     │   └── answer              # format_answer: reformat + spacing post-pass
//!     └── lib.rs
//!
//! Pipeline
//!
//!     raw answer -> markdown::reformat (calls latex::rewrite_document per heading, list item
//!     and body line) -> answer post-pass -> chunk::split -> one transport message per part.
//!
//! Core Algorithms
//!
//!     The MathRewriter is an ordered table of substitution rules grouped by category (see
//!     ./formats/latex/rules.rs). Order is load-bearing: longer command names must be rewritten
//!     before shorter ones that are textual prefixes or substrings of them, and the positional
//!     constructs (fractions, scripts, limits) must see the symbol phases already applied.
//!     The category order is a public constant and is tested.
//!
//!     Matching is done behind the Matcher trait. Commands are matched literally with a letter
//!     boundary check; argument constructs use one-level brace capture with `regex`. Nested
//!     braces deeper than one level are not handled.
//!
//!     The MarkdownReformatter is a single pass over lines carrying a LineContext (none, after
//!     heading, after list item) that decides where blank separator lines go.
pub mod chunk;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use chunk::{chunks, split, Transport};
pub use error::FormatError;
pub use format::Format;
pub use formats::answer::{format_answer, format_answer_with_rules};
pub use formats::latex::{rewrite, rewrite_document};
pub use formats::markdown::{reformat, reformat_with_rules, ReformatRules};
pub use registry::FormatRegistry;
