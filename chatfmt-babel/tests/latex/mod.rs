//! LaTeX rewriting tests
//!
//! Whole-document behaviour and properties of the ordered rule set.

mod documents;
mod properties;
