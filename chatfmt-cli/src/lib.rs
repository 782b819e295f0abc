//! Support code for the `chatfmt` binary
//!
//! The binary itself lives in `main.rs`; this crate exposes the pieces worth testing on their
//! own, currently the rendering of split message parts.

pub mod output;
