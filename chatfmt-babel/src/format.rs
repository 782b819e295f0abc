//! Format trait definition
//!
//! This module defines the Format trait every rendering stage implements. A format takes raw
//! answer text and produces chat-ready plain text.

/// Trait for rendering stages
///
/// Rendering is infallible: malformed or unrecognised markup is left as literal text rather
/// than reported. Implementations must be safe to share across request handlers.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn render(&self, source: &str) -> String {
///         source.to_uppercase()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "latex", "markdown", "answer")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Render source text into chat-ready plain text
    fn render(&self, source: &str) -> String;
}
