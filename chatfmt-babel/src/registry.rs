//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::ReformatRules;
use std::collections::HashMap;
use tracing::debug;

/// Registry of rendering formats
///
/// Provides a centralized registry for all available formats.
/// Formats can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let text = registry.render("## Result\n$x^{2}$", "answer")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render source text using the specified format
    ///
    /// The only failure is an unknown format name.
    pub fn render(&self, source: &str, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        debug!(format, input_len = source.len(), "rendering");
        Ok(fmt.render(source))
    }

    /// Create a registry with default formats and default reformat rules
    pub fn with_defaults() -> Self {
        Self::with_rules(ReformatRules::default())
    }

    /// Create a registry with the built-in formats using custom reformat rules
    pub fn with_rules(rules: ReformatRules) -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::latex::LatexFormat);
        registry.register(crate::formats::markdown::MarkdownFormat::new(rules.clone()));
        registry.register(crate::formats::answer::AnswerFormat::new(rules));

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
