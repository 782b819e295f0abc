//! Shared configuration loader for the chatfmt toolchain.
//!
//! `defaults/chatfmt.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ChatfmtConfig`].

use chatfmt_babel::{ReformatRules, Transport};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/chatfmt.default.toml");

/// Top-level configuration consumed by chatfmt applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatfmtConfig {
    pub formatting: FormattingConfig,
    pub convert: ConvertConfig,
    pub transport: TransportConfig,
}

/// Formatting-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub rules: ReformatRulesConfig,
}

/// Mirrors the decorations used by the Markdown reformatter.
#[derive(Debug, Clone, Deserialize)]
pub struct ReformatRulesConfig {
    pub heading_rule: String,
    pub subheading_marker: String,
    pub bullet_marker: String,
}

impl From<ReformatRulesConfig> for ReformatRules {
    fn from(config: ReformatRulesConfig) -> Self {
        ReformatRules {
            heading_rule: config.heading_rule,
            subheading_marker: config.subheading_marker,
            bullet_marker: config.bullet_marker,
        }
    }
}

impl From<&ReformatRulesConfig> for ReformatRules {
    fn from(config: &ReformatRulesConfig) -> Self {
        ReformatRules {
            heading_rule: config.heading_rule.clone(),
            subheading_marker: config.subheading_marker.clone(),
            bullet_marker: config.bullet_marker.clone(),
        }
    }
}

/// Conversion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Format name looked up in the registry
    pub format: String,
}

/// Outbound transport selection and chunk sizes.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportConfig {
    pub default: Transport,
    pub limits: TransportLimits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransportLimits {
    pub whatsapp_cloud: usize,
    pub twilio: usize,
}

impl TransportLimits {
    pub fn get(&self, transport: Transport) -> usize {
        match transport {
            Transport::WhatsappCloud => self.whatsapp_cloud,
            Transport::Twilio => self.twilio,
        }
    }
}

impl TransportConfig {
    /// Configured chunk size for `transport`.
    ///
    /// Falls back to the transport's built-in size for a zero limit, which [`Loader::build`]
    /// already rejects.
    pub fn max_len(&self, transport: Transport) -> NonZeroUsize {
        NonZeroUsize::new(self.limits.get(transport)).unwrap_or(transport.max_len())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for transport in Transport::ALL {
            let limit = self.limits.get(transport);
            if limit == 0 || limit > transport.hard_limit() {
                return Err(ConfigError::Message(format!(
                    "transport.limits for {transport} must be between 1 and {}, got {limit}",
                    transport.hard_limit()
                )));
            }
        }
        Ok(())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize, and check transport limits.
    pub fn build(self) -> Result<ChatfmtConfig, ConfigError> {
        let config: ChatfmtConfig = self.builder.build()?.try_deserialize()?;
        config.transport.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ChatfmtConfig, ConfigError> {
    Loader::new().build()
}
