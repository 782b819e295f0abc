//! Error types for format and transport lookups
//!
//! Rendering itself never fails; these only surface when a caller names a format or a
//! transport that does not exist.

use thiserror::Error;

/// Errors that can occur when selecting a format or transport by name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Transport name not recognised
    #[error("Transport '{0}' not found (expected one of: whatsapp-cloud, twilio)")]
    TransportNotFound(String),
}
