//! Message chunking for chat transports
//!
//! Chat transports cap message length, so the finished document is cut into consecutive
//! slices of at most `max_len` characters. Boundaries ignore structure and may fall mid-word.
//! The parts are in order and concatenate back to the input.
//!
//! Lengths are counted in Unicode scalar values, so a boundary never falls inside a UTF-8
//! sequence.

use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use tracing::debug;

const fn limit(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("transport limits are non-zero"),
    }
}

/// Outbound chat transports with their message length limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    /// WhatsApp Cloud API: 4096 hard limit, 4000 used
    WhatsappCloud,
    /// Twilio WhatsApp: 1600 hard limit, 1500 used
    Twilio,
}

impl Transport {
    pub const ALL: [Transport; 2] = [Transport::WhatsappCloud, Transport::Twilio];

    pub fn name(self) -> &'static str {
        match self {
            Transport::WhatsappCloud => "whatsapp-cloud",
            Transport::Twilio => "twilio",
        }
    }

    /// Default chunk size, kept below the hard limit as a safety margin
    pub const fn max_len(self) -> NonZeroUsize {
        match self {
            Transport::WhatsappCloud => limit(4000),
            Transport::Twilio => limit(1500),
        }
    }

    /// Length at which the transport rejects a message
    pub const fn hard_limit(self) -> usize {
        match self {
            Transport::WhatsappCloud => 4096,
            Transport::Twilio => 1600,
        }
    }

    /// Split `text` using this transport's default chunk size
    pub fn split(self, text: &str) -> Vec<&str> {
        split(text, self.max_len())
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transport {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transport::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatError::TransportNotFound(s.to_string()))
    }
}

/// Lazy iterator over consecutive `max_len`-character slices of a string
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    max_len: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .nth(self.max_len)
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(head)
    }
}

/// Iterate over slices of at most `max_len` characters. Yields nothing for empty input.
pub fn chunks(text: &str, max_len: NonZeroUsize) -> Chunks<'_> {
    Chunks {
        rest: text,
        max_len: max_len.get(),
    }
}

/// Split `text` into ordered parts of at most `max_len` characters each.
///
/// Never returns an empty list: empty input yields a single empty part so callers always
/// have something to send.
pub fn split(text: &str, max_len: NonZeroUsize) -> Vec<&str> {
    let mut parts: Vec<&str> = chunks(text, max_len).collect();
    if parts.is_empty() {
        parts.push("");
    }
    debug!(parts = parts.len(), max_len = max_len.get(), "split message");
    parts
}
