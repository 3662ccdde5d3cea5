//! Core types for the log book.
//!
//! This module provides:
//! - [`LogLevel`] — Severity levels for log records
//! - [`LogHint`] — Discriminator selecting a payload decoder
//! - [`LogRecord`] — The immutable unit of storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// General information
    Info,
    /// Error conditions
    Error,
}

impl LogLevel {
    /// Returns the lowercase wire representation of this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminator selecting how a record's payload should be decoded.
///
/// The payload bytes alone are opaque; the hint carried alongside them is
/// the only thing that picks the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogHint {
    /// Raw UTF-8 text
    Text,
    /// An encoded [`RequestMessage`](crate::message::RequestMessage)
    Request,
    /// An encoded [`ResponseMessage`](crate::message::ResponseMessage)
    Response,
}

impl LogHint {
    /// Returns the lowercase wire representation of this hint.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Request => "request",
            Self::Response => "response",
        }
    }
}

impl std::fmt::Display for LogHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable logged event.
///
/// A record is constructed once and never mutated. `message` holds the
/// opaque encoded payload; `hint` says how to decode it. On the wire the
/// payload travels as a base64 string and `created_at` as an RFC 3339
/// timestamp under the `createdAt` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Subsystem that produced the record. Expected non-empty.
    pub module: String,
    /// Finer-grained scope within the module. Expected non-empty.
    pub category: String,
    /// Severity level.
    pub level: LogLevel,
    /// Opaque encoded message content.
    #[serde(with = "payload_encoding")]
    pub message: Vec<u8>,
    /// Wall-clock time at construction.
    pub created_at: DateTime<Utc>,
    /// Decoder discriminator for `message`.
    pub hint: LogHint,
}

impl LogRecord {
    /// Creates a record stamped with the current wall-clock time.
    #[must_use]
    pub fn new(
        level: LogLevel,
        module: impl Into<String>,
        category: impl Into<String>,
        message: Vec<u8>,
        hint: LogHint,
    ) -> Self {
        Self::with_created_at(level, module, category, message, hint, Utc::now())
    }

    /// Creates a record with an explicit creation time (imports, replays).
    #[must_use]
    pub fn with_created_at(
        level: LogLevel,
        module: impl Into<String>,
        category: impl Into<String>,
        message: Vec<u8>,
        hint: LogHint,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            module: module.into(),
            category: category.into(),
            level,
            message,
            created_at,
            hint,
        }
    }
}

/// Base64 carrier for the opaque payload bytes.
mod payload_encoding {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(D::Error::custom)
    }
}
