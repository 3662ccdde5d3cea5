//! Typed log messages and their byte codec.
//!
//! This module provides:
//! - [`LogMessage`] — Capability trait for encodable structured messages
//! - [`RequestMessage`] / [`ResponseMessage`] — Built-in HTTP summaries
//! - [`encode`] / [`decode`] — The uniform payload codec, keyed by [`LogHint`]
//! - [`normalize_body`] — The shared raw-body normalization rule

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{LogError, Result};
use crate::types::LogHint;

/// Capability trait for messages that can travel through a log record.
///
/// A message has a display hint and a canonical byte encoding: [`encode`]
/// produces the bytes stored in a record, and [`decode`] restores the
/// value from them under the same hint.
pub trait LogMessage: Serialize {
    /// The decoder hint stored alongside the encoded payload.
    fn hint(&self) -> LogHint;
}

/// Summary of an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMessage {
    /// Target URL, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    /// HTTP method, `"GET"` by default.
    #[serde(rename = "httpMethod")]
    pub method: String,
    /// Request headers, keys case-sensitive as supplied.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Normalized body text (see [`normalize_body`]). A request built
    /// without a body blob keeps the empty string.
    pub body: String,
}

impl Default for RequestMessage {
    fn default() -> Self {
        Self {
            url: None,
            method: "GET".to_string(),
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }
}

impl RequestMessage {
    /// Creates a GET request summary for `url` with no headers or body.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url: Some(url),
            ..Self::default()
        }
    }

    /// Builds a request summary from raw parts, normalizing the body blob.
    ///
    /// This is the call-site adapter for foreign request types: pull the
    /// parts out of whatever HTTP client type is in play and hand them
    /// over here before logging.
    #[must_use]
    pub fn from_parts(
        url: Option<Url>,
        method: impl Into<String>,
        headers: BTreeMap<String, String>,
        body: Option<&[u8]>,
    ) -> Self {
        Self {
            url,
            method: method.into(),
            headers,
            body: body.map(normalize_body).unwrap_or_default(),
        }
    }
}

impl LogMessage for RequestMessage {
    fn hint(&self) -> LogHint {
        LogHint::Request
    }
}

/// Summary of an HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Originating URL, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    /// HTTP status code, if the response carried one.
    #[serde(rename = "statusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Response headers, keys case-sensitive as supplied.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Normalized body text; `None` when the response had no body blob at
    /// all, which is distinct from an empty one (`"Empty"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ResponseMessage {
    /// Builds a response summary from raw parts, normalizing the body blob.
    #[must_use]
    pub fn from_parts(
        url: Option<Url>,
        status_code: Option<u16>,
        headers: BTreeMap<String, String>,
        body: Option<&[u8]>,
    ) -> Self {
        Self {
            url,
            status_code,
            headers,
            body: body.map(normalize_body),
        }
    }
}

impl LogMessage for ResponseMessage {
    fn hint(&self) -> LogHint {
        LogHint::Response
    }
}

/// A message restored from a record payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedMessage {
    /// Plain UTF-8 text.
    Text(String),
    /// An HTTP request summary.
    Request(RequestMessage),
    /// An HTTP response summary.
    Response(ResponseMessage),
}

/// Normalizes a raw body blob into display text.
///
/// JSON bodies are re-serialized with stable pretty formatting; empty
/// blobs become `"Empty"`; other UTF-8 blobs are kept verbatim; anything
/// else collapses to `"Binary data (<N> bytes)"`. Normalization is
/// one-way: the original bytes are not recoverable from the result.
#[must_use]
pub fn normalize_body(raw: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(raw) {
        if let Ok(pretty) = serde_json::to_string_pretty(&value) {
            return pretty;
        }
    }
    if raw.is_empty() {
        "Empty".to_owned()
    } else if let Ok(text) = std::str::from_utf8(raw) {
        text.to_owned()
    } else {
        format!("Binary data ({} bytes)", raw.len())
    }
}

/// Encodes a typed message into its canonical payload bytes.
///
/// The encoding is self-describing JSON with field names preserved, so a
/// reader that cannot decode it can still fall back to the raw bytes as
/// text.
///
/// # Errors
///
/// Returns [`LogError::Encode`] if the message cannot be serialized.
pub fn encode<M: LogMessage>(message: &M) -> Result<Vec<u8>> {
    serde_json::to_vec(message).map_err(LogError::Encode)
}

/// Decodes a record payload under its declared hint.
///
/// The hint alone selects the decoder; the codec never infers the message
/// type from the payload content. A failure is surfaced as a distinct
/// error value; falling back to raw text is the display layer's job, not
/// the codec's.
///
/// # Errors
///
/// Returns [`LogError::Decode`] if the payload is not valid under `hint`.
pub fn decode(payload: &[u8], hint: LogHint) -> Result<DecodedMessage> {
    let decoded = match hint {
        LogHint::Text => DecodedMessage::Text(
            std::str::from_utf8(payload)
                .map_err(|err| LogError::Decode {
                    hint,
                    reason: err.to_string(),
                })?
                .to_owned(),
        ),
        LogHint::Request => {
            DecodedMessage::Request(serde_json::from_slice(payload).map_err(|err| {
                LogError::Decode {
                    hint,
                    reason: err.to_string(),
                }
            })?)
        }
        LogHint::Response => {
            DecodedMessage::Response(serde_json::from_slice(payload).map_err(|err| {
                LogError::Decode {
                    hint,
                    reason: err.to_string(),
                }
            })?)
        }
    };
    Ok(decoded)
}
