//! Rendering log records for human consumption.
//!
//! This module provides:
//! - [`LogDisplay`] — Rendering abstraction over an output form
//! - [`TextDisplay`] — Plain-text rendering with raw-text decode fallback

use crate::message::{self, DecodedMessage};
use crate::types::{LogLevel, LogRecord};

/// Renders a log record into some output form.
pub trait LogDisplay {
    /// The rendered form.
    type Output;

    /// Renders one record.
    fn display(&self, record: &LogRecord) -> Self::Output;
}

/// Plain-text rendering: `[module.category][LEVEL] text`.
///
/// Typed payloads are decoded into a one-line summary. A payload that
/// fails to decode under its declared hint falls back to its raw bytes as
/// text, so rendering itself never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDisplay;

impl TextDisplay {
    /// Creates a text display.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn text_for(record: &LogRecord) -> String {
        match message::decode(&record.message, record.hint) {
            Ok(DecodedMessage::Text(text)) => text,
            Ok(DecodedMessage::Request(request)) => {
                let url = request
                    .url
                    .as_ref()
                    .map_or_else(|| "<no url>".to_owned(), ToString::to_string);
                format!("{} {url}", request.method)
            }
            Ok(DecodedMessage::Response(response)) => {
                let url = response
                    .url
                    .as_ref()
                    .map_or_else(|| "<no url>".to_owned(), ToString::to_string);
                match response.status_code {
                    Some(status) => format!("{status} {url}"),
                    None => url,
                }
            }
            Err(_) => String::from_utf8_lossy(&record.message).into_owned(),
        }
    }
}

impl LogDisplay for TextDisplay {
    type Output = String;

    fn display(&self, record: &LogRecord) -> String {
        format!(
            "[{}.{}][{}] {}",
            record.module,
            record.category,
            level_label(record.level),
            Self::text_for(record)
        )
    }
}

const fn level_label(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "INFO",
        LogLevel::Error => "ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{RequestMessage, ResponseMessage, encode};
    use crate::types::LogHint;
    use std::collections::BTreeMap;
    use url::Url;

    fn text_record(level: LogLevel, text: &str) -> LogRecord {
        LogRecord::new(
            level,
            "server",
            "http",
            text.as_bytes().to_vec(),
            LogHint::Text,
        )
    }

    #[test]
    fn renders_text_records() {
        let display = TextDisplay::new();
        assert_eq!(
            display.display(&text_record(LogLevel::Info, "listening on 8080")),
            "[server.http][INFO] listening on 8080"
        );
        assert_eq!(
            display.display(&text_record(LogLevel::Error, "bind failed")),
            "[server.http][ERROR] bind failed"
        );
    }

    #[test]
    fn renders_request_summaries() {
        let url = Url::parse("https://example.com/items").expect("valid url");
        let payload = encode(&RequestMessage::new(url)).expect("encode");
        let record = LogRecord::new(LogLevel::Info, "client", "net", payload, LogHint::Request);

        let rendered = TextDisplay::new().display(&record);
        assert_eq!(rendered, "[client.net][INFO] GET https://example.com/items");
    }

    #[test]
    fn renders_response_summaries() {
        let url = Url::parse("https://example.com/items").expect("valid url");
        let message =
            ResponseMessage::from_parts(Some(url), Some(503), BTreeMap::new(), None);
        let payload = encode(&message).expect("encode");
        let record = LogRecord::new(LogLevel::Error, "client", "net", payload, LogHint::Response);

        let rendered = TextDisplay::new().display(&record);
        assert_eq!(rendered, "[client.net][ERROR] 503 https://example.com/items");
    }

    #[test]
    fn undecodable_payload_falls_back_to_raw_text() {
        let record = LogRecord::new(
            LogLevel::Info,
            "client",
            "net",
            b"not a request payload".to_vec(),
            LogHint::Request,
        );

        let rendered = TextDisplay::new().display(&record);
        assert_eq!(rendered, "[client.net][INFO] not a request payload");
    }
}
