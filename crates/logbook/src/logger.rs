//! Scoped log emission.
//!
//! A [`Logger`] is an immutable façade bound to a (module, category) pair
//! and a shared persistence writer. Logging never fails: an encode
//! problem degrades to a sentinel text record instead of surfacing.

use std::sync::Arc;

use crate::message::{self, LogMessage};
use crate::traits::LogWriter;
use crate::types::{LogHint, LogLevel, LogRecord};

/// Fallback payload recorded when a typed message cannot be encoded.
pub const ENCODE_FALLBACK: &str = "Couldn't encode the log message";

/// A scoped logger bound to a module and category.
///
/// Loggers are cheap, stateless beyond their three fields, and any number
/// of them may share one writer. Mint them freely via
/// [`LogBook::make_logger`](crate::LogBook::make_logger).
#[derive(Clone)]
pub struct Logger {
    module: String,
    category: String,
    writer: Arc<dyn LogWriter>,
}

impl Logger {
    /// Creates a logger writing to the given backend.
    #[must_use]
    pub fn new(
        writer: Arc<dyn LogWriter>,
        category: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            category: category.into(),
            writer,
        }
    }

    /// Returns the bound module name.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Returns the bound category name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Records a plain-text entry at the given level.
    pub fn log(&self, text: &str, level: LogLevel) {
        self.writer
            .write(self.record(level, text.as_bytes().to_vec(), LogHint::Text));
    }

    /// Records a typed message at the given level.
    ///
    /// If the message cannot be encoded, a sentinel text record is
    /// written in its place; exactly one record lands either way and the
    /// caller never observes a failure.
    pub fn log_message<M: LogMessage>(&self, message: &M, level: LogLevel) {
        let (payload, hint) = match message::encode(message) {
            Ok(payload) => (payload, message.hint()),
            Err(err) => {
                tracing::warn!(
                    module = %self.module,
                    category = %self.category,
                    error = %err,
                    "recording fallback text for unencodable log message"
                );
                (ENCODE_FALLBACK.as_bytes().to_vec(), LogHint::Text)
            }
        };
        self.writer.write(self.record(level, payload, hint));
    }

    /// Records a plain-text entry at info level.
    pub fn info(&self, text: &str) {
        self.log(text, LogLevel::Info);
    }

    /// Records a plain-text entry at error level.
    pub fn error(&self, text: &str) {
        self.log(text, LogLevel::Error);
    }

    /// Records a typed message at info level.
    pub fn info_message<M: LogMessage>(&self, message: &M) {
        self.log_message(message, LogLevel::Info);
    }

    /// Records a typed message at error level.
    pub fn error_message<M: LogMessage>(&self, message: &M) {
        self.log_message(message, LogLevel::Error);
    }

    fn record(&self, level: LogLevel, message: Vec<u8>, hint: LogHint) -> LogRecord {
        LogRecord::new(
            level,
            self.module.clone(),
            self.category.clone(),
            message,
            hint,
        )
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("module", &self.module)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}
