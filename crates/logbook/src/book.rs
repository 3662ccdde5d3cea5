//! The log book orchestrator.
//!
//! A [`LogBook`] owns exactly one persistence backend for its lifetime,
//! mints scoped [`Logger`]s against it, and exposes bulk read and export.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;

use crate::error::{LogError, Result};
use crate::export;
use crate::logger::Logger;
use crate::store::{BoundedStore, BoundedStoreConfig, ReadOnlyStore};
use crate::traits::{LogPersistence, LogWriter};
use crate::types::LogRecord;

/// Owner of one persistence backend.
///
/// A book created with [`LogBook::new`] records into a bounded live
/// store. One created from a fixed sequence ([`LogBook::from_records`] or
/// [`LogBook::from_export_file`]) is a viewer: it is backed by a
/// read-only snapshot and silently ignores writes.
pub struct LogBook {
    persistence: Arc<dyn LogPersistence>,
    writer: Arc<dyn LogWriter>,
}

impl LogBook {
    /// Creates a book over a bounded live store with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_persistence(BoundedStore::new())
    }

    /// Creates a book over a bounded live store with explicit limits.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] if the limits are rejected.
    pub fn with_config(config: BoundedStoreConfig) -> Result<Self> {
        Ok(Self::with_persistence(BoundedStore::with_config(config)?))
    }

    /// Creates a book over an arbitrary persistence backend.
    #[must_use]
    pub fn with_persistence<P: LogPersistence + 'static>(persistence: P) -> Self {
        let backend = Arc::new(persistence);
        Self {
            persistence: backend.clone(),
            writer: backend,
        }
    }

    /// Creates a viewer book over a fixed sequence of records.
    ///
    /// Writes through loggers minted from this book are ignored.
    #[must_use]
    pub fn from_records(records: Vec<LogRecord>) -> Self {
        Self::with_persistence(ReadOnlyStore::new(records))
    }

    /// Creates a viewer book from a previously exported log file.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the file cannot be read and
    /// [`LogError::MalformedExport`] if it does not parse as records.
    pub async fn from_export_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = tokio::task::spawn_blocking(move || export::read_export(&path))
            .await
            .map_err(|err| LogError::Export(err.to_string()))??;
        Ok(Self::from_records(records))
    }

    /// Mints a logger bound to this book's backend.
    ///
    /// Loggers are stateless and unregistered; mint as many as needed.
    #[must_use]
    pub fn make_logger(
        &self,
        category: impl Into<String>,
        module: impl Into<String>,
    ) -> Logger {
        Logger::new(Arc::clone(&self.writer), category, module)
    }

    /// Returns the current record sequence in arrival order.
    ///
    /// The result is a snapshot by value; it is not filtered, sorted, or
    /// truncated.
    pub async fn logs(&self) -> Vec<LogRecord> {
        self.persistence.read().await
    }

    /// Exports the current log snapshot to a uniquely named JSON file in
    /// the OS temporary directory and returns its path.
    ///
    /// The snapshot is taken before any file work begins, so writes
    /// landing during the export cannot interleave with the serialized
    /// output. A failed export never leaves a partial file at the
    /// returned path.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if writing fails, [`LogError::Encode`] if
    /// serialization fails, or [`LogError::Export`] if the write task
    /// itself dies.
    pub async fn export_to_file(&self) -> Result<PathBuf> {
        let records = self.logs().await;
        let path = std::env::temp_dir().join(export::export_file_name(Utc::now()));

        let target = path.clone();
        tokio::task::spawn_blocking(move || export::write_export(&target, &records))
            .await
            .map_err(|err| LogError::Export(err.to_string()))??;

        tracing::debug!(path = %path.display(), "exported log book");
        Ok(path)
    }
}

impl Default for LogBook {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LogBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogBook").finish_non_exhaustive()
    }
}
