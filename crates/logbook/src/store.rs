//! In-memory persistence backends.
//!
//! This module provides:
//! - [`BoundedStoreConfig`] — Retention limits for the live store
//! - [`BoundedStore`] — Bounded in-memory storage with batch eviction
//! - [`ReadOnlyStore`] — Immutable storage over a fixed snapshot

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{LogError, Result};
use crate::traits::{LogReader, LogWriter};
use crate::types::LogRecord;

/// Retention configuration for [`BoundedStore`].
#[derive(Debug, Clone)]
pub struct BoundedStoreConfig {
    /// Maximum number of records held before a purge triggers.
    pub limit: usize,
    /// How many of the oldest records one purge drops.
    pub purge_count: usize,
}

impl Default for BoundedStoreConfig {
    fn default() -> Self {
        Self {
            limit: 5000,
            purge_count: 1000,
        }
    }
}

impl BoundedStoreConfig {
    /// Creates a config with the given limits.
    #[must_use]
    pub const fn new(limit: usize, purge_count: usize) -> Self {
        Self { limit, purge_count }
    }

    /// Validates the configured limits.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] if either value is zero or
    /// `purge_count` exceeds `limit`.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(LogError::InvalidConfig("limit must be positive".to_owned()));
        }
        if self.purge_count == 0 {
            return Err(LogError::InvalidConfig(
                "purge_count must be positive".to_owned(),
            ));
        }
        if self.purge_count > self.limit {
            return Err(LogError::InvalidConfig(format!(
                "purge_count {} exceeds limit {}",
                self.purge_count, self.limit
            )));
        }
        Ok(())
    }
}

/// Bounded in-memory log storage.
///
/// Records append in arrival order. Once the store grows past `limit`,
/// the oldest `purge_count` records are dropped as one batch, inside the
/// same critical section as the append, so no reader ever observes a
/// partially purged sequence.
pub struct BoundedStore {
    config: BoundedStoreConfig,
    records: RwLock<VecDeque<LogRecord>>,
}

impl BoundedStore {
    /// Creates a store with the default limits (5000 / 1000).
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: BoundedStoreConfig::default(),
            records: RwLock::new(VecDeque::new()),
        }
    }

    /// Creates a store with explicit limits.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] if the config fails validation.
    pub fn with_config(config: BoundedStoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            records: RwLock::new(VecDeque::new()),
        })
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Returns the retention configuration.
    #[must_use]
    pub const fn config(&self) -> &BoundedStoreConfig {
        &self.config
    }
}

impl Default for BoundedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for BoundedStore {
    fn write(&self, record: LogRecord) {
        let mut records = self.records.write();
        records.push_back(record);
        if records.len() > self.config.limit {
            records.drain(..self.config.purge_count);
            tracing::debug!(
                purged = self.config.purge_count,
                remaining = records.len(),
                "purged oldest log records"
            );
        }
    }
}

#[async_trait]
impl LogReader for BoundedStore {
    async fn read(&self) -> Vec<LogRecord> {
        self.records.read().iter().cloned().collect()
    }
}

/// Immutable storage over a fixed snapshot of records.
///
/// Gives a viewer log book (one built from imported records) the same
/// read/write interface as a live book: writes are accepted and ignored,
/// reads always return the original sequence.
pub struct ReadOnlyStore {
    records: Vec<LogRecord>,
}

impl ReadOnlyStore {
    /// Wraps a fixed sequence of records.
    #[must_use]
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LogWriter for ReadOnlyStore {
    fn write(&self, _record: LogRecord) {
        tracing::trace!("ignoring write to read-only log store");
    }
}

#[async_trait]
impl LogReader for ReadOnlyStore {
    async fn read(&self) -> Vec<LogRecord> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LogHint, LogLevel};
    use std::sync::Arc;

    fn make_record(text: &str) -> LogRecord {
        LogRecord::new(
            LogLevel::Info,
            "app",
            "store",
            text.as_bytes().to_vec(),
            LogHint::Text,
        )
    }

    fn texts(records: &[LogRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| String::from_utf8_lossy(&r.message).into_owned())
            .collect()
    }

    #[tokio::test]
    async fn read_preserves_arrival_order() {
        let store = BoundedStore::new();
        for i in 0..10 {
            store.write(make_record(&format!("message {i}")));
        }

        let records = store.read().await;
        assert_eq!(records.len(), 10);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.message, format!("message {i}").into_bytes());
        }
    }

    #[tokio::test]
    async fn crossing_the_limit_purges_a_batch() {
        let store =
            BoundedStore::with_config(BoundedStoreConfig::new(5, 2)).expect("valid config");

        for i in 1..=6 {
            store.write(make_record(&format!("m{i}")));
        }

        // The sixth write crossed the limit, dropping the oldest two as
        // one batch: limit + 1 - purge_count survive.
        let records = store.read().await;
        assert_eq!(records.len(), 4);
        assert_eq!(texts(&records), vec!["m3", "m4", "m5", "m6"]);
    }

    #[tokio::test]
    async fn purge_repeats_on_each_crossing() {
        let store =
            BoundedStore::with_config(BoundedStoreConfig::new(4, 3)).expect("valid config");

        for i in 1..=9 {
            store.write(make_record(&format!("m{i}")));
        }

        // Crossings at writes 5 and 8 each dropped 3.
        let records = store.read().await;
        assert_eq!(texts(&records), vec!["m7", "m8", "m9"]);
    }

    #[tokio::test]
    async fn read_returns_a_defensive_copy() {
        let store = BoundedStore::new();
        store.write(make_record("before"));

        let snapshot = store.read().await;
        store.write(make_record("after"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.read().await.len(), 2);
    }

    #[test]
    fn config_defaults() {
        let config = BoundedStoreConfig::default();
        assert_eq!(config.limit, 5000);
        assert_eq!(config.purge_count, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_limits() {
        assert!(matches!(
            BoundedStoreConfig::new(0, 1).validate(),
            Err(LogError::InvalidConfig(_))
        ));
        assert!(matches!(
            BoundedStoreConfig::new(10, 0).validate(),
            Err(LogError::InvalidConfig(_))
        ));
        assert!(matches!(
            BoundedStoreConfig::new(10, 11).validate(),
            Err(LogError::InvalidConfig(_))
        ));
        assert!(BoundedStoreConfig::new(10, 10).validate().is_ok());
    }

    #[test]
    fn store_rejects_invalid_config() {
        assert!(BoundedStore::with_config(BoundedStoreConfig::new(0, 0)).is_err());
    }

    #[tokio::test]
    async fn concurrent_writers_never_lose_records_below_limit() {
        let store = Arc::new(BoundedStore::new());

        let mut handles = Vec::new();
        for worker in 0..4 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    store.write(make_record(&format!("w{worker}-{i}")));
                }
            }));
        }
        for handle in handles {
            handle.join().expect("writer thread");
        }

        assert_eq!(store.read().await.len(), 200);
    }

    #[tokio::test]
    async fn read_only_store_ignores_writes() {
        let records = vec![make_record("a"), make_record("b"), make_record("c")];
        let store = ReadOnlyStore::new(records.clone());

        store.write(make_record("ignored"));
        store.write(make_record("also ignored"));

        assert_eq!(store.len(), 3);
        assert_eq!(store.read().await, records);
    }

    #[tokio::test]
    async fn read_only_store_reads_are_stable() {
        let store = ReadOnlyStore::new(vec![make_record("only")]);
        let first = store.read().await;
        let second = store.read().await;
        assert_eq!(first, second);
        assert!(!store.is_empty());
    }
}
