//! Traits for log persistence backends.
//!
//! This module provides the two halves of the persistence contract,
//! [`LogWriter`] and [`LogReader`], and their union [`LogPersistence`].
//! Exactly two backends ship with the crate, the bounded in-memory store
//! and the read-only snapshot store (see [`crate::store`]), and
//! construction always picks one explicitly.

use async_trait::async_trait;

use crate::types::LogRecord;

/// Write half of a persistence backend.
///
/// Writes are infallible by contract: backends absorb records on a
/// best-effort basis and callers never observe a failure.
pub trait LogWriter: Send + Sync {
    /// Appends a record to the backend.
    fn write(&self, record: LogRecord);
}

/// Read half of a persistence backend.
///
/// Reading is asynchronous so that future I/O-backed backends can satisfy
/// the same contract without changing call sites.
#[async_trait]
pub trait LogReader: Send + Sync {
    /// Returns the stored records in arrival order.
    ///
    /// The returned sequence is a snapshot by value; writes that land
    /// after the read cannot mutate it.
    async fn read(&self) -> Vec<LogRecord>;
}

/// A full persistence backend: both halves of the contract.
pub trait LogPersistence: LogWriter + LogReader {}

impl<T: LogWriter + LogReader> LogPersistence for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LogHint, LogLevel};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// A minimal backend for exercising the trait seam.
    #[derive(Default)]
    struct RecordingStore {
        records: Mutex<Vec<LogRecord>>,
    }

    impl LogWriter for RecordingStore {
        fn write(&self, record: LogRecord) {
            self.records.lock().push(record);
        }
    }

    #[async_trait]
    impl LogReader for RecordingStore {
        async fn read(&self) -> Vec<LogRecord> {
            self.records.lock().clone()
        }
    }

    fn make_record(text: &str) -> LogRecord {
        LogRecord::new(
            LogLevel::Info,
            "app",
            "test",
            text.as_bytes().to_vec(),
            LogHint::Text,
        )
    }

    #[tokio::test]
    async fn write_then_read_through_trait_objects() {
        let store: Arc<dyn LogPersistence> = Arc::new(RecordingStore::default());

        store.write(make_record("first"));
        store.write(make_record("second"));

        let records = store.read().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, b"first");
        assert_eq!(records[1].message, b"second");
    }

    #[test]
    fn backends_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Arc<dyn LogPersistence>>();
        assert_send_sync::<Arc<dyn LogWriter>>();
    }
}
