//! # logbook
//!
//! Embeddable structured logging with bounded in-memory retention and
//! portable export.
//!
//! This crate provides:
//!
//! - [`LogRecord`], [`LogLevel`], [`LogHint`] — The immutable unit of storage
//! - [`LogMessage`], [`RequestMessage`], [`ResponseMessage`] — Typed payloads
//! - [`Logger`] — A scoped, never-failing emission façade
//! - [`BoundedStore`] / [`ReadOnlyStore`] — The two persistence backends
//! - [`LogBook`] — The orchestrator owning one backend
//! - [`TextDisplay`] — Plain-text rendering with decode fallback
//!
//! ## Example
//!
//! ```rust
//! use logbook::{LogBook, LogDisplay, TextDisplay};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let book = LogBook::new();
//! let logger = book.make_logger("startup", "app");
//!
//! logger.info("ready");
//!
//! let display = TextDisplay::new();
//! for record in book.logs().await {
//!     println!("{}", display.display(&record));
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod book;
pub mod display;
pub mod error;
pub mod export;
pub mod logger;
pub mod message;
pub mod store;
pub mod traits;
pub mod types;

// Re-export main types
pub use book::LogBook;
pub use display::{LogDisplay, TextDisplay};
pub use error::{LogError, Result};
pub use logger::Logger;
pub use message::{
    DecodedMessage, LogMessage, RequestMessage, ResponseMessage, decode, encode, normalize_body,
};
pub use store::{BoundedStore, BoundedStoreConfig, ReadOnlyStore};
pub use traits::{LogPersistence, LogReader, LogWriter};
pub use types::{LogHint, LogLevel, LogRecord};
