//! Observability for classing
//!
//! - Structured logging (JSON), off by default
//! - Counters for index maintenance and lookups
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on indexing
//! 3. No async or background threads

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{format_line, Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
