//! Structured JSON logger
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, no buffering
//! - Silent unless enabled

use std::fmt;
use std::io::{self, Write};

use serde_json::Value;

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Unusual but harmless calls
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Event logger owned by one list.
///
/// Warnings and errors go to stderr, the rest to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    enabled: bool,
}

impl Logger {
    /// Creates a logger, silent when `enabled` is false
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns true if events are written
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Log an event with fields
    pub fn event(&self, event: Event, fields: &[(&str, &str)]) {
        if !self.enabled {
            return;
        }
        let severity = event.severity();
        if severity >= Severity::Warn {
            write_line(&mut io::stderr(), severity, event.as_str(), fields);
        } else {
            write_line(&mut io::stdout(), severity, event.as_str(), fields);
        }
    }
}

/// Render one log line.
pub fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut line = String::with_capacity(128);
    line.push_str("{\"event\":");
    line.push_str(&quote(event));
    line.push_str(",\"severity\":");
    line.push_str(&quote(severity.as_str()));

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(key, _)| *key);
    for (key, value) in sorted {
        line.push(',');
        line.push_str(&quote(key));
        line.push(':');
        line.push_str(&quote(value));
    }

    line.push_str("}\n");
    line
}

fn quote(s: &str) -> String {
    Value::from(s).to_string()
}

fn write_line<W: Write>(writer: &mut W, severity: Severity, event: &str, fields: &[(&str, &str)]) {
    let line = format_line(severity, event, fields);
    // Logging never fails the caller
    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_line_is_json() {
        let line = format_line(Severity::Info, "MAIN_INDEX_BUILT", &[("entries", "3")]);

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "MAIN_INDEX_BUILT");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["entries"], "3");
    }

    #[test]
    fn test_fields_sorted() {
        let a = format_line(Severity::Info, "E", &[("zebra", "1"), ("apple", "2")]);
        let b = format_line(Severity::Info, "E", &[("apple", "2"), ("zebra", "1")]);
        assert_eq!(a, b);
        assert!(a.find("apple").unwrap() < a.find("zebra").unwrap());
        assert!(a.find("\"event\"").unwrap() < a.find("\"severity\"").unwrap());
    }

    #[test]
    fn test_escaping_and_one_line() {
        let line = format_line(Severity::Warn, "E", &[("name", "a \"b\"\nc")]);

        assert_eq!(line.matches('\n').count(), 1);
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["name"], "a \"b\"\nc");
    }

    #[test]
    fn test_disabled_logger_is_silent() {
        let logger = Logger::default();
        assert!(!logger.is_enabled());
        // Must not panic or write
        logger.event(Event::ClassificationRegistered, &[("name", "x")]);
    }
}
