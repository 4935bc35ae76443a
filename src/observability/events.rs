//! Observable events of a ClassificationList
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Lifecycle events of the list and its indexes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Main index
    /// Main index rebuilt from the whole list
    MainIndexBuilt,
    /// Main index build skipped, first element carries no id
    MainIndexSkipped,

    // Custom classifications
    /// New classification registered
    ClassificationRegistered,
    /// Existing classification replaced, its classes dropped
    ClassificationReplaced,
    /// Full re-scan of a classification complete
    ClassificationRescanned,
    /// Re-scan requested for a name that is not registered
    ClassificationUnknown,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::MainIndexBuilt => "MAIN_INDEX_BUILT",
            Event::MainIndexSkipped => "MAIN_INDEX_SKIPPED",
            Event::ClassificationRegistered => "CLASSIFICATION_REGISTERED",
            Event::ClassificationReplaced => "CLASSIFICATION_REPLACED",
            Event::ClassificationRescanned => "CLASSIFICATION_RESCANNED",
            Event::ClassificationUnknown => "CLASSIFICATION_UNKNOWN",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ClassificationReplaced | Event::ClassificationUnknown => Severity::Warn,
            Event::MainIndexSkipped => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
