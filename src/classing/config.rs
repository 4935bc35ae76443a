//! ClassificationList configuration

/// Construction-time options of a `ClassificationList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Build the main (id) index at construction.
    pub build_main_index: bool,
    /// Emit structured log lines for index lifecycle events.
    pub log_events: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            build_main_index: true,
            log_events: false, // No I/O unless asked for
        }
    }
}

impl ListConfig {
    /// Config for `create(list, build_main_index)`.
    pub fn main_index(build_main_index: bool) -> Self {
        Self {
            build_main_index,
            ..Self::default()
        }
    }

    /// Config that skips the main index build at construction.
    pub fn without_main_index() -> Self {
        Self::main_index(false)
    }

    /// Enable event logging.
    pub fn with_logging(mut self) -> Self {
        self.log_events = true;
        self
    }
}
