//! Metrics registry of a ClassificationList
//!
//! - Counters only
//! - Monotonic increase
//! - Lookups count through `&self`, hence atomics

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Elements appended through push
    elements_pushed: AtomicU64,
    /// Full main index builds
    main_index_builds: AtomicU64,
    /// Full re-scans of a classification
    rescans: AtomicU64,
    /// Elements passed through a mapping function
    elements_classified: AtomicU64,
    /// Element-to-label assignments
    label_assignments: AtomicU64,
    /// Lookups that found something
    lookup_hits: AtomicU64,
    /// Lookups that found nothing
    lookup_misses: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment elements pushed
    pub fn increment_pushes(&self) {
        self.elements_pushed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment main index builds
    pub fn increment_main_index_builds(&self) {
        self.main_index_builds.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment re-scans
    pub fn increment_rescans(&self) {
        self.rescans.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one mapping function call and the assignments it produced
    pub fn record_classified(&self, assignments: usize) {
        self.elements_classified.fetch_add(1, Ordering::Relaxed);
        self.label_assignments
            .fetch_add(assignments as u64, Ordering::Relaxed);
    }

    /// Record a lookup outcome
    pub fn record_lookup(&self, hit: bool) {
        if hit {
            self.lookup_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            elements_pushed: self.elements_pushed.load(Ordering::Relaxed),
            main_index_builds: self.main_index_builds.load(Ordering::Relaxed),
            rescans: self.rescans.load(Ordering::Relaxed),
            elements_classified: self.elements_classified.load(Ordering::Relaxed),
            label_assignments: self.label_assignments.load(Ordering::Relaxed),
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
        }
    }

    /// Current snapshot as a JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub elements_pushed: u64,
    pub main_index_builds: u64,
    pub rescans: u64,
    pub elements_classified: u64,
    pub label_assignments: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,
}
