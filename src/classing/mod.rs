//! Classing subsystem
//!
//! A `ClassificationList` wraps an ordered list and keeps derived,
//! in-memory lookup indexes over it.
//!
//! # Design Principles
//!
//! - Derived state: indexes mirror the list, never the source of truth
//! - In-memory only: no persistence
//! - Caller driven: every mutation is a direct, synchronous call
//!
//! # Invariants
//!
//! - The main index maps an id to the most recently added element with it
//! - Exclusive classifications keep the last element assigned to a label
//! - Grouping classifications keep every element assigned to a label, in order
//! - `push` updates every index; existing elements reach a newly
//!   registered classification only through a re-scan
//!
//! # Concurrency
//!
//! A list is a single-writer structure. Mutations take `&mut self`, so
//! sharing one across threads requires the caller to serialize access,
//! e.g. behind a `Mutex`. Mapping functions must be `Send + Sync`.

mod classification;
mod config;
mod element;
mod errors;
mod labels;
mod list;

pub use classification::{ClassEntry, ClassMembers, ClassMode, Classification, MappingFn, Position};
pub use config::ListConfig;
pub use element::{Element, ID_FIELD};
pub use errors::{ClassingError, ClassingErrorCode, ClassingResult, Severity};
pub use labels::{json_field_labels, Labels};
pub use list::ClassificationList;
