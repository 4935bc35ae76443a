//! classing - an ordered list with derived lookup indexes
//!
//! Elements are indexed by id (the main index) and by any number of
//! named, user-defined classifications that group elements by computed
//! labels.

pub mod classing;
pub mod observability;

pub use classing::{
    json_field_labels, ClassMembers, ClassMode, ClassificationList, Element, Labels, ListConfig,
};
