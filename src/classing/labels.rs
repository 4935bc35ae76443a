//! Labels computed by a mapping function
//!
//! A mapping function answers with no label, one label, or an ordered
//! list of labels. An element is filed under every label it answers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of applying a mapping function to an element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Labels {
    /// The element is not filed in this classification
    #[default]
    Absent,
    /// A single label. An empty label counts as absent.
    One(String),
    /// Several labels, in order. Used verbatim, duplicates included.
    Many(Vec<String>),
}

impl Labels {
    /// Labels the element is actually assigned to.
    pub fn assignable(&self) -> &[String] {
        match self {
            Labels::Absent => &[],
            Labels::One(label) if label.is_empty() => &[],
            Labels::One(label) => std::slice::from_ref(label),
            Labels::Many(labels) => labels,
        }
    }

    /// Returns true if no label will be assigned
    pub fn is_absent(&self) -> bool {
        self.assignable().is_empty()
    }

    /// Create labels from a JSON value.
    ///
    /// Strings and numbers give one label, arrays give one label per
    /// string or number item. Everything else is absent.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => Labels::Many(items.iter().filter_map(json_label).collect()),
            other => json_label(other).map_or(Labels::Absent, Labels::One),
        }
    }
}

fn json_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl From<&str> for Labels {
    fn from(label: &str) -> Self {
        Labels::One(label.to_string())
    }
}

impl From<String> for Labels {
    fn from(label: String) -> Self {
        Labels::One(label)
    }
}

impl From<&String> for Labels {
    fn from(label: &String) -> Self {
        Labels::One(label.clone())
    }
}

impl<T: Into<Labels>> From<Option<T>> for Labels {
    fn from(labels: Option<T>) -> Self {
        labels.map_or(Labels::Absent, Into::into)
    }
}

impl<T: Into<String>> From<Vec<T>> for Labels {
    fn from(labels: Vec<T>) -> Self {
        Labels::Many(labels.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for Labels {
    fn from(labels: [T; N]) -> Self {
        Labels::Many(labels.into_iter().map(Into::into).collect())
    }
}

/// Mapping function for JSON elements that classifies by a member's value.
pub fn json_field_labels(
    field: impl Into<String>,
) -> impl Fn(&Value) -> Labels + Send + Sync + 'static {
    let field = field.into();
    move |element: &Value| element.get(&field).map_or(Labels::Absent, Labels::from_json)
}
