//! Custom classifications
//!
//! A classification files list positions under labels computed by its
//! mapping function. Exclusive classifications keep one position per
//! label (last assignment wins), grouping classifications keep every
//! position in assignment order.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::element::Element;
use super::labels::Labels;

/// Position of an element in the backing list
pub type Position = usize;

/// Boxed mapping function of a classification
pub type MappingFn<E> = Box<dyn Fn(&E) -> Labels + Send + Sync>;

/// How a classification stores the elements filed under one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassMode {
    /// One element per label, later assignments overwrite earlier ones ("mono")
    Exclusive,
    /// Elements accumulate per label in the order they were assigned
    #[default]
    Grouping,
}

impl ClassMode {
    /// Mode from the `mono` flag
    pub fn from_mono(mono: bool) -> Self {
        if mono {
            ClassMode::Exclusive
        } else {
            ClassMode::Grouping
        }
    }

    /// Returns true for exclusive mode
    pub fn is_mono(&self) -> bool {
        matches!(self, ClassMode::Exclusive)
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassMode::Exclusive => "exclusive",
            ClassMode::Grouping => "grouping",
        }
    }
}

impl fmt::Display for ClassMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Positions stored under one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassEntry {
    /// Exclusive mode
    Single(Position),
    /// Grouping mode, in assignment order
    Many(Vec<Position>),
}

impl ClassEntry {
    /// Returns true if the entry holds no position
    pub fn is_empty(&self) -> bool {
        match self {
            ClassEntry::Single(_) => false,
            ClassEntry::Many(positions) => positions.is_empty(),
        }
    }

    /// Positions held by this entry
    pub fn positions(&self) -> &[Position] {
        match self {
            ClassEntry::Single(position) => std::slice::from_ref(position),
            ClassEntry::Many(positions) => positions,
        }
    }

    /// Resolve positions against the backing list.
    pub fn resolve<'a, E>(&self, list: &'a [E]) -> ClassMembers<'a, E> {
        match self {
            ClassEntry::Single(position) => ClassMembers::Single(&list[*position]),
            ClassEntry::Many(positions) => {
                ClassMembers::Many(positions.iter().map(|&p| &list[p]).collect())
            }
        }
    }
}

/// Elements filed under one label, borrowed from the list.
#[derive(Debug, PartialEq)]
pub enum ClassMembers<'a, E> {
    /// The element of an exclusive label
    Single(&'a E),
    /// The elements of a grouping label, in assignment order
    Many(Vec<&'a E>),
}

impl<'a, E> ClassMembers<'a, E> {
    /// The single element, if this is an exclusive label
    pub fn single(&self) -> Option<&'a E> {
        match self {
            ClassMembers::Single(element) => Some(*element),
            ClassMembers::Many(_) => None,
        }
    }

    /// Returns all members as a vector
    pub fn to_vec(&self) -> Vec<&'a E> {
        match self {
            ClassMembers::Single(element) => vec![*element],
            ClassMembers::Many(elements) => elements.clone(),
        }
    }

    /// Number of members
    pub fn len(&self) -> usize {
        match self {
            ClassMembers::Single(_) => 1,
            ClassMembers::Many(elements) => elements.len(),
        }
    }

    /// Returns true if there are no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named classification: mapping function, mode and classes.
pub struct Classification<E> {
    name: String,
    mapping: MappingFn<E>,
    mode: ClassMode,
    classes: BTreeMap<String, ClassEntry>,
}

impl<E> Classification<E> {
    /// Creates an empty classification
    pub fn new(name: impl Into<String>, mapping: MappingFn<E>, mode: ClassMode) -> Self {
        Self {
            name: name.into(),
            mapping,
            mode,
            classes: BTreeMap::new(),
        }
    }

    /// Classification name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage mode
    pub fn mode(&self) -> ClassMode {
        self.mode
    }

    /// Returns true for exclusive mode
    pub fn is_mono(&self) -> bool {
        self.mode.is_mono()
    }

    /// Label -> positions mapping
    pub fn classes(&self) -> &BTreeMap<String, ClassEntry> {
        &self.classes
    }

    /// Positions filed under `label`
    pub fn entry(&self, label: &str) -> Option<&ClassEntry> {
        self.classes.get(label)
    }

    /// Number of labels present
    pub fn label_count(&self) -> usize {
        self.classes.len()
    }

    /// Apply the mapping function to an element
    pub fn labels_of(&self, element: &E) -> Labels {
        (self.mapping)(element)
    }

    /// Labels that currently hold at least one element, sorted.
    ///
    /// An exclusive label whose element is null in `list` is left out.
    pub fn class_names(&self, list: &[E]) -> Vec<String>
    where
        E: Element,
    {
        self.classes
            .iter()
            .filter(|(_, entry)| match entry {
                ClassEntry::Single(position) => !list[*position].is_null(),
                ClassEntry::Many(positions) => !positions.is_empty(),
            })
            .map(|(label, _)| label.clone())
            .collect()
    }

    /// File `position` under every label the mapping gives `element`.
    ///
    /// Returns the number of label assignments made.
    pub(crate) fn assign(&mut self, element: &E, position: Position) -> usize {
        let labels = self.labels_of(element);
        let assigned = labels.assignable();
        for label in assigned {
            self.assign_label(label, position);
        }
        assigned.len()
    }

    fn assign_label(&mut self, label: &str, position: Position) {
        match self.mode {
            ClassMode::Exclusive => {
                self.classes
                    .insert(label.to_string(), ClassEntry::Single(position));
            }
            ClassMode::Grouping => match self.classes.get_mut(label) {
                Some(ClassEntry::Many(positions)) => positions.push(position),
                _ => {
                    self.classes
                        .insert(label.to_string(), ClassEntry::Many(vec![position]));
                }
            },
        }
    }
}

impl<E> fmt::Debug for Classification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classification")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("classes", &self.classes)
            .finish_non_exhaustive()
    }
}
