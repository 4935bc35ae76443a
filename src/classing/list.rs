//! ClassificationList
//!
//! An ordered list plus indexes derived from it:
//!
//! - the main index, element id -> element (last write wins)
//! - any number of named custom classifications, label -> element(s)
//!
//! # API
//!
//! - `create(list, build_main_index)` - Wrap a list, optionally index ids
//! - `init_main_classing()` - Rebuild the main index
//! - `add_custom_classification(name, mapping, mode, init)` - Register a classification
//! - `init_custom_classification(name)` - Re-scan the list into one classification
//! - `push(element)` - Append and update every index
//!
//! Indexes store list positions. Nothing is ever removed from the list
//! or from an index.

use std::collections::HashMap;

use super::classification::{ClassMembers, ClassMode, Classification, MappingFn, Position};
use super::config::ListConfig;
use super::element::{present_id, Element};
use super::errors::{ClassingError, ClassingResult};
use super::labels::Labels;
use crate::observability::{Event, Logger, MetricsRegistry};

/// An ordered list with a main id index and named classifications.
pub struct ClassificationList<E> {
    /// Backing list, insertion ordered
    list: Vec<E>,

    /// Main index (id -> position)
    main_index: HashMap<String, Position>,

    /// Classifications in registration order
    classifications: Vec<Classification<E>>,

    /// Classification name -> slot in `classifications`
    slots: HashMap<String, usize>,

    logger: Logger,
    metrics: MetricsRegistry,
}

impl<E: Element> ClassificationList<E> {
    /// Wrap `list`, building the main index when `build_main_index` is set.
    pub fn create(list: Vec<E>, build_main_index: bool) -> Self {
        Self::with_config(list, ListConfig::main_index(build_main_index))
    }

    /// Wrap `list` and build the main index.
    pub fn new(list: Vec<E>) -> Self {
        Self::with_config(list, ListConfig::default())
    }

    /// Wrap `list` with explicit configuration.
    pub fn with_config(list: Vec<E>, config: ListConfig) -> Self {
        let mut this = Self {
            list,
            main_index: HashMap::new(),
            classifications: Vec::new(),
            slots: HashMap::new(),
            logger: Logger::new(config.log_events),
            metrics: MetricsRegistry::new(),
        };

        if config.build_main_index {
            this.init_main_classing();
        }

        this
    }

    /// The backing list
    pub fn list(&self) -> &[E] {
        &self.list
    }

    /// Give the backing list back, dropping every index
    pub fn into_list(self) -> Vec<E> {
        self.list
    }

    /// Number of elements in the list
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of ids in the main index
    pub fn main_index_len(&self) -> usize {
        self.main_index.len()
    }

    /// Counters of this list
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Rebuild the main index from the whole list.
    ///
    /// Only the first element is inspected: if it has an id, the index is
    /// cleared and every element with an id is inserted in list order.
    /// Otherwise the index is left as it was.
    pub fn init_main_classing(&mut self) -> &mut Self {
        if self.list.first().and_then(present_id).is_none() {
            let elements = self.list.len().to_string();
            self.logger
                .event(Event::MainIndexSkipped, &[("elements", elements.as_str())]);
            return self;
        }

        self.main_index.clear();
        for (position, element) in self.list.iter().enumerate() {
            if let Some(id) = present_id(element) {
                self.main_index.insert(id.to_string(), position);
            }
        }

        self.metrics.increment_main_index_builds();
        let entries = self.main_index.len().to_string();
        self.logger
            .event(Event::MainIndexBuilt, &[("entries", entries.as_str())]);
        self
    }

    /// Register a classification under `name`.
    ///
    /// An existing classification with that name is replaced and its
    /// classes are dropped. Elements already in the list are classified
    /// only if `init` is set (or on a later re-scan); pushed elements
    /// are always classified.
    pub fn add_custom_classification<F, L>(
        &mut self,
        name: &str,
        mapping: F,
        mode: ClassMode,
        init: bool,
    ) -> &mut Self
    where
        F: Fn(&E) -> L + Send + Sync + 'static,
        L: Into<Labels>,
    {
        let boxed: MappingFn<E> =
            Box::new(move |element: &E| -> Labels { mapping(element).into() });
        let classification = Classification::new(name, boxed, mode);

        match self.slots.get(name) {
            Some(&slot) => {
                self.classifications[slot] = classification;
                self.logger.event(
                    Event::ClassificationReplaced,
                    &[("name", name), ("mode", mode.as_str())],
                );
            }
            None => {
                self.slots.insert(name.to_string(), self.classifications.len());
                self.classifications.push(classification);
                self.logger.event(
                    Event::ClassificationRegistered,
                    &[("name", name), ("mode", mode.as_str())],
                );
            }
        }

        if init {
            self.init_custom_classification(name);
        }

        self
    }

    /// Re-scan the whole list into classification `name`.
    ///
    /// Classes are not cleared first: elements already filed are filed
    /// again. Does nothing if `name` is not registered.
    pub fn init_custom_classification(&mut self, name: &str) -> &mut Self {
        match self.slots.get(name) {
            Some(&slot) => self.rescan_slot(slot),
            None => self.logger.event(Event::ClassificationUnknown, &[("name", name)]),
        }
        self
    }

    /// Like `init_custom_classification`, failing on an unknown name.
    pub fn try_init_custom_classification(&mut self, name: &str) -> ClassingResult<&mut Self> {
        let slot = self.slot_of(name)?;
        self.rescan_slot(slot);
        Ok(self)
    }

    /// Re-scan the whole list into every registered classification.
    pub fn init_all_custom_classifications(&mut self) -> &mut Self {
        for slot in 0..self.classifications.len() {
            self.rescan_slot(slot);
        }
        self
    }

    /// Element with id `id`
    pub fn main_cls_get(&self, id: &str) -> Option<&E> {
        let element = self.main_index.get(id).map(|&position| &self.list[position]);
        self.metrics.record_lookup(element.is_some());
        element
    }

    /// Element(s) filed under `label` in classification `name`
    pub fn custom_cls_get(&self, name: &str, label: &str) -> Option<ClassMembers<'_, E>> {
        let members = self
            .get_custom_classification(name)
            .and_then(|classification| classification.entry(label))
            .map(|entry| entry.resolve(&self.list));
        self.metrics.record_lookup(members.is_some());
        members
    }

    /// Classification registered under `name`
    pub fn get_custom_classification(&self, name: &str) -> Option<&Classification<E>> {
        self.slots.get(name).map(|&slot| &self.classifications[slot])
    }

    /// Like `get_custom_classification`, failing on an unknown name.
    pub fn require_custom_classification(&self, name: &str) -> ClassingResult<&Classification<E>> {
        let slot = self.slot_of(name)?;
        Ok(&self.classifications[slot])
    }

    /// Returns true if a classification is registered under `name`
    pub fn has_custom_classification(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Names of registered classifications, in registration order
    pub fn classification_names(&self) -> Vec<&str> {
        self.classifications.iter().map(Classification::name).collect()
    }

    /// Labels of classification `name` that hold at least one element.
    ///
    /// Labels come back sorted, not in first-assignment order. Exclusive
    /// labels holding a null element are left out.
    pub fn get_custom_classification_classes_names(&self, name: &str) -> Option<Vec<String>> {
        self.get_custom_classification(name)
            .map(|classification| classification.class_names(&self.list))
    }

    /// Append `element` and update the main index and every classification.
    pub fn push(&mut self, element: E) -> &mut Self {
        let position = self.list.len();
        self.list.push(element);
        self.metrics.increment_pushes();

        if let Some(id) = present_id(&self.list[position]) {
            self.main_index.insert(id.to_string(), position);
        }

        for slot in 0..self.classifications.len() {
            self.push_to_custom_class(slot, position);
        }

        self
    }

    fn slot_of(&self, name: &str) -> ClassingResult<usize> {
        self.slots
            .get(name)
            .copied()
            .ok_or_else(|| ClassingError::unknown_classification(name))
    }

    fn rescan_slot(&mut self, slot: usize) {
        for position in 0..self.list.len() {
            self.push_to_custom_class(slot, position);
        }

        self.metrics.increment_rescans();
        let classification = &self.classifications[slot];
        let labels = classification.label_count().to_string();
        self.logger.event(
            Event::ClassificationRescanned,
            &[("labels", labels.as_str()), ("name", classification.name())],
        );
    }

    /// File the element at `position` into the classification at `slot`.
    ///
    /// Unchecked: panics if `slot` or `position` is out of range. Callers
    /// resolve the classification name before getting here.
    fn push_to_custom_class(&mut self, slot: usize, position: Position) {
        let assigned = self.classifications[slot].assign(&self.list[position], position);
        self.metrics.record_classified(assigned);
    }
}

impl<E: Element> From<Vec<E>> for ClassificationList<E> {
    fn from(list: Vec<E>) -> Self {
        Self::new(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn docs(ids: &[&str]) -> Vec<Value> {
        ids.iter().map(|id| json!({ "id": id })).collect()
    }

    fn parity(doc: &Value) -> &'static str {
        if doc["id"] == "a" {
            "odd"
        } else {
            "even"
        }
    }

    #[test]
    fn test_main_index_built_on_create() {
        let list = ClassificationList::create(docs(&["a", "b"]), true);

        assert_eq!(list.main_cls_get("a"), Some(&json!({"id": "a"})));
        assert_eq!(list.main_cls_get("b"), Some(&json!({"id": "b"})));
        assert_eq!(list.main_cls_get("c"), None);
        assert_eq!(list.main_index_len(), 2);
    }

    #[test]
    fn test_main_index_disabled() {
        let list = ClassificationList::create(docs(&["a"]), false);
        assert_eq!(list.main_cls_get("a"), None);
    }

    #[test]
    fn test_main_index_empty_list() {
        let list: ClassificationList<Value> = ClassificationList::new(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.main_index_len(), 0);
    }

    #[test]
    fn test_main_index_duplicate_last_wins() {
        let list = ClassificationList::new(vec![
            json!({"id": "a", "v": 1}),
            json!({"id": "a", "v": 2}),
        ]);

        assert_eq!(list.main_cls_get("a").unwrap()["v"], 2);
    }

    #[test]
    fn test_main_index_checks_first_element_only() {
        // First element has no id: nothing is indexed, even later ids
        let list = ClassificationList::new(vec![json!({"name": "x"}), json!({"id": "b"})]);
        assert_eq!(list.main_cls_get("b"), None);

        // First element has an id: later elements without one are skipped
        let list = ClassificationList::new(vec![json!({"id": "a"}), json!({"name": "x"})]);
        assert_eq!(list.main_index_len(), 1);
    }

    #[test]
    fn test_main_index_skip_keeps_previous() {
        let mut list = ClassificationList::new(vec![json!({"name": "x"})]);
        list.push(json!({"id": "b"}));
        assert!(list.main_cls_get("b").is_some());

        // Rebuild is a no-op because the first element has no id
        list.init_main_classing();
        assert!(list.main_cls_get("b").is_some());
        assert_eq!(list.metrics().snapshot().main_index_builds, 0);
    }

    #[test]
    fn test_grouping_rescan() {
        let mut list = ClassificationList::new(docs(&["a", "b"]));
        list.add_custom_classification("parity", parity, ClassMode::Grouping, true);

        assert_eq!(
            list.custom_cls_get("parity", "odd"),
            Some(ClassMembers::Many(vec![&json!({"id": "a"})]))
        );
        assert_eq!(
            list.custom_cls_get("parity", "even"),
            Some(ClassMembers::Many(vec![&json!({"id": "b"})]))
        );
    }

    #[test]
    fn test_exclusive_single_element() {
        let mut list = ClassificationList::new(docs(&["a", "b"]));
        list.add_custom_classification(
            "by_id",
            |doc: &Value| doc["id"].as_str().map(str::to_string),
            ClassMode::from_mono(true),
            true,
        );

        assert_eq!(
            list.custom_cls_get("by_id", "a"),
            Some(ClassMembers::Single(&json!({"id": "a"})))
        );
    }

    #[test]
    fn test_registration_without_init_only_classifies_pushes() {
        let mut list = ClassificationList::new(docs(&["a"]));
        list.add_custom_classification("parity", parity, ClassMode::Grouping, false);

        assert_eq!(list.custom_cls_get("parity", "odd"), None);

        list.push(json!({"id": "c"}));
        assert_eq!(list.custom_cls_get("parity", "even").unwrap().len(), 1);
        assert_eq!(list.custom_cls_get("parity", "odd"), None);

        list.init_custom_classification("parity");
        assert_eq!(list.custom_cls_get("parity", "odd").unwrap().len(), 1);
    }

    #[test]
    fn test_reregistration_clears_classes() {
        let mut list = ClassificationList::new(docs(&["a", "b"]));
        list.add_custom_classification("cls", parity, ClassMode::Grouping, true);
        list.add_custom_classification("cls", |_: &Value| "all", ClassMode::Exclusive, false);

        assert_eq!(list.get_custom_classification_classes_names("cls"), Some(Vec::new()));
        assert!(list.get_custom_classification("cls").unwrap().is_mono());
        assert_eq!(list.classification_names(), vec!["cls"]);
    }

    #[test]
    fn test_unknown_classification() {
        let mut list = ClassificationList::new(docs(&["a"]));

        list.init_custom_classification("missing");
        assert_eq!(list.custom_cls_get("missing", "x"), None);
        assert!(list.get_custom_classification("missing").is_none());
        assert_eq!(list.get_custom_classification_classes_names("missing"), None);

        let err = list.try_init_custom_classification("missing").err().unwrap();
        assert_eq!(err.code().code(), "CLASSING_UNKNOWN_CLASSIFICATION");
        assert!(list.require_custom_classification("missing").is_err());
    }

    #[test]
    fn test_null_slots() {
        let mut list = ClassificationList::new(vec![None, Some(json!({"id": "b"}))]);
        assert_eq!(list.main_index_len(), 0);

        list.add_custom_classification(
            "present",
            |slot: &Option<Value>| slot.as_ref().map(|_| "yes"),
            ClassMode::Grouping,
            true,
        );
        assert_eq!(
            list.get_custom_classification_classes_names("present"),
            Some(vec!["yes".to_string()])
        );
        assert_eq!(list.custom_cls_get("present", "yes").unwrap().len(), 1);
    }

    #[test]
    fn test_metrics_counted() {
        let mut list = ClassificationList::new(docs(&["a", "b"]));
        list.add_custom_classification("parity", parity, ClassMode::Grouping, true);
        list.push(json!({"id": "c"}));
        list.main_cls_get("a");
        list.main_cls_get("zzz");

        let snapshot = list.metrics().snapshot();
        assert_eq!(snapshot.main_index_builds, 1);
        assert_eq!(snapshot.rescans, 1);
        assert_eq!(snapshot.elements_pushed, 1);
        assert_eq!(snapshot.elements_classified, 3);
        assert_eq!(snapshot.label_assignments, 3);
        assert_eq!(snapshot.lookup_hits, 1);
        assert_eq!(snapshot.lookup_misses, 1);
    }

    #[test]
    fn test_logging_enabled_runs() {
        let mut list =
            ClassificationList::with_config(docs(&["a"]), ListConfig::default().with_logging());
        list.add_custom_classification("parity", parity, ClassMode::Grouping, true)
            .add_custom_classification("parity", parity, ClassMode::Exclusive, false)
            .init_custom_classification("missing")
            .init_main_classing();

        assert!(list.has_custom_classification("parity"));
    }

    #[test]
    fn test_from_vec() {
        let list: ClassificationList<Value> = docs(&["a", "b"]).into();
        assert_eq!(list.len(), 2);
        assert!(list.main_cls_get("b").is_some());
    }
}
