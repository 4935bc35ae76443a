//! Element identity
//!
//! Elements are opaque to the list. The only thing ever read from one is
//! its identifier, and only when it has one.

use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

/// Member name read from JSON objects as the identifier.
pub const ID_FIELD: &str = "id";

/// An item that can be stored in a `ClassificationList`.
pub trait Element {
    /// The identifying string of this element, if it carries one.
    ///
    /// An empty string counts as no identifier.
    fn element_id(&self) -> Option<&str> {
        None
    }

    /// Whether this element stands for a null slot.
    fn is_null(&self) -> bool {
        false
    }
}

/// Returns the identifier only when it is present and non-empty.
pub(crate) fn present_id<E: Element + ?Sized>(element: &E) -> Option<&str> {
    element.element_id().filter(|id| !id.is_empty())
}

impl Element for Value {
    fn element_id(&self) -> Option<&str> {
        self.get(ID_FIELD).and_then(Value::as_str)
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// `None` stands in for a null slot in the list.
impl<E: Element> Element for Option<E> {
    fn element_id(&self) -> Option<&str> {
        self.as_ref().and_then(Element::element_id)
    }

    fn is_null(&self) -> bool {
        self.as_ref().map_or(true, Element::is_null)
    }
}

impl<E: Element + ?Sized> Element for &E {
    fn element_id(&self) -> Option<&str> {
        (**self).element_id()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn element_id(&self) -> Option<&str> {
        (**self).element_id()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<E: Element + ?Sized> Element for Rc<E> {
    fn element_id(&self) -> Option<&str> {
        (**self).element_id()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<E: Element + ?Sized> Element for Arc<E> {
    fn element_id(&self) -> Option<&str> {
        (**self).element_id()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl Element for String {}
impl Element for i64 {}
impl Element for u64 {}
