//! The slice of a document the controller touches.
//!
//! The browser build implements these over `web-sys`; tests use an in-memory
//! page. Handles are cheap clones referring to the same underlying node.

use std::time::Duration;

use crate::controller::ControllerError;
use crate::record::CommentRecord;

pub trait Element: Clone + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// A text-bearing form field (`input[type=text]` or `textarea`).
pub trait Field {
    type Container: Element;

    /// value of the `name` attribute, empty when absent
    fn name(&self) -> String;
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    /// the enclosing input group
    fn container(&self) -> Option<Self::Container>;
}

pub trait Page {
    type Element: Element;
    type Field: Field<Container = Self::Element>;

    /// Text-bearing fields of the comment form, in document order.
    fn fields(&self) -> Result<Vec<Self::Field>, ControllerError>;
    fn error_banner(&self) -> Result<Self::Element, ControllerError>;
    fn success_banner(&self) -> Result<Self::Element, ControllerError>;
    /// Inserts a fresh comment block right after the comments heading and
    /// returns the inserted block.
    fn insert_comment(&self, record: &CommentRecord) -> Result<Self::Element, ControllerError>;
}

/// Fire-and-forget delayed callbacks. Scheduled tasks are never cancelled.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
