//! Todo record and its shared handle.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Backing record for a todo: the description fixed at creation and the
/// completion flag.
///
/// `done` defaults to `false` when absent so that untyped input only needs
/// to prove it carries a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TodoRecord {
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) done: bool,
}

/// A single task with an immutable description and a completion flag.
///
/// `Todo` is a shared handle: cloning it clones the reference, not the
/// record. A caller-held handle and a handle stored inside a
/// [`TodoList`](super::TodoList) therefore observe the same state, and
/// marking a todo done through either is visible through both.
///
/// Equality is structural (same description, same flag). Use
/// [`Todo::ptr_eq`] to ask whether two handles refer to the same record.
///
/// # Examples
///
///     use checklist::Todo;
///
///     let todo = Todo::new("Buy milk");
///     let alias = todo.clone();
///     alias.mark_done();
///
///     assert!(todo.is_done());
///     assert_eq!(todo.to_string(), "[X] Buy milk");
#[derive(Debug, Clone)]
pub struct Todo {
    record: Rc<RefCell<TodoRecord>>,
}

impl Todo {
    /// Creates a new, not-yet-done todo.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self::from_record(TodoRecord {
            description: description.into(),
            done: false,
        })
    }

    /// Wraps an existing record in a fresh handle.
    pub(crate) fn from_record(record: TodoRecord) -> Self {
        Self {
            record: Rc::new(RefCell::new(record)),
        }
    }

    /// Returns a copy of the description.
    ///
    /// The description never changes after creation; no setter exists.
    #[must_use]
    pub fn description(&self) -> String {
        self.record.borrow().description.clone()
    }

    /// Returns the current completion state.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.record.borrow().done
    }

    /// Marks the todo as done. Idempotent.
    pub fn mark_done(&self) {
        self.record.borrow_mut().done = true;
    }

    /// Marks the todo as not done. Idempotent.
    pub fn mark_undone(&self) {
        self.record.borrow_mut().done = false;
    }

    /// Returns `true` when both handles refer to the same record.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.record, &other.record)
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || *self.record.borrow() == *other.record.borrow()
    }
}

impl Eq for Todo {}

impl fmt::Display for Todo {
    /// Renders `[X] <description>` when done, `[ ] <description>` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record.borrow();
        let marker = if record.done { 'X' } else { ' ' };
        write!(f, "[{marker}] {}", record.description)
    }
}

impl Serialize for Todo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.record.borrow().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Todo {
    /// Deserialization always produces a fresh, unshared handle.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        TodoRecord::deserialize(deserializer).map(Self::from_record)
    }
}
