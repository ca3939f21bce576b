//! Ordered todo container: the core collection abstraction.

use super::TodoListError;
use super::item::{Todo, TodoRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice;

/// An insertion-ordered, mutable collection of [`Todo`] handles with a
/// title.
///
/// The list stores handles, not copies: adding a todo and then mutating it
/// through a caller-held clone is visible through the list. Structural
/// operations (`shift`, `pop`, `remove_at`) move handles out of the list
/// without touching the underlying records.
///
/// Every operation taking an explicit index applies the same validation:
/// the index must fall in `[0, len)`, otherwise the operation fails with
/// [`TodoListError::IndexOutOfRange`] and the list is left unmodified.
/// Edge accessors (`first`, `last`, `shift`, `pop`) instead return `None`
/// on an empty list; that asymmetry is part of the contract.
///
/// # Examples
///
///     use checklist::{Todo, TodoList};
///
///     let mut list = TodoList::new("Today's Todos");
///     list.add(Todo::new("Buy milk"));
///     list.add(Todo::new("Clean room"));
///
///     list.mark_done_at(1).expect("index 1 exists");
///     assert!(!list.is_done());
///     assert_eq!(list.len(), 2);
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    title: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Returns the list title.
    ///
    /// The title never changes after creation.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Appends a todo to the end of the list.
    ///
    /// The type system guarantees only todos cross this boundary; untyped
    /// input goes through [`Self::add_value`] instead.
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Validates an untyped value as a todo and appends it.
    ///
    /// The value must be an object carrying a string `description` and,
    /// optionally, a boolean `done` (defaulting to `false`). Returns the
    /// appended handle so the caller keeps shared access to the new record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::NotATodo`] when the value lacks the todo
    /// shape; the list is left unmodified.
    pub fn add_value(&mut self, value: serde_json::Value) -> Result<Todo, TodoListError> {
        let record: TodoRecord =
            serde_json::from_value(value).map_err(|err| TodoListError::NotATodo(err.to_string()))?;
        let todo = Todo::from_record(record);
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Returns the number of todos in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns `true` when the list holds no todos.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns a fresh vector of the list's handles, in order.
    ///
    /// The vector is detached from the list: pushing to or truncating it
    /// has no effect on the list. Mutating a record *through* one of the
    /// returned handles does, since the handles are shared.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Returns the first todo, or `None` when the list is empty.
    #[must_use]
    pub fn first(&self) -> Option<Todo> {
        self.todos.first().cloned()
    }

    /// Returns the last todo, or `None` when the list is empty.
    #[must_use]
    pub fn last(&self) -> Option<Todo> {
        self.todos.last().cloned()
    }

    /// Returns the todo at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::IndexOutOfRange`] when `index >= len`.
    pub fn item_at(&self, index: usize) -> Result<Todo, TodoListError> {
        self.handle_at(index).cloned()
    }

    /// Removes and returns the first todo, shifting the remainder left.
    ///
    /// Returns `None` when the list is empty.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            None
        } else {
            Some(self.todos.remove(0))
        }
    }

    /// Removes and returns the last todo.
    ///
    /// Returns `None` when the list is empty.
    pub fn pop(&mut self) -> Option<Todo> {
        self.todos.pop()
    }

    /// Removes and returns the todo at `index`, shifting the remainder
    /// left.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::IndexOutOfRange`] when `index >= len`; the
    /// list is left unmodified.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo, TodoListError> {
        // Validate before mutating so a rejected call leaves the list
        // untouched.
        self.handle_at(index)?;
        Ok(self.todos.remove(index))
    }

    /// Returns `true` when every todo is done; vacuously true when empty.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    /// Marks the todo at `index` as done.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::IndexOutOfRange`] when `index >= len`.
    pub fn mark_done_at(&mut self, index: usize) -> Result<(), TodoListError> {
        self.handle_at(index)?.mark_done();
        Ok(())
    }

    /// Marks the todo at `index` as not done.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::IndexOutOfRange`] when `index >= len`.
    pub fn mark_undone_at(&mut self, index: usize) -> Result<(), TodoListError> {
        self.handle_at(index)?.mark_undone();
        Ok(())
    }

    /// Marks every todo as done.
    pub fn mark_all_done(&mut self) {
        for todo in &self.todos {
            todo.mark_done();
        }
    }

    /// Marks every todo as not done.
    pub fn mark_all_undone(&mut self) {
        for todo in &self.todos {
            todo.mark_undone();
        }
    }

    /// Marks the first todo with the given description as done.
    ///
    /// Returns `true` when a match existed.
    pub fn mark_done(&mut self, description: &str) -> bool {
        self.find_by_description(description)
            .is_some_and(|todo| {
                todo.mark_done();
                true
            })
    }

    /// Returns a handle to the first todo with the given description.
    #[must_use]
    pub fn find_by_description(&self, description: &str) -> Option<Todo> {
        self.todos
            .iter()
            .find(|todo| todo.description() == description)
            .cloned()
    }

    /// Invokes `f` once per todo, in order, for side effects.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Todo),
    {
        for todo in &self.todos {
            f(todo);
        }
    }

    /// Invokes `f` once per todo, in order, stopping at and propagating the
    /// first error.
    ///
    /// # Errors
    ///
    /// Returns whatever error `f` returns, unchanged.
    pub fn try_for_each<F, E>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&Todo) -> Result<(), E>,
    {
        for todo in &self.todos {
            f(todo)?;
        }
        Ok(())
    }

    /// Returns an iterator over the list's handles, in order.
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Returns a new list with the same title holding the handles for
    /// which `predicate` returned `true`, in their original relative
    /// order. The original list is unmodified.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Todo) -> bool,
    {
        Self {
            title: self.title.clone(),
            todos: self
                .todos
                .iter()
                .filter(|todo| predicate(todo))
                .cloned()
                .collect(),
        }
    }

    /// Returns a new list with the same title holding only the done todos.
    #[must_use]
    pub fn all_done(&self) -> Self {
        self.filter(Todo::is_done)
    }

    /// Returns a new list with the same title holding only the not-done
    /// todos.
    #[must_use]
    pub fn all_not_done(&self) -> Self {
        self.filter(|todo| !todo.is_done())
    }

    /// Looks up a handle behind the uniform `[0, len)` bounds check shared
    /// by every indexed operation.
    fn handle_at(&self, index: usize) -> Result<&Todo, TodoListError> {
        self.todos.get(index).ok_or_else(|| TodoListError::IndexOutOfRange {
            index,
            len: self.todos.len(),
        })
    }
}

impl fmt::Display for TodoList {
    /// Renders a `---- <title> ----` banner followed by one line per todo,
    /// each via the todo's own [`Display`](fmt::Display) form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.title)?;
        for todo in &self.todos {
            writeln!(f, "{todo}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
