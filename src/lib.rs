//! Checklist: an ordered, in-memory todo collection.
//!
//! This crate provides a small, synchronous library for managing a titled
//! list of todo items. Each item carries an immutable description and a
//! mutable completion flag; the list preserves insertion order and exposes
//! indexed, edge, and predicate-based access plus a human-readable
//! rendering.
//!
//! # Design
//!
//! - **Shared handles**: [`Todo`] is a reference-counted handle, so a
//!   caller-held todo and the copy inside a [`TodoList`] observe the same
//!   state.
//! - **Uniform bounds checking**: every operation that takes an explicit
//!   index validates it against `[0, len)` and fails with
//!   [`TodoListError::IndexOutOfRange`] without mutating the list.
//! - **Typed boundary**: [`TodoList::add`] is statically constrained to
//!   [`Todo`]; untyped input enters through [`TodoList::add_value`], which
//!   rejects anything lacking the todo shape before the list changes.
//!
//! # Examples
//!
//!     use checklist::{Todo, TodoList};
//!
//!     let mut list = TodoList::new("Today's Todos");
//!     let milk = Todo::new("Buy milk");
//!     list.add(milk.clone());
//!     list.add(Todo::new("Clean room"));
//!
//!     milk.mark_done();
//!     assert!(list.item_at(0).is_ok_and(|todo| todo.is_done()));
//!     assert_eq!(
//!         list.to_string(),
//!         "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room\n",
//!     );

pub mod todo;

pub use todo::domain::{Todo, TodoList, TodoListError};
