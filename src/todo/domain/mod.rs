//! Domain model for todo items and todo lists.
//!
//! The domain models a single task record (description plus completion
//! flag) and an ordered, mutable collection of such records. Records are
//! shared between caller and collection by handle, so in-place mutation is
//! visible through every holder.

mod error;
mod item;
mod list;

pub use error::TodoListError;
pub use item::Todo;
pub use list::TodoList;
