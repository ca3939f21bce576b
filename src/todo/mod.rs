//! Todo collection management.
//!
//! This module implements the list abstraction end to end: the shared-handle
//! todo record, the insertion-ordered container with its uniform index
//! validation, and the text rendering of both. All types are pure domain
//! values with no infrastructure concerns.
//!
//! - Domain types in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
