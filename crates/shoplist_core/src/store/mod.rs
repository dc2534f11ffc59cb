//! In-memory list store and command dispatch.
//!
//! # Responsibility
//! - Own the ordered item collection and the view state (show-checked, filter).
//! - Expose id-addressed mutations with atomic failure semantics.
//!
//! # Invariants
//! - Item ids are unique and never reissued within one store lifetime.
//! - Lookup and validation run before any mutation; a failed call leaves the
//!   store unchanged.
//! - Insertion order is preserved; removal keeps the relative order of the rest.

pub mod command;
pub mod error;
pub mod list_store;

pub use command::{CommandOutcome, StoreCommand};
pub use error::{StoreError, StoreResult};
pub use list_store::{SeedRejection, Store, StoreOptions, StoreSnapshot};
