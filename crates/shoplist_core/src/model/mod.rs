//! Domain model for shopping list records.
//!
//! # Responsibility
//! - Define the canonical item record owned by a [`crate::Store`].
//! - Keep name validation next to the data it protects.
//!
//! # Invariants
//! - Every item is identified by a stable, non-nil `ItemId`.
//! - An item name is never empty once it has passed validation.

pub mod item;
