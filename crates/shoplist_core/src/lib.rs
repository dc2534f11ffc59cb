//! Core domain logic for the shopping list.
//! This crate is the single source of truth for list invariants: unique item
//! ids, non-empty names, and the show-checked / filter view composition.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{validate_name, Item, ItemId, ItemValidationError};
pub use store::{
    CommandOutcome, SeedRejection, Store, StoreCommand, StoreError, StoreOptions, StoreResult,
    StoreSnapshot,
};
pub use view::{
    render_item, render_view, summarize, visible_items, RenderOptions, ViewFilter, ViewSummary,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
