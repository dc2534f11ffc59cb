//! View projection and text rendering.
//!
//! # Responsibility
//! - Turn store state into the ordered list of currently visible items.
//! - Render that list as deterministic plain text.
//!
//! # Invariants
//! - Projection and rendering are pure: they never mutate the store.
//! - Visible items keep the store's insertion order.

pub mod projector;
pub mod render;

pub use projector::{summarize, visible_items, ViewFilter, ViewSummary};
pub use render::{render_item, render_view, RenderOptions};
