//! Visible-item projection.

use crate::model::item::Item;
use crate::store::list_store::Store;
use serde::{Deserialize, Serialize};

/// The two view predicates captured as a value.
///
/// An item is visible when `(show_checked || !item.checked)` and its name
/// contains `filter_text` (case-sensitive; the empty filter matches all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewFilter<'a> {
    pub show_checked: bool,
    pub filter_text: &'a str,
}

impl<'a> ViewFilter<'a> {
    pub fn from_store(store: &'a Store) -> Self {
        Self {
            show_checked: store.show_checked(),
            filter_text: store.filter_text(),
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        (self.show_checked || !item.checked) && item.name.contains(self.filter_text)
    }
}

/// Returns the currently visible items in insertion order.
pub fn visible_items(store: &Store) -> Vec<&Item> {
    let filter = ViewFilter::from_store(store);
    store
        .items()
        .iter()
        .filter(|item| filter.matches(item))
        .collect()
}

/// Item counts for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSummary {
    pub total: usize,
    pub visible: usize,
    pub checked: usize,
    /// `total - visible`.
    pub hidden: usize,
}

pub fn summarize(store: &Store) -> ViewSummary {
    let total = store.len();
    let visible = visible_items(store).len();
    ViewSummary {
        total,
        visible,
        checked: store.checked_count(),
        hidden: total - visible,
    }
}
