//! Shopping list store.
//!
//! # Responsibility
//! - Hold the ordered item collection plus the show-checked flag and filter text.
//! - Allocate collision-free item ids.
//! - Emit metadata-only `event=... module=store` log lines for every mutation.
//!
//! # Invariants
//! - `issued_ids` only grows, so a removed item's id is never handed out again.
//!   It holds one entry per id ever issued and is never pruned.
//! - Item names are never logged; only their lengths.

use crate::model::item::{validate_name, Item, ItemId};
use crate::store::error::{StoreError, StoreResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Initial view state for a new store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Whether checked items are part of the visible view.
    pub show_checked: bool,
    /// Case-sensitive substring every visible name must contain.
    pub filter_text: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            show_checked: true,
            filter_text: String::new(),
        }
    }
}

/// Seed entry that could not be added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRejection {
    /// Position of the entry in the seed input.
    pub index: usize,
    pub error: StoreError,
}

/// Owned copy of the full store state, suitable for handing to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub items: Vec<Item>,
    pub show_checked: bool,
    pub filter_text: String,
}

/// Owner of the shopping list items and their view state.
#[derive(Debug, Clone)]
pub struct Store {
    items: Vec<Item>,
    show_checked: bool,
    filter_text: String,
    /// Every id this store has allocated, including removed items' ids.
    /// Never shrinks for the store's lifetime.
    issued_ids: HashSet<ItemId>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store with default view state.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Creates an empty store with the given view state.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            items: Vec::new(),
            show_checked: options.show_checked,
            filter_text: options.filter_text,
            issued_ids: HashSet::new(),
        }
    }

    /// Creates a default store and seeds it with `names`.
    ///
    /// Invalid entries are skipped and reported; valid ones keep their order.
    pub fn with_seed<I, S>(names: I) -> (Self, Vec<SeedRejection>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        let rejections = store.seed(names);
        (store, rejections)
    }

    /// Appends every valid name in `names`, returning the rejected entries.
    pub fn seed<I, S>(&mut self, names: I) -> Vec<SeedRejection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rejections = Vec::new();
        for (index, name) in names.into_iter().enumerate() {
            if let Err(error) = self.add_item(name.as_ref()) {
                rejections.push(SeedRejection { index, error });
            }
        }
        debug!(
            "event=store_seed module=store status=ok total={} rejected={}",
            self.items.len(),
            rejections.len()
        );
        rejections
    }

    /// Validates `name` and appends a new unchecked item.
    ///
    /// # Errors
    /// - `Validation(EmptyName)` when `name` is absent or empty.
    pub fn add_item<'a>(&mut self, name: impl Into<Option<&'a str>>) -> StoreResult<ItemId> {
        let name = validate_name(name.into()).map_err(|err| reject("item_add", err.into()))?;
        let id = self.allocate_id();
        let item = Item::with_id(id, name).map_err(|err| reject("item_add", err.into()))?;
        self.items.push(item);
        debug!(
            "event=item_add module=store status=ok id={id} name_len={} total={}",
            name.len(),
            self.items.len()
        );
        Ok(id)
    }

    /// Looks up an item by id.
    ///
    /// # Errors
    /// - `NotFound` when no item has this id.
    pub fn find_by_id(&self, id: ItemId) -> StoreResult<&Item> {
        let index = self.position(id)?;
        Ok(&self.items[index])
    }

    /// Replaces the name of an existing item.
    ///
    /// Lookup runs first, so an unknown id reports `NotFound` even when the
    /// new name is also invalid.
    pub fn rename_item<'a>(
        &mut self,
        id: ItemId,
        new_name: impl Into<Option<&'a str>>,
    ) -> StoreResult<()> {
        let item = self
            .find_by_id_mut(id)
            .map_err(|err| reject("item_rename", err))?;
        item.rename(new_name.into())
            .map_err(|err| reject("item_rename", err.into()))?;
        debug!(
            "event=item_rename module=store status=ok id={id} name_len={}",
            item.name.len()
        );
        Ok(())
    }

    /// Flips the `checked` flag of an item.
    pub fn toggle_checked(&mut self, id: ItemId) -> StoreResult<()> {
        let item = self
            .find_by_id_mut(id)
            .map_err(|err| reject("item_toggle_checked", err))?;
        item.toggle_checked();
        debug!(
            "event=item_toggle_checked module=store status=ok id={id} checked={}",
            item.checked
        );
        Ok(())
    }

    /// Flips the `editing` flag of an item.
    ///
    /// Several items may be in edit mode at once.
    pub fn toggle_editing(&mut self, id: ItemId) -> StoreResult<()> {
        let item = self
            .find_by_id_mut(id)
            .map_err(|err| reject("item_toggle_editing", err))?;
        item.toggle_editing();
        debug!(
            "event=item_toggle_editing module=store status=ok id={id} editing={}",
            item.editing
        );
        Ok(())
    }

    /// Renames an item and takes it out of edit mode in one step.
    ///
    /// On error neither the name nor the `editing` flag changes.
    pub fn commit_edit<'a>(
        &mut self,
        id: ItemId,
        new_name: impl Into<Option<&'a str>>,
    ) -> StoreResult<()> {
        let item = self
            .find_by_id_mut(id)
            .map_err(|err| reject("item_commit_edit", err))?;
        item.rename(new_name.into())
            .map_err(|err| reject("item_commit_edit", err.into()))?;
        item.editing = false;
        debug!(
            "event=item_commit_edit module=store status=ok id={id} name_len={}",
            item.name.len()
        );
        Ok(())
    }

    /// Removes an item, keeping the order of the remaining ones.
    pub fn remove_item(&mut self, id: ItemId) -> StoreResult<Item> {
        let index = self
            .position(id)
            .map_err(|err| reject("item_remove", err))?;
        let removed = self.items.remove(index);
        debug!(
            "event=item_remove module=store status=ok id={id} total={}",
            self.items.len()
        );
        Ok(removed)
    }

    pub fn set_show_checked(&mut self, value: bool) {
        self.show_checked = value;
        debug!("event=view_show_checked module=store status=ok show_checked={value}");
    }

    pub fn toggle_show_checked(&mut self) {
        self.set_show_checked(!self.show_checked);
    }

    /// Stores the filter verbatim: no trimming, no case folding.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        debug!(
            "event=view_filter module=store status=ok filter_len={}",
            self.filter_text.len()
        );
    }

    /// Resolves a full id or a unique id prefix typed by a user.
    ///
    /// # Errors
    /// - `NotFound` for a well-formed id that is not in the store.
    /// - `UnknownId` when nothing matches (or the input is blank).
    /// - `AmbiguousId` when a prefix matches several items.
    pub fn resolve_id(&self, input: &str) -> StoreResult<ItemId> {
        let needle = input.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(StoreError::UnknownId(input.to_string()));
        }
        if let Ok(id) = Uuid::parse_str(&needle) {
            return self.find_by_id(id).map(|item| item.id);
        }

        // Compare without hyphens so `1111111122` and `11111111-22` both match.
        let prefix = needle.replace('-', "");
        if prefix.is_empty() {
            return Err(StoreError::UnknownId(input.to_string()));
        }
        let matches: Vec<ItemId> = self
            .items
            .iter()
            .map(|item| item.id)
            .filter(|id| id.simple().to_string().starts_with(&prefix))
            .collect();
        match matches.as_slice() {
            [] => Err(StoreError::UnknownId(input.to_string())),
            [id] => Ok(*id),
            _ => Err(StoreError::AmbiguousId {
                prefix: input.to_string(),
                matches: matches.len(),
            }),
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn show_checked(&self) -> bool {
        self.show_checked
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Returns an owned copy of the full state.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            items: self.items.clone(),
            show_checked: self.show_checked,
            filter_text: self.filter_text.clone(),
        }
    }

    fn position(&self, id: ItemId) -> StoreResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn find_by_id_mut(&mut self, id: ItemId) -> StoreResult<&mut Item> {
        let index = self.position(id)?;
        Ok(&mut self.items[index])
    }

    fn allocate_id(&mut self) -> ItemId {
        loop {
            let id = Uuid::new_v4();
            if self.issued_ids.insert(id) {
                return id;
            }
        }
    }
}

fn reject(event: &'static str, err: StoreError) -> StoreError {
    match &err {
        StoreError::NotFound(id) => warn!(
            "event={event} module=store status=error error_code={} id={id}",
            err.code()
        ),
        _ => warn!(
            "event={event} module=store status=error error_code={}",
            err.code()
        ),
    }
    err
}
