//! Item domain model.
//!
//! # Responsibility
//! - Define the single record shape held by a shopping list.
//! - Validate names at every entry point (construction, rename, decode).
//!
//! # Invariants
//! - `id` is stable and never nil.
//! - `name` is never empty once validated.
//! - `editing` is a transient view flag; it carries no meaning beyond toggling.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a list item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Validation error for item construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Name was absent or the empty string.
    EmptyName,
    /// Caller-provided id was the nil UUID.
    NilId,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name must not be empty"),
            Self::NilId => write!(f, "item id must not be the nil uuid"),
        }
    }
}

impl Error for ItemValidationError {}

/// Checks that a name is present and non-empty.
///
/// Whitespace-only names pass: the check is a plain emptiness test.
pub fn validate_name(name: Option<&str>) -> Result<&str, ItemValidationError> {
    match name {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ItemValidationError::EmptyName),
    }
}

/// One named, checkable record in a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemWire")]
pub struct Item {
    /// Assigned at creation and never changed afterwards.
    pub id: ItemId,
    /// Display name. Never empty.
    pub name: String,
    /// Whether the item has been ticked off.
    pub checked: bool,
    /// Whether the item is currently shown in edit mode.
    pub editing: bool,
}

impl Item {
    /// Creates an unchecked item with a freshly generated id.
    pub fn new(name: &str) -> Result<Self, ItemValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an unchecked item with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyName` when `name` is empty.
    pub fn with_id(id: ItemId, name: &str) -> Result<Self, ItemValidationError> {
        let item = Self {
            id,
            name: name.to_string(),
            checked: false,
            editing: false,
        };
        item.validate()?;
        Ok(item)
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        validate_name(Some(self.name.as_str()))?;
        Ok(())
    }

    /// Replaces the name after validating it. The item is untouched on error.
    pub fn rename(&mut self, name: Option<&str>) -> Result<(), ItemValidationError> {
        let name = validate_name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn toggle_checked(&mut self) {
        self.checked = !self.checked;
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }
}

#[derive(Deserialize)]
struct ItemWire {
    id: ItemId,
    name: String,
    #[serde(default)]
    checked: bool,
    #[serde(default)]
    editing: bool,
}

impl TryFrom<ItemWire> for Item {
    type Error = ItemValidationError;

    fn try_from(value: ItemWire) -> Result<Self, Self::Error> {
        let item = Self {
            id: value.id,
            name: value.name,
            checked: value.checked,
            editing: value.editing,
        };
        item.validate()?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_name, Item, ItemValidationError};
    use uuid::Uuid;

    #[test]
    fn validate_name_rejects_absent_and_empty() {
        assert_eq!(validate_name(None), Err(ItemValidationError::EmptyName));
        assert_eq!(validate_name(Some("")), Err(ItemValidationError::EmptyName));
    }

    #[test]
    fn validate_name_keeps_whitespace_names() {
        assert_eq!(validate_name(Some("  ")), Ok("  "));
        assert_eq!(validate_name(Some(" pears ")), Ok(" pears "));
    }

    #[test]
    fn new_item_starts_unchecked_and_not_editing() {
        let item = Item::new("apples").expect("valid name");
        assert!(!item.id.is_nil());
        assert_eq!(item.name, "apples");
        assert!(!item.checked);
        assert!(!item.editing);
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let err = Item::with_id(Uuid::nil(), "apples").expect_err("nil id must be rejected");
        assert_eq!(err, ItemValidationError::NilId);
    }

    #[test]
    fn rename_failure_keeps_previous_name() {
        let mut item = Item::new("apples").expect("valid name");
        let err = item.rename(Some("")).expect_err("empty rename must fail");
        assert_eq!(err, ItemValidationError::EmptyName);
        assert_eq!(item.name, "apples");

        item.rename(Some("green apples")).expect("valid rename");
        assert_eq!(item.name, "green apples");
    }

    #[test]
    fn toggles_flip_flags() {
        let mut item = Item::new("apples").expect("valid name");
        item.toggle_checked();
        item.toggle_editing();
        assert!(item.checked);
        assert!(item.editing);
        item.toggle_checked();
        assert!(!item.checked);
    }
}
