//! Command dispatch for UI/CLI callers.
//!
//! # Responsibility
//! - Give external layers one plain-data entry point per user gesture.
//! - Keep the caller free of per-operation plumbing.
//!
//! # Invariants
//! - Every command maps to exactly one store operation.
//! - Dispatch never adds behavior beyond the underlying operation.

use crate::model::item::ItemId;
use crate::store::error::StoreResult;
use crate::store::list_store::Store;

/// User-level command addressed to a [`Store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    Add { name: String },
    Rename { id: ItemId, name: String },
    ToggleChecked { id: ItemId },
    ToggleEditing { id: ItemId },
    /// Edit-form submit: rename and leave edit mode.
    CommitEdit { id: ItemId, name: String },
    Remove { id: ItemId },
    SetShowChecked { value: bool },
    ToggleShowChecked,
    SetFilterText { text: String },
}

impl StoreCommand {
    /// Stable command name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Rename { .. } => "rename",
            Self::ToggleChecked { .. } => "toggle_checked",
            Self::ToggleEditing { .. } => "toggle_editing",
            Self::CommitEdit { .. } => "commit_edit",
            Self::Remove { .. } => "remove",
            Self::SetShowChecked { .. } => "set_show_checked",
            Self::ToggleShowChecked => "toggle_show_checked",
            Self::SetFilterText { .. } => "set_filter_text",
        }
    }
}

/// Successful result of [`Store::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A new item was appended with this id.
    Added(ItemId),
    Applied,
}

impl Store {
    /// Applies one command to the store.
    ///
    /// Returns the same errors as the underlying operation, unchanged.
    pub fn apply(&mut self, command: StoreCommand) -> StoreResult<CommandOutcome> {
        match command {
            StoreCommand::Add { name } => self.add_item(name.as_str()).map(CommandOutcome::Added),
            StoreCommand::Rename { id, name } => self
                .rename_item(id, name.as_str())
                .map(|()| CommandOutcome::Applied),
            StoreCommand::ToggleChecked { id } => {
                self.toggle_checked(id).map(|()| CommandOutcome::Applied)
            }
            StoreCommand::ToggleEditing { id } => {
                self.toggle_editing(id).map(|()| CommandOutcome::Applied)
            }
            StoreCommand::CommitEdit { id, name } => self
                .commit_edit(id, name.as_str())
                .map(|()| CommandOutcome::Applied),
            StoreCommand::Remove { id } => self.remove_item(id).map(|_| CommandOutcome::Applied),
            StoreCommand::SetShowChecked { value } => {
                self.set_show_checked(value);
                Ok(CommandOutcome::Applied)
            }
            StoreCommand::ToggleShowChecked => {
                self.toggle_show_checked();
                Ok(CommandOutcome::Applied)
            }
            StoreCommand::SetFilterText { text } => {
                self.set_filter_text(text);
                Ok(CommandOutcome::Applied)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandOutcome, StoreCommand};
    use crate::model::item::ItemValidationError;
    use crate::store::error::StoreError;
    use crate::store::list_store::Store;
    use uuid::Uuid;

    #[test]
    fn add_command_returns_new_id() {
        let mut store = Store::new();
        let outcome = store
            .apply(StoreCommand::Add {
                name: "apples".to_string(),
            })
            .expect("add should succeed");

        let CommandOutcome::Added(id) = outcome else {
            panic!("expected Added outcome, got {outcome:?}");
        };
        assert_eq!(store.find_by_id(id).expect("present").name, "apples");
    }

    #[test]
    fn commands_route_to_store_operations() {
        let mut store = Store::new();
        let id = store.add_item("apples").expect("add");

        for command in [
            StoreCommand::ToggleChecked { id },
            StoreCommand::ToggleEditing { id },
            StoreCommand::CommitEdit {
                id,
                name: "pears".to_string(),
            },
            StoreCommand::ToggleShowChecked,
            StoreCommand::SetFilterText {
                text: "pe".to_string(),
            },
        ] {
            assert_eq!(store.apply(command), Ok(CommandOutcome::Applied));
        }

        let item = store.find_by_id(id).expect("present");
        assert_eq!(item.name, "pears");
        assert!(item.checked);
        assert!(!item.editing);
        assert!(!store.show_checked());
        assert_eq!(store.filter_text(), "pe");

        store
            .apply(StoreCommand::SetShowChecked { value: true })
            .expect("set show checked");
        assert!(store.show_checked());
        store.apply(StoreCommand::Remove { id }).expect("remove");
        assert!(store.is_empty());
    }

    #[test]
    fn command_errors_pass_through_unchanged() {
        let mut store = Store::new();
        let missing = Uuid::new_v4();

        assert_eq!(
            store.apply(StoreCommand::Remove { id: missing }),
            Err(StoreError::NotFound(missing))
        );
        assert_eq!(
            store.apply(StoreCommand::Add {
                name: String::new()
            }),
            Err(StoreError::Validation(ItemValidationError::EmptyName))
        );
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(StoreCommand::ToggleShowChecked.kind(), "toggle_show_checked");
        assert_eq!(
            StoreCommand::Add {
                name: "x".to_string()
            }
            .kind(),
            "add"
        );
    }
}
