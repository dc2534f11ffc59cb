//! Store error taxonomy.

use crate::model::item::{ItemId, ItemValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A supplied name failed validation.
    Validation(ItemValidationError),
    /// No item has this id.
    NotFound(ItemId),
    /// Textual id (or prefix) matched no item.
    UnknownId(String),
    /// Textual id prefix matched more than one item.
    AmbiguousId { prefix: String, matches: usize },
}

impl StoreError {
    /// Stable machine-readable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(ItemValidationError::EmptyName) => "empty_name",
            Self::Validation(ItemValidationError::NilId) => "nil_id",
            Self::NotFound(_) => "not_found",
            Self::UnknownId(_) => "unknown_id",
            Self::AmbiguousId { .. } => "ambiguous_id",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::UnknownId(value) => write!(f, "no item matches id `{value}`"),
            Self::AmbiguousId { prefix, matches } => {
                write!(f, "id prefix `{prefix}` is ambiguous ({matches} items match)")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::UnknownId(_) | Self::AmbiguousId { .. } => None,
        }
    }
}

impl From<ItemValidationError> for StoreError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::StoreError;
    use crate::model::item::ItemValidationError;
    use std::error::Error;
    use uuid::Uuid;

    #[test]
    fn validation_error_exposes_source() {
        let err = StoreError::from(ItemValidationError::EmptyName);
        assert_eq!(err.code(), "empty_name");
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "item name must not be empty");
    }

    #[test]
    fn not_found_message_includes_id() {
        let id = Uuid::new_v4();
        let err = StoreError::NotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
        assert!(err.source().is_none());
    }
}
