use super::resource::ResourceKind;
use thiserror::Error;

/// Errors that can occur during inventory operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Tried to remove more items than exist
    #[error("insufficient {kind} (requested: {requested}, available: {available})")]
    InsufficientItems {
        kind: ResourceKind,
        requested: u32,
        available: u32,
    },
}
