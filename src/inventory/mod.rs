// Inventory system module
//
// This module provides the player's resource inventory, including:
// - Resource kinds and their mapping to/from tiles
// - Per-resource counts
// - The mine/place protocol that moves tiles between the grid and the inventory

pub mod actions;
pub mod error;
pub mod inventory;
pub mod resource;

// Re-export main types
pub use actions::{BlockOutcome, RejectReason, mine_block, place_block};
pub use error::InventoryError;
pub use inventory::Inventory;
pub use resource::ResourceKind;
