use super::error::InventoryError;
use super::resource::ResourceKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resource counts carried by the player
///
/// One non-negative count per [`ResourceKind`]. There is no capacity limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u32; 4],
}

impl Inventory {
    /// Creates a new empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    pub fn count(&self, kind: ResourceKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Checks if there are at least `quantity` of a resource
    pub fn has(&self, kind: ResourceKind, quantity: u32) -> bool {
        self.count(kind) >= quantity
    }

    pub fn add(&mut self, kind: ResourceKind, quantity: u32) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(quantity);
    }

    /// Removes exactly `quantity`, or nothing at all if there aren't enough
    pub fn remove(&mut self, kind: ResourceKind, quantity: u32) -> Result<(), InventoryError> {
        let available = self.count(kind);
        if available < quantity {
            return Err(InventoryError::InsufficientItems {
                kind,
                requested: quantity,
                available,
            });
        }
        self.counts[kind.index()] = available - quantity;
        Ok(())
    }

    /// `(kind, count)` pairs in hotbar order
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        ResourceKind::ALL.into_iter().map(|kind| (kind, self.count(kind)))
    }

    /// Counts keyed by resource, for display and snapshots
    pub fn to_map(&self) -> BTreeMap<ResourceKind, u32> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_inventory_is_empty() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert!(inventory.iter().all(|(_, count)| count == 0));
    }

    #[test]
    fn test_add_and_count() {
        let mut inventory = Inventory::new();
        inventory.add(ResourceKind::Ore, 3);
        inventory.add(ResourceKind::Ore, 2);
        assert_eq!(inventory.count(ResourceKind::Ore), 5);
        assert_eq!(inventory.count(ResourceKind::Dirt), 0);
        assert!(inventory.has(ResourceKind::Ore, 5));
        assert!(!inventory.has(ResourceKind::Ore, 6));
    }

    #[test]
    fn test_remove_insufficient_leaves_count() {
        let mut inventory = Inventory::new();
        inventory.add(ResourceKind::Stone, 1);

        let err = inventory.remove(ResourceKind::Stone, 2).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientItems {
                kind: ResourceKind::Stone,
                requested: 2,
                available: 1,
            }
        );
        assert_eq!(inventory.count(ResourceKind::Stone), 1);

        inventory.remove(ResourceKind::Stone, 1).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_error_message() {
        let err = InventoryError::InsufficientItems {
            kind: ResourceKind::Wood,
            requested: 1,
            available: 0,
        };
        assert_eq!(err.to_string(), "insufficient wood (requested: 1, available: 0)");
    }

    #[test]
    fn test_to_map_serializes_lowercase_keys() {
        let mut inventory = Inventory::new();
        inventory.add(ResourceKind::Wood, 4);
        let json = serde_json::to_string(&inventory.to_map()).unwrap();
        assert_eq!(json, r#"{"dirt":0,"stone":0,"ore":0,"wood":4}"#);
    }
}
