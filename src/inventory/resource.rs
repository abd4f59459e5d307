use crate::tile::TileId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something the player can carry and place back into the world
///
/// Grass is not a resource of its own: mining it yields dirt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Dirt,
    Stone,
    Ore,
    Wood,
}

impl ResourceKind {
    /// Hotbar order (keys 1-4)
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Dirt,
        ResourceKind::Stone,
        ResourceKind::Ore,
        ResourceKind::Wood,
    ];

    /// What mining this tile puts in the inventory, `None` for air
    pub fn from_tile(tile: TileId) -> Option<ResourceKind> {
        match tile {
            TileId::Air => None,
            TileId::Dirt | TileId::Grass => Some(ResourceKind::Dirt),
            TileId::Stone => Some(ResourceKind::Stone),
            TileId::Ore => Some(ResourceKind::Ore),
            TileId::Wood => Some(ResourceKind::Wood),
        }
    }

    /// The tile written when this resource is placed
    pub fn tile(self) -> TileId {
        match self {
            ResourceKind::Dirt => TileId::Dirt,
            ResourceKind::Stone => TileId::Stone,
            ResourceKind::Ore => TileId::Ore,
            ResourceKind::Wood => TileId::Wood,
        }
    }

    /// Number key 1-4 to resource
    pub fn from_hotbar_key(key: u8) -> Option<ResourceKind> {
        key.checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Dirt => "dirt",
            ResourceKind::Stone => "stone",
            ResourceKind::Ore => "ore",
            ResourceKind::Wood => "wood",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grass_yields_dirt() {
        assert_eq!(ResourceKind::from_tile(TileId::Grass), Some(ResourceKind::Dirt));
        assert_eq!(ResourceKind::from_tile(TileId::Dirt), Some(ResourceKind::Dirt));
        assert_eq!(ResourceKind::from_tile(TileId::Air), None);
    }

    #[test]
    fn test_place_tiles() {
        assert_eq!(ResourceKind::Dirt.tile(), TileId::Dirt);
        assert_eq!(ResourceKind::Stone.tile(), TileId::Stone);
        assert_eq!(ResourceKind::Ore.tile(), TileId::Ore);
        assert_eq!(ResourceKind::Wood.tile(), TileId::Wood);
    }

    #[test]
    fn test_hotbar_keys() {
        assert_eq!(ResourceKind::from_hotbar_key(1), Some(ResourceKind::Dirt));
        assert_eq!(ResourceKind::from_hotbar_key(4), Some(ResourceKind::Wood));
        assert_eq!(ResourceKind::from_hotbar_key(0), None);
        assert_eq!(ResourceKind::from_hotbar_key(5), None);
    }
}
