//! Mine/place protocol between the tile grid and the player's inventory
//!
//! Both actions are validated against the world rather than trusting the caller.
//! An invalid request changes nothing and reports why through
//! [`BlockOutcome::Rejected`]; callers that only care about the world can ignore
//! the outcome entirely.

use super::inventory::Inventory;
use super::resource::ResourceKind;
use crate::collision::{Rect, aabb_intersect, world_to_tile};
use crate::tile::{TileGrid, TileId};
use serde::Serialize;
use tracing::debug;

/// Why a mine or place request was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// Target is farther than the reach limit from the player's tile
    OutOfReach,
    /// Target tile is outside the grid
    OutOfBounds,
    /// Mining air
    NothingToMine,
    /// The bottom row can never be mined
    Bedrock,
    /// No items of the selected resource
    EmptySelection,
    /// Placing onto a tile that isn't air
    Occupied,
    /// The placed tile would overlap the player
    OverlapsPlayer,
    /// The player is dead; the world no longer accepts actions
    GameOver,
}

/// Result of a mine or place request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockOutcome {
    Mined(ResourceKind),
    Placed(ResourceKind),
    Rejected(RejectReason),
}

impl BlockOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, BlockOutcome::Rejected(_))
    }
}

/// Mines the tile under `(world_x, world_y)` into the inventory
///
/// Rejected when the target is more than `reach_tiles` away (Chebyshev distance
/// from the tile under the player's centre), outside the grid, air, or on the
/// bedrock row.
pub fn mine_block(
    grid: &mut TileGrid,
    inventory: &mut Inventory,
    player_rect: &Rect,
    tile_size: i32,
    reach_tiles: i32,
    world_x: i32,
    world_y: i32,
) -> BlockOutcome {
    let tile_x = world_to_tile(world_x, tile_size);
    let tile_y = world_to_tile(world_y, tile_size);
    let player_x = world_to_tile(player_rect.center_x(), tile_size);
    let player_y = world_to_tile(player_rect.center_y(), tile_size);

    if (tile_x - player_x).abs() > reach_tiles || (tile_y - player_y).abs() > reach_tiles {
        return reject(RejectReason::OutOfReach, tile_x, tile_y);
    }

    let Some(tile) = grid.get_tile(tile_x, tile_y) else {
        return reject(RejectReason::OutOfBounds, tile_x, tile_y);
    };
    let Some(kind) = ResourceKind::from_tile(tile) else {
        return reject(RejectReason::NothingToMine, tile_x, tile_y);
    };
    if tile_y >= grid.bedrock_row() {
        return reject(RejectReason::Bedrock, tile_x, tile_y);
    }

    inventory.add(kind, 1);
    grid.set_tile(tile_x, tile_y, TileId::Air);
    debug!(tile_x, tile_y, resource = %kind, "mined block");
    BlockOutcome::Mined(kind)
}

/// Places one `selected` resource at `(world_x, world_y)`
///
/// Rejected when there is none of the resource, the target is outside the grid or
/// not air, or the tile would overlap the player's own rectangle.
pub fn place_block(
    grid: &mut TileGrid,
    inventory: &mut Inventory,
    selected: ResourceKind,
    player_rect: &Rect,
    tile_size: i32,
    world_x: i32,
    world_y: i32,
) -> BlockOutcome {
    let tile_x = world_to_tile(world_x, tile_size);
    let tile_y = world_to_tile(world_y, tile_size);

    if !inventory.has(selected, 1) {
        return reject(RejectReason::EmptySelection, tile_x, tile_y);
    }

    match grid.get_tile(tile_x, tile_y) {
        None => return reject(RejectReason::OutOfBounds, tile_x, tile_y),
        Some(TileId::Air) => {}
        Some(_) => return reject(RejectReason::Occupied, tile_x, tile_y),
    }

    let tile_rect = Rect::new(tile_x * tile_size, tile_y * tile_size, tile_size, tile_size);
    if aabb_intersect(player_rect, &tile_rect) {
        return reject(RejectReason::OverlapsPlayer, tile_x, tile_y);
    }

    if let Err(err) = inventory.remove(selected, 1) {
        debug!(%err, "place lost its item between check and removal");
        return reject(RejectReason::EmptySelection, tile_x, tile_y);
    }
    grid.set_tile(tile_x, tile_y, selected.tile());
    debug!(tile_x, tile_y, resource = %selected, "placed block");
    BlockOutcome::Placed(selected)
}

fn reject(reason: RejectReason, tile_x: i32, tile_y: i32) -> BlockOutcome {
    debug!(?reason, tile_x, tile_y, "block action ignored");
    BlockOutcome::Rejected(reason)
}
