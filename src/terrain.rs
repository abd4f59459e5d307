//! Procedural overworld generation
//!
//! The surface is a bounded random walk: starting at half the world height, each
//! column moves the surface up, down or not at all, clamped to 4 rows either side of
//! the start. Below the surface sits one grass tile, four dirt tiles, then stone with
//! a 5% chance of ore per tile. Everything above the surface is air.

use crate::random::RandomSource;
use crate::tile::{TileGrid, TileId};
use tracing::debug;

/// How far the surface may wander from the starting height, in rows
pub const SURFACE_WANDER: i32 = 4;
/// Dirt rows directly under the grass
pub const DIRT_DEPTH: i32 = 4;
/// Chance that a deep tile is ore instead of stone
pub const ORE_CHANCE: f32 = 0.05;

/// Generates a fresh world using the thread-local generator
pub fn generate(width: usize, height: usize) -> TileGrid {
    generate_with(width, height, &mut rand::thread_rng())
}

/// Generates a world from the given random source
///
/// Deterministic for a deterministic source.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn generate_with<R: RandomSource + ?Sized>(width: usize, height: usize, rng: &mut R) -> TileGrid {
    let mut grid = TileGrid::new(width, height, TileId::Air);
    let base = (height / 2) as i32;
    let mut current_height = base;

    for x in 0..width as i32 {
        current_height += rng.step();
        current_height = current_height.clamp(base - SURFACE_WANDER, base + SURFACE_WANDER);

        for y in current_height.max(0)..height as i32 {
            let tile = if y == current_height {
                TileId::Grass
            } else if y <= current_height + DIRT_DEPTH {
                TileId::Dirt
            } else if rng.chance() < ORE_CHANCE {
                TileId::Ore
            } else {
                TileId::Stone
            };
            grid.set_tile(x, y, tile);
        }
    }

    debug!(width, height, "generated terrain");
    grid
}
