use serde::{Deserialize, Serialize};

/// Unique identifier for tile types
///
/// The numeric values are stable ids (`Air = 0` .. `Wood = 5`); anything outside
/// that range is not a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileId {
    Air = 0,
    Dirt = 1,
    Grass = 2,
    Stone = 3,
    Ore = 4,
    Wood = 5,
}

impl TileId {
    /// Every tile type, in id order
    pub const ALL: [TileId; 6] = [
        TileId::Air,
        TileId::Dirt,
        TileId::Grass,
        TileId::Stone,
        TileId::Ore,
        TileId::Wood,
    ];

    /// Anything but air blocks movement
    pub fn is_solid(self) -> bool {
        self != TileId::Air
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Converts a raw id back to a tile, `None` for unknown ids
    pub fn from_id(id: u8) -> Option<TileId> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            TileId::Air => "air",
            TileId::Dirt => "dirt",
            TileId::Grass => "grass",
            TileId::Stone => "stone",
            TileId::Ore => "ore",
            TileId::Wood => "wood",
        }
    }
}

/// World grid that stores tile data
///
/// Coordinates are `(column, row)` with row 0 at the top. The dimensions are fixed
/// at construction; reads outside the grid return `None` and writes outside it are
/// refused, so callers never have to bounds-check first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<TileId>,
    width: usize,
    height: usize,
}

impl TileGrid {
    /// Creates a grid filled with `fill`
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. A zero-sized world means the generator or
    /// config is broken, not something to recover from at runtime.
    pub fn new(width: usize, height: usize, fill: TileId) -> Self {
        assert!(width > 0 && height > 0, "tile grid dimensions must be non-zero, got {}x{}", width, height);
        TileGrid {
            tiles: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Builds a grid from rows of raw tile ids (row 0 first)
    ///
    /// # Panics
    ///
    /// Panics on ragged rows, empty input, or an unknown tile id.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut grid = TileGrid::new(width, height, TileId::Air);

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "row {} has {} tiles, expected {}", y, row.len(), width);
            for (x, &raw) in row.iter().enumerate() {
                let tile = TileId::from_id(raw).unwrap_or_else(|| panic!("unknown tile id {} at ({}, {})", raw, x, y));
                grid.tiles[y * width + x] = tile;
            }
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get_tile(&self, x: i32, y: i32) -> Option<TileId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    /// Returns false (and writes nothing) when the coordinate is outside the grid
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileId) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.tiles[y as usize * self.width + x as usize] = tile;
        true
    }

    /// Out-of-range coordinates are never solid
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).is_some_and(TileId::is_solid)
    }

    /// The topmost solid row in a column, `None` if the column is all air or out of range
    pub fn surface_row(&self, x: i32) -> Option<i32> {
        if x < 0 || x as usize >= self.width {
            return None;
        }
        (0..self.height as i32).find(|&y| self.is_solid(x, y))
    }

    /// Row that can never be mined
    pub fn bedrock_row(&self) -> i32 {
        self.height as i32 - 1
    }

    /// Rows of tiles, top to bottom, for renderers that want to walk the grid
    pub fn rows(&self) -> impl Iterator<Item = &[TileId]> {
        self.tiles.chunks(self.width)
    }
}
