/// Collision detection and response for the tile world
///
/// This module provides the pieces every moving entity shares:
///
/// - `Rect`: integer axis-aligned rectangle in world pixels
/// - `aabb_intersect`: rectangle overlap test used for contact damage and attacks
/// - `Collidable` trait: anything with bounds that other bodies can touch
/// - `resolve_axis`: the one AABB-vs-tilemap algorithm that moves a `Body`
///
/// # Separated axes
///
/// Movement is resolved one axis at a time: horizontal displacement first, then
/// vertical. Each call moves the rectangle by the displacement, samples its four
/// corners, and snaps the leading edge flush against any solid tile a corner landed
/// in. Resolving the axes separately is what keeps bodies from slipping through the
/// corner where a wall meets a floor.
use crate::body::Body;
use crate::tile::TileGrid;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world pixels (top-left origin, y grows downward)
///
/// Edges follow half-open conventions: `right()` and `bottom()` are one past the
/// last covered pixel, so rectangles that only touch do not intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    /// Rectangle whose bottom edge is centred on `(center_x, bottom)`
    pub fn from_bottom_center(center_x: i32, bottom: i32, width: i32, height: i32) -> Self {
        Rect::new(center_x - width / 2, bottom - height, width, height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// The last pixel inside each corner: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [(i32, i32); 4] {
        [
            (self.left(), self.top()),
            (self.right() - 1, self.top()),
            (self.left(), self.bottom() - 1),
            (self.right() - 1, self.bottom() - 1),
        ]
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// For two rectangles to NOT intersect, one must be completely left of, right of,
/// above, or below the other. Touching edges do not count as intersecting.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.left() < b.right() && a.right() > b.left();
    let y_overlap = a.top() < b.bottom() && a.bottom() > b.top();

    x_overlap && y_overlap
}

/// Trait for entities that participate in collision detection.
///
/// Player, enemies and the boss all implement this so contact damage and attack
/// hit tests can treat them uniformly.
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn get_bounds(&self) -> Rect;
}

/// Returns the indices of every entity in `entities` whose bounds intersect `area`
pub fn check_collisions_with_collection<T: Collidable>(area: &Rect, entities: &[T]) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(area, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}

/// Maps a world pixel coordinate to the tile containing it (floor division)
pub fn world_to_tile(pixel: i32, tile_size: i32) -> i32 {
    pixel.div_euclid(tile_size)
}

/// Moves `body` by one axis of displacement and pushes it out of solid tiles.
///
/// Call once with `(dx, 0.0)` and then once with `(0.0, dy)`. The rectangle moves by
/// the truncated displacement; the sign of the float decides which edge snaps, so a
/// sub-pixel velocity still keeps a body pressed against the tile it is touching.
///
/// - moving down: bottom snaps to the tile's top, `vel_y = 0`, `on_ground = true`
/// - moving up: top snaps to the tile's bottom, `vel_y = 0`
/// - moving right: right edge snaps to the tile's left edge
/// - moving left: left edge snaps to the tile's right edge
///
/// Tiles outside the grid are never solid, so nothing stops a body that has left
/// the world. Calling with `dx == dy == 0.0` never moves the body.
pub fn resolve_axis(body: &mut Body, grid: &TileGrid, tile_size: i32, dx: f32, dy: f32) {
    body.rect.x += dx as i32;
    body.rect.y += dy as i32;

    for (corner_x, corner_y) in body.rect.corners() {
        let tile_x = world_to_tile(corner_x, tile_size);
        let tile_y = world_to_tile(corner_y, tile_size);

        if !grid.is_solid(tile_x, tile_y) {
            continue;
        }

        if dy > 0.0 {
            body.rect.set_bottom(tile_y * tile_size);
            body.vel_y = 0.0;
            body.on_ground = true;
        } else if dy < 0.0 {
            body.rect.set_top((tile_y + 1) * tile_size);
            body.vel_y = 0.0;
        }

        if dx > 0.0 {
            body.rect.set_right(tile_x * tile_size);
        } else if dx < 0.0 {
            body.rect.set_left((tile_x + 1) * tile_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileId;

    const TILE: i32 = 32;

    /// 10x10 grid, air except column 3 which is stone from row 5 down
    fn test_grid() -> TileGrid {
        let mut grid = TileGrid::new(10, 10, TileId::Air);
        for y in 5..10 {
            grid.set_tile(3, y, TileId::Stone);
        }
        grid
    }

    fn body_at(x: i32, y: i32) -> Body {
        Body::new(Rect::new(x, y, 32, 48), 100)
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a));
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_world_to_tile_floors_negatives() {
        assert_eq!(world_to_tile(0, TILE), 0);
        assert_eq!(world_to_tile(31, TILE), 0);
        assert_eq!(world_to_tile(32, TILE), 1);
        assert_eq!(world_to_tile(-1, TILE), -1);
    }

    #[test]
    fn test_falling_body_lands_flush() {
        let grid = test_grid();
        // Bottom edge at 158 (inside row 4), falling 5px into row 5.
        let mut body = body_at(3 * TILE, 158 - 48);
        body.vel_y = 5.0;
        let dy = body.vel_y;

        resolve_axis(&mut body, &grid, TILE, 0.0, dy);

        assert_eq!(body.rect.bottom(), 5 * TILE);
        assert!(body.on_ground);
        assert_eq!(body.vel_y, 0.0);
    }

    #[test]
    fn test_rising_body_bumps_head() {
        let mut grid = TileGrid::new(10, 10, TileId::Air);
        grid.set_tile(2, 2, TileId::Dirt);
        // Top edge at 98 (row 3), rising 5px into row 2.
        let mut body = body_at(2 * TILE, 98);
        body.vel_y = -5.0;
        let dy = body.vel_y;

        resolve_axis(&mut body, &grid, TILE, 0.0, dy);

        assert_eq!(body.rect.top(), 3 * TILE);
        assert_eq!(body.vel_y, 0.0);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_moving_right_into_wall() {
        let grid = test_grid();
        // Standing in rows 4..5 (y = 112..160 overlaps row 5 with the wall column).
        let mut body = body_at(3 * TILE - 34, 5 * TILE - 40);

        resolve_axis(&mut body, &grid, TILE, 4.0, 0.0);

        assert_eq!(body.rect.right(), 3 * TILE);
    }

    #[test]
    fn test_moving_left_into_wall() {
        let grid = test_grid();
        let mut body = body_at(4 * TILE + 2, 5 * TILE - 40);

        resolve_axis(&mut body, &grid, TILE, -4.0, 0.0);

        assert_eq!(body.rect.left(), 4 * TILE);
    }

    #[test]
    fn test_zero_displacement_is_idempotent() {
        let grid = test_grid();
        let mut body = body_at(3 * TILE, 158 - 48);
        body.vel_y = 5.0;
        resolve_axis(&mut body, &grid, TILE, 0.0, 5.0);
        let settled = body.rect;

        for _ in 0..3 {
            resolve_axis(&mut body, &grid, TILE, 0.0, 0.0);
            assert_eq!(body.rect, settled);
        }
    }

    #[test]
    fn test_out_of_bounds_is_open_space() {
        let grid = test_grid();
        let mut body = body_at(-100, 500);
        body.vel_y = 10.0;

        resolve_axis(&mut body, &grid, TILE, 0.0, 10.0);

        assert_eq!(body.rect.y, 510);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_subpixel_velocity_does_not_move() {
        let grid = test_grid();
        let mut body = body_at(0, 0);
        resolve_axis(&mut body, &grid, TILE, 0.6, 0.0);
        assert_eq!(body.rect.x, 0);
    }

    #[test]
    fn test_check_collisions_with_collection() {
        struct Dummy(Rect);
        impl Collidable for Dummy {
            fn get_bounds(&self) -> Rect {
                self.0
            }
        }

        let others = vec![
            Dummy(Rect::new(0, 0, 10, 10)),
            Dummy(Rect::new(50, 50, 10, 10)),
            Dummy(Rect::new(5, 5, 10, 10)),
        ];
        let hits = check_collisions_with_collection(&Rect::new(0, 0, 8, 8), &others);
        assert_eq!(hits, vec![0, 2]);
    }
}
