//! Shared physical state for every moving entity
//!
//! Player, enemies and the boss each own a [`Body`]. They differ only in how they
//! choose `vel_x`/`vel_y` before calling [`Body::step`]; the movement itself (gravity,
//! horizontal pass, vertical pass) is the same code for all of them.

use crate::collision::{Collidable, Rect, resolve_axis};
use crate::config::SimConfig;
use crate::tile::TileGrid;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub rect: Rect,
    pub vel_x: f32,
    pub vel_y: f32,
    pub on_ground: bool,
    pub health: i32,
    /// Frames of invulnerability left after taking a hit
    pub hurt_cooldown: u32,
}

impl Body {
    pub fn new(rect: Rect, health: i32) -> Self {
        Body {
            rect,
            vel_x: 0.0,
            vel_y: 0.0,
            on_ground: false,
            health,
            hurt_cooldown: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Advances one tick of movement through the grid
    ///
    /// Applies gravity, resolves the horizontal displacement, clears `on_ground`,
    /// resolves the vertical displacement (which sets `on_ground` again on landing),
    /// then counts the hurt cooldown down.
    pub fn step(&mut self, grid: &TileGrid, config: &SimConfig) {
        self.vel_y += config.gravity;

        let dx = self.vel_x;
        resolve_axis(self, grid, config.tile_size, dx, 0.0);

        self.on_ground = false;
        let dy = self.vel_y;
        resolve_axis(self, grid, config.tile_size, 0.0, dy);

        self.tick_cooldown();
    }

    pub fn tick_cooldown(&mut self) {
        self.hurt_cooldown = self.hurt_cooldown.saturating_sub(1);
    }

    /// Keeps the rectangle inside `[0, max_x]` horizontally
    pub fn clamp_horizontal(&mut self, max_x: i32) {
        if self.rect.left() < 0 {
            self.rect.set_left(0);
        }
        if self.rect.right() > max_x {
            self.rect.set_right(max_x);
        }
    }

    /// Upward impulse; only callers that checked `on_ground` should use it
    pub fn jump(&mut self, impulse: f32) {
        self.vel_y = -impulse;
        self.on_ground = false;
    }
}

impl Collidable for Body {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}
