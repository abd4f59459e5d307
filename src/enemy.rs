use crate::body::Body;
use crate::collision::{Collidable, Rect};
use crate::config::SimConfig;
use crate::random::RandomSource;
use crate::tile::TileGrid;

/// How a hostile decides its velocity each tick
///
/// Greedy horizontal chase: always walk towards the target's centre (right on an
/// exact tie), and hop with a small per-tick chance while standing, which is
/// enough to climb one-tile steps eventually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChasePolicy {
    pub speed: f32,
    pub jump_chance: f32,
    pub jump_impulse: f32,
}

impl ChasePolicy {
    pub fn enemy(config: &SimConfig) -> Self {
        ChasePolicy {
            speed: config.enemy_speed,
            jump_chance: config.enemy_jump_chance,
            jump_impulse: config.player_jump * config.enemy_jump_factor,
        }
    }

    pub fn boss(config: &SimConfig) -> Self {
        ChasePolicy {
            speed: config.enemy_speed * config.boss_speed_factor,
            jump_chance: config.boss_jump_chance,
            jump_impulse: config.player_jump,
        }
    }

    /// Sets `body`'s velocity towards `target_center_x` and maybe starts a jump
    ///
    /// The jump draw only happens while grounded, so airborne ticks consume no
    /// randomness.
    pub fn decide<R: RandomSource + ?Sized>(&self, body: &mut Body, target_center_x: i32, rng: &mut R) {
        body.vel_x = if target_center_x < body.rect.center_x() {
            -self.speed
        } else {
            self.speed
        };

        if body.on_ground && rng.chance() < self.jump_chance {
            body.jump(self.jump_impulse);
        }
    }

    /// One full hostile tick: decide, move, stay inside the world horizontally
    pub fn update<R: RandomSource + ?Sized>(
        &self,
        body: &mut Body,
        target_center_x: i32,
        grid: &TileGrid,
        config: &SimConfig,
        rng: &mut R,
    ) {
        self.decide(body, target_center_x, rng);
        body.step(grid, config);
        body.clamp_horizontal(config.world_pixel_width());
    }
}

/// A night-time hostile that walks towards the player
#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
}

impl Enemy {
    /// Creates an enemy whose bottom-centre is at `(center_x, bottom)`
    pub fn new(center_x: i32, bottom: i32, config: &SimConfig) -> Self {
        let rect = Rect::from_bottom_center(center_x, bottom, config.enemy_width, config.enemy_height);
        Enemy {
            body: Body::new(rect, config.enemy_health),
        }
    }

    pub fn update<R: RandomSource + ?Sized>(&mut self, grid: &TileGrid, target_center_x: i32, config: &SimConfig, rng: &mut R) {
        ChasePolicy::enemy(config).update(&mut self.body, target_center_x, grid, config, rng);
    }

    /// Dead, or fell below the bottom of the world
    pub fn should_despawn(&self, config: &SimConfig) -> bool {
        !self.body.is_alive() || self.body.rect.top() > config.world_pixel_height()
    }
}

impl Collidable for Enemy {
    fn get_bounds(&self) -> Rect {
        self.body.rect
    }
}
