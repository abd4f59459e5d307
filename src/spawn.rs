//! Hostile bookkeeping: night spawns, the boss unlock, and despawning
//!
//! [`SpawnManager`] owns the active enemy list and the (at most one) boss. It never
//! moves anything itself; `GameWorld` updates the bodies and then asks the manager
//! to add or remove hostiles.

use crate::boss::Boss;
use crate::collision::world_to_tile;
use crate::config::SimConfig;
use crate::enemy::Enemy;
use crate::player::Player;
use crate::random::RandomSource;
use crate::tile::TileGrid;
use serde::Serialize;
use tracing::{debug, info};

/// What one tick of the night spawner did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpawnAttempt {
    /// Daytime, boss already defeated, or the interval hasn't elapsed
    Waiting,
    Spawned { column: i32 },
    /// The random column was within the exclusion radius of the player
    TooCloseToPlayer { column: i32 },
    /// The random column has no solid tile to stand on
    NoGround { column: i32 },
}

#[derive(Debug, Clone, Default)]
pub struct SpawnManager {
    spawn_timer: u32,
    enemies: Vec<Enemy>,
    boss: Option<Boss>,
}

impl SpawnManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn boss(&self) -> Option<&Boss> {
        self.boss.as_ref()
    }

    pub fn boss_mut(&mut self) -> Option<&mut Boss> {
        self.boss.as_mut()
    }

    /// The boss only ever spawns once; this stays true after it is defeated
    pub fn boss_spawned(&self) -> bool {
        self.boss.is_some()
    }

    pub fn boss_defeated(&self) -> bool {
        self.boss.as_ref().is_some_and(|boss| boss.defeated)
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    /// Adds an enemy directly, bypassing the night timer
    pub fn push_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Advances the night spawner by one tick
    ///
    /// Only runs at night while the boss is undefeated. Every `enemy_spawn_interval`
    /// ticks the timer resets and one spawn is attempted at a uniformly random
    /// column; the attempt is skipped if that column is within
    /// `spawn_exclusion_radius` tiles of the player or has no ground.
    pub fn update_night_spawns<R: RandomSource + ?Sized>(
        &mut self,
        is_night: bool,
        grid: &TileGrid,
        player: &Player,
        config: &SimConfig,
        rng: &mut R,
    ) -> SpawnAttempt {
        if !is_night || self.boss_defeated() {
            return SpawnAttempt::Waiting;
        }

        self.spawn_timer += 1;
        if self.spawn_timer < config.enemy_spawn_interval {
            return SpawnAttempt::Waiting;
        }
        self.spawn_timer = 0;

        let column = rng.below(grid.width()) as i32;
        let player_column = world_to_tile(player.body.rect.center_x(), config.tile_size);
        if (column - player_column).abs() <= config.spawn_exclusion_radius {
            debug!(column, player_column, "spawn skipped: too close to player");
            return SpawnAttempt::TooCloseToPlayer { column };
        }

        let Some(ground_row) = grid.surface_row(column) else {
            debug!(column, "spawn skipped: column has no ground");
            return SpawnAttempt::NoGround { column };
        };

        self.enemies.push(Enemy::new(
            column * config.tile_size,
            ground_row * config.tile_size,
            config,
        ));
        debug!(column, ground_row, active = self.enemies.len(), "enemy spawned");
        SpawnAttempt::Spawned { column }
    }

    /// Spawns the boss the first time the player holds enough ore
    ///
    /// The boss appears on the surface of the player's column (clamped into the
    /// world), centred on the player. Returns true on the tick it spawns.
    pub fn check_boss_unlock(&mut self, grid: &TileGrid, player: &Player, config: &SimConfig) -> bool {
        if self.boss.is_some() || player.ore_count() < config.boss_spawn_ore_count {
            return false;
        }

        let center_x = player.body.rect.center_x();
        let column = world_to_tile(center_x, config.tile_size).clamp(0, grid.width() as i32 - 1);
        let ground_row = grid.surface_row(column).unwrap_or(0);

        self.boss = Some(Boss::new(center_x, ground_row * config.tile_size, config));
        info!(column, ground_row, ore = player.ore_count(), "the boss has awoken");
        true
    }

    /// Removes dead or fallen enemies; returns how many were removed
    pub fn despawn(&mut self, config: &SimConfig) -> usize {
        let before = self.enemies.len();
        self.enemies.retain(|enemy| !enemy.should_despawn(config));
        before - self.enemies.len()
    }
}
