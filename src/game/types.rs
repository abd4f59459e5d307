// Shared enums and helper structs used by the game loop

use crate::spawn::SpawnAttempt;
use serde::Serialize;

/// Game state enum for tracking current game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GameState {
    #[default]
    Playing,
    Dead, // player health reached zero; ticks are no-ops from here on
}

/// Everything notable that happened during one `GameWorld::tick`
///
/// The simulation never needs this itself; it exists so a driver can log or
/// react to lifecycle events without diffing snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// The clock wrapped into a new day
    pub new_day: bool,
    /// Hostiles the player's swing damaged this tick
    pub hits_landed: u32,
    /// Health the player lost to contact damage this tick
    pub damage_taken: i32,
    pub despawned: usize,
    pub spawn: SpawnAttempt,
    pub boss_spawned: bool,
    pub boss_defeated: bool,
    pub player_died: bool,
}

impl Default for TickReport {
    fn default() -> Self {
        TickReport {
            new_day: false,
            hits_landed: 0,
            damage_taken: 0,
            despawned: 0,
            spawn: SpawnAttempt::Waiting,
            boss_spawned: false,
            boss_defeated: false,
            player_died: false,
        }
    }
}
