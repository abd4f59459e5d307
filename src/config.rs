//! Simulation tuning constants and their loading/validation
//!
//! Every number the simulation reads lives in [`SimConfig`]. The defaults are the
//! values the game ships with; a JSON file can override any subset of them because
//! every field falls back to its default when missing.
//!
//! # Example
//!
//! ```rust
//! use terra_clone::config::SimConfig;
//!
//! let config = SimConfig::from_json_str(r#"{ "world_width": 40 }"#).unwrap();
//! assert_eq!(config.world_width, 40);
//! assert_eq!(config.world_height, 60); // untouched fields keep their defaults
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Directory (under the platform config dir) that holds `config.json`
const CONFIG_DIR_NAME: &str = "terra_clone";
const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// All tuning constants of the simulation
///
/// Distances are in pixels unless the field name says `tiles`; durations are in
/// simulation ticks (frames at 60 Hz).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === World ===
    pub tile_size: i32,
    pub world_width: usize,
    pub world_height: usize,

    // === Physics ===
    pub gravity: f32,

    // === Player ===
    pub player_speed: f32,
    pub player_jump: f32,
    pub player_health: i32,
    pub player_width: i32,
    pub player_height: i32,
    pub player_spawn_column: usize,
    pub reach_tiles: i32,
    pub player_attack_damage: i32,
    pub player_attack_cooldown: u32,
    pub attack_reach_tiles: i32,
    pub hurt_cooldown_frames: u32,

    // === Enemies ===
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub enemy_speed: f32,
    pub enemy_jump_chance: f32,
    pub enemy_jump_factor: f32,
    pub enemy_health: i32,
    pub enemy_contact_damage: i32,
    pub enemy_knockback: f32,
    pub enemy_hurt_cooldown_frames: u32,

    // === Boss ===
    pub boss_health: i32,
    pub boss_speed_factor: f32,
    pub boss_jump_chance: f32,
    pub boss_size_tiles: i32,
    pub boss_contact_damage: i32,
    pub boss_knockback: f32,
    pub boss_spawn_ore_count: u32,

    // === Day/night and spawning ===
    pub day_length: u32,
    pub enemy_spawn_interval: u32,
    pub spawn_exclusion_radius: i32,

    // === Presentation state ===
    pub story_banner_frames: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        let tile_size = 32;
        SimConfig {
            tile_size,
            world_width: 100,
            world_height: 60,

            gravity: 0.6,

            player_speed: 4.0,
            player_jump: 12.0,
            player_health: 100,
            player_width: tile_size,
            player_height: tile_size * 3 / 2,
            player_spawn_column: 5,
            reach_tiles: 4,
            player_attack_damage: 10,
            player_attack_cooldown: 20,
            attack_reach_tiles: 1,
            hurt_cooldown_frames: 60,

            enemy_width: tile_size,
            enemy_height: tile_size * 3 / 2,
            enemy_speed: 1.5,
            enemy_jump_chance: 0.01,
            enemy_jump_factor: 0.8,
            enemy_health: 30,
            enemy_contact_damage: 10,
            enemy_knockback: 2.0,
            enemy_hurt_cooldown_frames: 20,

            boss_health: 250,
            boss_speed_factor: 1.5,
            boss_jump_chance: 0.02,
            boss_size_tiles: 4,
            boss_contact_damage: 20,
            boss_knockback: 4.0,
            boss_spawn_ore_count: 10,

            day_length: 60 * 20,
            enemy_spawn_interval: 4 * 60,
            spawn_exclusion_radius: 10,

            story_banner_frames: 600,
        }
    }
}

impl SimConfig {
    /// Parses a JSON document and validates the result
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        info!(path = %path.display(), "loaded simulation config");
        Ok(config)
    }

    /// `<platform config dir>/terra_clone/config.json`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config at [`SimConfig::default_path`] when it exists, defaults otherwise
    ///
    /// A file that exists but fails to parse or validate is still an error; silently
    /// ignoring a broken override would hide the mistake.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.tile_size <= 0 {
            return Err(invalid("tile_size", "must be positive"));
        }
        if self.world_width == 0 {
            return Err(invalid("world_width", "must be at least 1"));
        }
        if self.world_height == 0 {
            return Err(invalid("world_height", "must be at least 1"));
        }
        if self.day_length == 0 {
            return Err(invalid("day_length", "must be at least 1"));
        }
        if self.enemy_spawn_interval == 0 {
            return Err(invalid("enemy_spawn_interval", "must be at least 1"));
        }
        if self.player_width <= 0 || self.player_height <= 0 {
            return Err(invalid("player_width", "player size must be positive"));
        }
        if self.enemy_width <= 0 || self.enemy_height <= 0 {
            return Err(invalid("enemy_width", "enemy size must be positive"));
        }
        if self.boss_size_tiles <= 0 {
            return Err(invalid("boss_size_tiles", "must be positive"));
        }

        // Everything in pixel space is i32; the world's far edges must be representable.
        for (field, tiles) in [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
        ] {
            let pixels = i32::try_from(tiles)
                .ok()
                .and_then(|tiles| tiles.checked_mul(self.tile_size));
            if pixels.is_none() {
                return Err(invalid(
                    "tile_size",
                    format!("{} of {} tiles at {} px overflows pixel coordinates", field, tiles, self.tile_size),
                ));
            }
        }
        if self.boss_size_tiles.checked_mul(self.tile_size).is_none() {
            return Err(invalid("boss_size_tiles", "boss size overflows pixel coordinates"));
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("player_speed", self.player_speed),
            ("player_jump", self.player_jump),
            ("enemy_speed", self.enemy_speed),
            ("enemy_jump_factor", self.enemy_jump_factor),
            ("enemy_knockback", self.enemy_knockback),
            ("boss_speed_factor", self.boss_speed_factor),
            ("boss_knockback", self.boss_knockback),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("expected a finite value >= 0, got {}", value)));
            }
        }

        let probabilities = [
            ("enemy_jump_chance", self.enemy_jump_chance),
            ("boss_jump_chance", self.boss_jump_chance),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("expected a probability in [0, 1], got {}", value)));
            }
        }

        Ok(())
    }

    /// Width of the world in pixels
    pub fn world_pixel_width(&self) -> i32 {
        self.world_width as i32 * self.tile_size
    }

    /// Height of the world in pixels
    pub fn world_pixel_height(&self) -> i32 {
        self.world_height as i32 * self.tile_size
    }
}
