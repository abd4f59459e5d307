//! Simulation core of a 2D tile sandbox: terrain, physics, mining and building,
//! a day/night cycle, night-time enemies and an ore-triggered boss.
//!
//! The crate has no rendering or input handling of its own. A front end owns a
//! [`GameWorld`], feeds it input through the `set_*`/`request_*` calls, calls
//! [`GameWorld::tick`] once per frame and draws from the read accessors or a
//! [`WorldSnapshot`].
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use terra_clone::{GameWorld, SimConfig};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut world = GameWorld::new(SimConfig::default(), &mut rng);
//!
//! world.set_movement_intent(false, true, false);
//! for _ in 0..60 {
//!     world.tick(&mut rng);
//! }
//! assert_eq!(world.clock().time_of_day(), 60);
//! ```

pub mod body;
pub mod boss;
pub mod clock;
pub mod collision;
pub mod combat;
pub mod config;
pub mod enemy;
pub mod game;
pub mod input;
pub mod inventory;
pub mod player;
pub mod random;
pub mod spawn;
pub mod terrain;
pub mod tile;

pub use config::{ConfigError, SimConfig};
pub use game::{GameState, GameWorld, TickReport, WorldSnapshot};
pub use input::{GameAction, InputState};
pub use inventory::{BlockOutcome, ResourceKind};
pub use random::RandomSource;
pub use tile::{TileGrid, TileId};
