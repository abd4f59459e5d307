// Game module - Contains the simulation loop and its state
//
// This module contains:
// - world.rs: GameWorld struct, the per-tick update and the input/read surface
// - types.rs: Shared enums and helper structs (GameState, TickReport)
// - story.rs: Story banner messages and their countdown
// - snapshot.rs: Serializable read-only view of a GameWorld

// Module declarations
pub mod snapshot;
pub mod story;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use snapshot::{BodySnapshot, BossSnapshot, PlayerSnapshot, WorldSnapshot};
pub use story::{StoryBanner, StoryMessage};
pub use types::*;
pub use world::GameWorld;
