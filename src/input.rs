use crate::inventory::ResourceKind;
use serde::{Deserialize, Serialize};

/// Held movement keys for the current tick
///
/// The input layer fills this in from whatever device it polls; the simulation
/// only ever sees these three booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub fn new(left: bool, right: bool, jump: bool) -> Self {
        InputState { left, right, jump }
    }

    /// -1, 0 or +1; right wins when both directions are held
    pub fn horizontal(&self) -> i32 {
        if self.right {
            1
        } else if self.left {
            -1
        } else {
            0
        }
    }
}

/// Actions the player can perform in the game
///
/// This enum represents all possible high-level game actions that can be
/// triggered by input. It decouples input handling from action execution:
/// the input layer translates keys and clicks into these, and
/// `GameWorld::apply` carries them out with full validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameAction {
    // === Movement ===
    Move(InputState),

    // === Inventory ===
    SelectResource(ResourceKind),
    SelectHotbar(u8), // number keys 1-4; anything else is ignored

    // === World Interaction ===
    Mine { x: i32, y: i32 },   // world pixel coordinates
    Place { x: i32, y: i32 },  // world pixel coordinates

    // === Combat ===
    Attack,
}
