// Read-only view of a GameWorld for renderers, HUDs and the headless driver
//
// Everything the drawing layer needs for one frame, copied out of the world so
// it can be serialized or held onto without borrowing the simulation.

use super::story::StoryMessage;
use super::types::GameState;
use crate::body::Body;
use crate::clock::Rgb;
use crate::collision::Rect;
use crate::combat::Facing;
use crate::inventory::ResourceKind;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub rect: Rect,
    pub health: i32,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        BodySnapshot {
            rect: body.rect,
            health: body.health,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub rect: Rect,
    pub health: i32,
    pub on_ground: bool,
    pub facing: Facing,
    pub inventory: BTreeMap<ResourceKind, u32>,
    pub selected: ResourceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BossSnapshot {
    pub rect: Rect,
    pub health: i32,
    pub defeated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub day_count: u32,
    pub time_of_day: u32,
    pub day_length: u32,
    pub brightness: f32,
    pub is_night: bool,
    pub sky: Rgb,
    pub state: GameState,
    pub player: PlayerSnapshot,
    pub enemies: Vec<BodySnapshot>,
    pub boss: Option<BossSnapshot>,
    pub story: Option<StoryMessage>,
}
