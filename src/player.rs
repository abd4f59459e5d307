use crate::body::Body;
use crate::collision::{Collidable, Rect};
use crate::combat::{AttackEvent, Facing};
use crate::config::SimConfig;
use crate::input::InputState;
use crate::inventory::{BlockOutcome, Inventory, ResourceKind, mine_block, place_block};
use crate::tile::TileGrid;

/// The player character: a body plus inventory, hotbar selection and attack state
///
/// The player never clamps to the world: walking off either edge is allowed and
/// the body just keeps falling once there is no ground under it.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub inventory: Inventory,
    pub selected: ResourceKind,
    pub facing: Facing,
    /// Frames until the next attack may start
    pub attack_cooldown: u32,
    attack_requested: bool,
}

impl Player {
    pub fn new(rect: Rect, health: i32) -> Self {
        Player {
            body: Body::new(rect, health),
            inventory: Inventory::new(),
            selected: ResourceKind::Dirt,
            facing: Facing::Right,
            attack_cooldown: 0,
            attack_requested: false,
        }
    }

    /// Creates the player standing on the first solid tile of the spawn column
    ///
    /// The spawn column is `player_spawn_column`, pulled inside narrow worlds. The
    /// player's bottom-centre sits on the left edge of that column, on top of its
    /// surface tile (row 0 if the column is all air).
    pub fn spawn(grid: &TileGrid, config: &SimConfig) -> Self {
        let column = config.player_spawn_column.min(grid.width() - 1) as i32;
        let ground_row = grid.surface_row(column).unwrap_or(0);
        let rect = Rect::from_bottom_center(
            column * config.tile_size,
            ground_row * config.tile_size,
            config.player_width,
            config.player_height,
        );
        Player::new(rect, config.player_health)
    }

    /// Turns held keys into velocity for this tick
    ///
    /// Horizontal velocity is replaced outright (so knockback lasts one tick);
    /// a jump only starts from the ground.
    pub fn handle_input(&mut self, input: &InputState, config: &SimConfig) {
        self.body.vel_x = input.horizontal() as f32 * config.player_speed;
        if let Some(facing) = Facing::from_velocity(self.body.vel_x) {
            self.facing = facing;
        }

        if input.jump && self.body.on_ground {
            self.body.jump(config.player_jump);
        }
    }

    pub fn select(&mut self, kind: ResourceKind) {
        self.selected = kind;
    }

    /// Moves the player one tick and counts down cooldowns
    pub fn tick(&mut self, grid: &TileGrid, config: &SimConfig) {
        self.body.step(grid, config);
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
    }

    pub fn mine(&mut self, grid: &mut TileGrid, config: &SimConfig, world_x: i32, world_y: i32) -> BlockOutcome {
        mine_block(
            grid,
            &mut self.inventory,
            &self.body.rect,
            config.tile_size,
            config.reach_tiles,
            world_x,
            world_y,
        )
    }

    pub fn place(&mut self, grid: &mut TileGrid, config: &SimConfig, world_x: i32, world_y: i32) -> BlockOutcome {
        place_block(
            grid,
            &mut self.inventory,
            self.selected,
            &self.body.rect,
            config.tile_size,
            world_x,
            world_y,
        )
    }

    /// Queues a swing for the next tick
    pub fn request_attack(&mut self) {
        self.attack_requested = true;
    }

    /// Consumes a queued swing; `None` if nothing was queued or still cooling down
    ///
    /// A request made during the cooldown is dropped rather than buffered.
    pub fn take_attack(&mut self, config: &SimConfig) -> Option<AttackEvent> {
        if !std::mem::take(&mut self.attack_requested) || self.attack_cooldown > 0 {
            return None;
        }
        self.attack_cooldown = config.player_attack_cooldown;
        Some(AttackEvent::new(
            &self.body.rect,
            self.facing,
            config.attack_reach_tiles * config.tile_size,
            config.player_attack_damage,
        ))
    }

    pub fn is_dead(&self) -> bool {
        !self.body.is_alive()
    }

    pub fn ore_count(&self) -> u32 {
        self.inventory.count(ResourceKind::Ore)
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        self.body.rect
    }
}
