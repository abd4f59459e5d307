// GameWorld struct and the per-tick update
//
// GameWorld owns every piece of simulation state: the tile grid, the player, the
// hostiles (through SpawnManager), the clock and the story banner. The outside
// world drives it through three kinds of call:
// - input: set_movement_intent / set_selected_resource / request_* / apply
// - time: tick, once per frame
// - reads: grid, player, enemies, boss, clock getters and snapshot

use super::snapshot::{BodySnapshot, BossSnapshot, PlayerSnapshot, WorldSnapshot};
use super::story::{StoryBanner, StoryMessage};
use super::types::{GameState, TickReport};
use crate::boss::Boss;
use crate::clock::{Rgb, WorldClock};
use crate::combat::{DamageEvent, DamageSource, apply_contact_damage};
use crate::config::SimConfig;
use crate::enemy::Enemy;
use crate::input::{GameAction, InputState};
use crate::inventory::{BlockOutcome, RejectReason, ResourceKind};
use crate::player::Player;
use crate::random::RandomSource;
use crate::spawn::SpawnManager;
use crate::terrain;
use crate::tile::TileGrid;
use tracing::{debug, info};

/// GameWorld encapsulates all game entities and world state
#[derive(Debug, Clone)]
pub struct GameWorld {
    config: SimConfig,
    grid: TileGrid,
    player: Player,
    clock: WorldClock,
    spawner: SpawnManager,
    state: GameState,
    story: StoryBanner,
    input: InputState,
    ticks: u64,
}

impl GameWorld {
    /// Generates fresh terrain and drops the player on it
    pub fn new<R: RandomSource + ?Sized>(config: SimConfig, rng: &mut R) -> Self {
        let grid = terrain::generate_with(config.world_width, config.world_height, rng);
        info!(
            width = grid.width(),
            height = grid.height(),
            "world generated"
        );
        Self::with_grid(config, grid)
    }

    /// Builds a world around an existing grid
    ///
    /// The config's world dimensions are overwritten with the grid's so clamping
    /// and the fall-out-of-world check always match the terrain.
    pub fn with_grid(mut config: SimConfig, grid: TileGrid) -> Self {
        config.world_width = grid.width();
        config.world_height = grid.height();

        let player = Player::spawn(&grid, &config);
        GameWorld {
            clock: WorldClock::new(config.day_length),
            story: StoryBanner::new(config.story_banner_frames),
            spawner: SpawnManager::new(),
            state: GameState::Playing,
            input: InputState::default(),
            ticks: 0,
            player,
            grid,
            config,
        }
    }

    /// Advances the simulation by one frame
    ///
    /// Order within a tick: clock, player movement, player attack, enemies,
    /// boss, despawn and defeat checks, spawns, story banner, death check.
    /// Once the player is dead this does nothing.
    pub fn tick<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        if self.state != GameState::Playing {
            return report;
        }
        self.ticks += 1;

        if self.clock.advance() {
            report.new_day = true;
            info!(day = self.clock.day_count(), "a new day begins");
        }

        // Player
        self.player.handle_input(&self.input, &self.config);
        self.player.tick(&self.grid, &self.config);

        if let Some(attack) = self.player.take_attack(&self.config) {
            let cooldown = self.config.enemy_hurt_cooldown_frames;
            for enemy in self.spawner.enemies_mut() {
                if attack.strike(&mut enemy.body, cooldown) {
                    report.hits_landed += 1;
                }
            }
            if let Some(boss) = self.spawner.boss_mut().filter(|boss| boss.is_active()) {
                if attack.strike(&mut boss.body, cooldown) {
                    report.hits_landed += 1;
                    debug!(health = boss.body.health, "boss hit");
                }
            }
        }

        let target_x = self.player.body.rect.center_x();
        let hurt_cooldown = self.config.hurt_cooldown_frames;

        // Enemies, in spawn order
        let enemy_hit = DamageEvent::new(self.config.enemy_contact_damage, DamageSource::Enemy);
        for enemy in self.spawner.enemies_mut() {
            if !enemy.body.is_alive() {
                continue;
            }
            enemy.update(&self.grid, target_x, &self.config, rng);
            if apply_contact_damage(
                &enemy.body.rect,
                &mut self.player.body,
                enemy_hit,
                self.config.enemy_knockback,
                hurt_cooldown,
            ) {
                report.damage_taken += enemy_hit.amount;
            }
        }

        // Boss
        let boss_hit = DamageEvent::new(self.config.boss_contact_damage, DamageSource::Boss);
        if let Some(boss) = self.spawner.boss_mut() {
            if boss.is_active() && boss.body.is_alive() {
                boss.update(&self.grid, target_x, &self.config, rng);
                if apply_contact_damage(
                    &boss.body.rect,
                    &mut self.player.body,
                    boss_hit,
                    self.config.boss_knockback,
                    hurt_cooldown,
                ) {
                    report.damage_taken += boss_hit.amount;
                }
            }
        }
        if report.damage_taken > 0 {
            debug!(damage = report.damage_taken, health = self.player.body.health, "player hurt");
        }

        // Bookkeeping
        report.despawned = self.spawner.despawn(&self.config);
        if let Some(boss) = self.spawner.boss_mut() {
            if boss.check_defeated() {
                report.boss_defeated = true;
                self.story.show(StoryMessage::Victory);
                info!(day = self.clock.day_count(), "the boss has been defeated");
            }
        }

        report.spawn = self.spawner.update_night_spawns(
            self.clock.is_night(),
            &self.grid,
            &self.player,
            &self.config,
            rng,
        );
        if self.spawner.check_boss_unlock(&self.grid, &self.player, &self.config) {
            report.boss_spawned = true;
            self.story.show(StoryMessage::BossAwakened);
        }

        self.story.tick();

        if self.player.is_dead() {
            self.state = GameState::Dead;
            report.player_died = true;
            info!(day = self.clock.day_count(), ticks = self.ticks, "player died");
        }

        report
    }

    // === Input surface ===

    /// Held movement keys; they stay held until the next call
    pub fn set_movement_intent(&mut self, left: bool, right: bool, jump: bool) {
        self.input = InputState::new(left, right, jump);
    }

    pub fn set_selected_resource(&mut self, kind: ResourceKind) {
        self.player.select(kind);
    }

    /// Mines the tile under a world pixel, effective immediately
    pub fn request_mine(&mut self, world_x: i32, world_y: i32) -> BlockOutcome {
        if self.state != GameState::Playing {
            return BlockOutcome::Rejected(RejectReason::GameOver);
        }
        self.player.mine(&mut self.grid, &self.config, world_x, world_y)
    }

    /// Places the selected resource at a world pixel, effective immediately
    pub fn request_place(&mut self, world_x: i32, world_y: i32) -> BlockOutcome {
        if self.state != GameState::Playing {
            return BlockOutcome::Rejected(RejectReason::GameOver);
        }
        self.player.place(&mut self.grid, &self.config, world_x, world_y)
    }

    /// Swings on the next tick, if the attack cooldown allows it
    pub fn request_attack(&mut self) {
        self.player.request_attack();
    }

    /// Dispatches one input action; mine and place report their outcome
    pub fn apply(&mut self, action: GameAction) -> Option<BlockOutcome> {
        match action {
            GameAction::Move(input) => {
                self.input = input;
                None
            }
            GameAction::SelectResource(kind) => {
                self.set_selected_resource(kind);
                None
            }
            GameAction::SelectHotbar(key) => {
                match ResourceKind::from_hotbar_key(key) {
                    Some(kind) => self.set_selected_resource(kind),
                    None => debug!(key, "no resource on hotbar key"),
                }
                None
            }
            GameAction::Mine { x, y } => Some(self.request_mine(x, y)),
            GameAction::Place { x, y } => Some(self.request_place(x, y)),
            GameAction::Attack => {
                self.request_attack();
                None
            }
        }
    }

    // === Read surface ===

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        self.spawner.enemies()
    }

    /// The boss, until it is defeated
    pub fn boss(&self) -> Option<&Boss> {
        self.spawner.boss().filter(|boss| boss.is_active())
    }

    pub fn boss_spawned(&self) -> bool {
        self.spawner.boss_spawned()
    }

    pub fn boss_defeated(&self) -> bool {
        self.spawner.boss_defeated()
    }

    pub fn clock(&self) -> &WorldClock {
        &self.clock
    }

    pub fn brightness(&self) -> f32 {
        self.clock.brightness()
    }

    pub fn day_count(&self) -> u32 {
        self.clock.day_count()
    }

    pub fn sky_color(&self) -> Rgb {
        self.clock.sky_color()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::Dead
    }

    pub fn story(&self) -> &StoryBanner {
        &self.story
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let player = &self.player;
        WorldSnapshot {
            tick: self.ticks,
            day_count: self.clock.day_count(),
            time_of_day: self.clock.time_of_day(),
            day_length: self.clock.day_length(),
            brightness: self.clock.brightness(),
            is_night: self.clock.is_night(),
            sky: self.clock.sky_color(),
            state: self.state,
            player: PlayerSnapshot {
                rect: player.body.rect,
                health: player.body.health,
                on_ground: player.body.on_ground,
                facing: player.facing,
                inventory: player.inventory.to_map(),
                selected: player.selected,
            },
            enemies: self.spawner.enemies().iter().map(|enemy| BodySnapshot::from(&enemy.body)).collect(),
            boss: self.spawner.boss().map(|boss| BossSnapshot {
                rect: boss.body.rect,
                health: boss.body.health,
                defeated: boss.defeated,
            }),
            story: self.story.visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::scripted::ScriptedRandom;
    use crate::spawn::SpawnAttempt;
    use crate::tile::TileId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TILE: i32 = 32;

    /// 40x12 world: air above row 8, stone from row 8 down
    fn flat_grid() -> TileGrid {
        let mut grid = TileGrid::new(40, 12, TileId::Air);
        for x in 0..40 {
            for y in 8..12 {
                grid.set_tile(x, y, TileId::Stone);
            }
        }
        grid
    }

    fn test_config() -> SimConfig {
        SimConfig {
            enemy_spawn_interval: 5,
            ..SimConfig::default()
        }
    }

    fn flat_world() -> GameWorld {
        GameWorld::with_grid(test_config(), flat_grid())
    }

    #[test]
    fn test_new_world_places_player_on_surface() {
        let config = SimConfig {
            world_width: 30,
            world_height: 20,
            ..SimConfig::default()
        };
        let world = GameWorld::new(config, &mut StdRng::seed_from_u64(1));

        let surface = world.grid().surface_row(5).unwrap();
        assert_eq!(world.player().body.rect.bottom(), surface * TILE);
        assert_eq!(world.state(), GameState::Playing);
        assert_eq!(world.brightness(), 1.0);
        assert_eq!(world.story().visible(), Some(StoryMessage::Intro));
    }

    #[test]
    fn test_with_grid_takes_grid_dimensions() {
        let world = flat_world();
        assert_eq!(world.config().world_width, 40);
        assert_eq!(world.config().world_height, 12);
    }

    #[test]
    fn test_no_night_spawns_at_full_day() {
        let mut world = flat_world();
        let mut rng = ScriptedRandom::with_picks(&[30; 10]);

        for _ in 0..20 {
            let report = world.tick(&mut rng);
            assert_eq!(report.spawn, SpawnAttempt::Waiting);
        }
        assert!(world.enemies().is_empty());
    }

    #[test]
    fn test_night_spawns_at_midnight() {
        let mut world = flat_world();
        world.clock = WorldClock::at(world.config.day_length, world.config.day_length / 2);
        assert_eq!(world.brightness(), 0.0);
        let mut rng = ScriptedRandom::with_picks(&[30]);

        let reports: Vec<_> = (0..5).map(|_| world.tick(&mut rng)).collect();

        assert_eq!(reports[4].spawn, SpawnAttempt::Spawned { column: 30 });
        assert_eq!(world.enemies().len(), 1);
        assert_eq!(world.enemies()[0].body.rect.bottom(), 8 * TILE);
    }

    #[test]
    fn test_day_rolls_over() {
        let config = SimConfig {
            day_length: 10,
            ..test_config()
        };
        let mut world = GameWorld::with_grid(config, flat_grid());
        let mut rng = ScriptedRandom::new();

        let new_days = (0..10).filter(|_| world.tick(&mut rng).new_day).count();

        assert_eq!(new_days, 1);
        assert_eq!(world.day_count(), 1);
        assert_eq!(world.clock().time_of_day(), 0);
    }

    #[test]
    fn test_movement_intent_moves_player() {
        let mut world = flat_world();
        let mut rng = ScriptedRandom::new();
        let start_x = world.player().body.rect.x;

        world.set_movement_intent(false, true, false);
        world.tick(&mut rng);
        world.tick(&mut rng);

        assert_eq!(world.player().body.rect.x, start_x + 8);
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut world = flat_world();

        assert_eq!(world.apply(GameAction::SelectResource(ResourceKind::Stone)), None);
        assert_eq!(world.player().selected, ResourceKind::Stone);

        world.apply(GameAction::SelectHotbar(4));
        assert_eq!(world.player().selected, ResourceKind::Wood);
        world.apply(GameAction::SelectHotbar(9));
        assert_eq!(world.player().selected, ResourceKind::Wood);
        world.apply(GameAction::SelectHotbar(2));
        assert_eq!(world.player().selected, ResourceKind::Stone);

        // Player stands on (5, 8); (6, 8) is next to its feet.
        let outcome = world.apply(GameAction::Mine { x: 6 * TILE + 5, y: 8 * TILE + 5 });
        assert_eq!(outcome, Some(BlockOutcome::Mined(ResourceKind::Stone)));
        assert_eq!(world.grid().get_tile(6, 8), Some(TileId::Air));

        let outcome = world.apply(GameAction::Place { x: 6 * TILE + 5, y: 8 * TILE + 5 });
        assert_eq!(outcome, Some(BlockOutcome::Placed(ResourceKind::Stone)));
        assert_eq!(world.grid().get_tile(6, 8), Some(TileId::Stone));
        assert_eq!(world.player().inventory.count(ResourceKind::Stone), 0);
    }

    #[test]
    fn test_boss_spawns_once_when_ore_crosses_threshold() {
        let mut world = flat_world();
        let mut rng = ScriptedRandom::new();
        world.player.inventory.add(ResourceKind::Ore, 9);
        world.grid.set_tile(6, 8, TileId::Ore);

        assert!(!world.tick(&mut rng).boss_spawned);
        assert!(world.boss().is_none());

        let outcome = world.request_mine(6 * TILE + 5, 8 * TILE + 5);
        assert_eq!(outcome, BlockOutcome::Mined(ResourceKind::Ore));
        assert!(world.tick(&mut rng).boss_spawned);
        assert!(world.boss().is_some());
        assert_eq!(world.story().visible(), Some(StoryMessage::BossAwakened));

        world.player.inventory.add(ResourceKind::Ore, 25);
        for _ in 0..10 {
            assert!(!world.tick(&mut rng).boss_spawned);
        }
        assert!(world.boss_spawned());
    }

    #[test]
    fn test_contact_damage_and_cooldown() {
        let mut world = flat_world();
        let mut rng = ScriptedRandom::new();
        let center_x = world.player().body.rect.center_x();
        world.spawner.push_enemy(Enemy::new(center_x, 8 * TILE, &world.config));

        let report = world.tick(&mut rng);
        assert_eq!(report.damage_taken, 10);
        assert_eq!(world.player().body.health, 90);
        // The enemy stepped right of the player's centre, so the shove is to the left.
        assert_eq!(world.player().body.vel_x, -2.0);

        for _ in 0..30 {
            world.tick(&mut rng);
        }
        assert_eq!(world.player().body.health, 90);
    }

    #[test]
    fn test_death_ends_the_game() {
        let mut world = flat_world();
        let mut rng = ScriptedRandom::new();
        let center_x = world.player().body.rect.center_x();
        world.spawner.push_enemy(Enemy::new(center_x, 8 * TILE, &world.config));
        world.player.body.health = 5;

        let report = world.tick(&mut rng);
        assert!(report.player_died);
        assert!(world.is_game_over());

        let time = world.clock().time_of_day();
        assert_eq!(world.tick(&mut rng), TickReport::default());
        assert_eq!(world.clock().time_of_day(), time);
        assert_eq!(
            world.request_mine(6 * TILE, 8 * TILE),
            BlockOutcome::Rejected(RejectReason::GameOver)
        );
        world.player.inventory.add(ResourceKind::Dirt, 1);
        world.set_selected_resource(ResourceKind::Dirt);
        assert_eq!(
            world.request_place(6 * TILE, 4 * TILE),
            BlockOutcome::Rejected(RejectReason::GameOver)
        );
        assert_eq!(world.grid().get_tile(6, 4), Some(TileId::Air));
        assert_eq!(world.player().inventory.count(ResourceKind::Dirt), 1);
    }

    #[test]
    fn test_attack_kills_enemy() {
        let mut world = flat_world();
        let mut rng = ScriptedRandom::new();
        let right = world.player().body.rect.right();
        let mut enemy = Enemy::new(right + TILE / 2, 8 * TILE, &world.config);
        enemy.body.health = 10;
        world.spawner.push_enemy(enemy);

        world.request_attack();
        let report = world.tick(&mut rng);

        assert_eq!(report.hits_landed, 1);
        assert_eq!(report.despawned, 1);
        assert!(world.enemies().is_empty());
        assert_eq!(report.damage_taken, 0);
    }

    #[test]
    fn test_defeating_the_boss() {
        let mut world = flat_world();
        let mut rng = ScriptedRandom::new();
        world.player.inventory.add(ResourceKind::Ore, 10);
        assert!(world.tick(&mut rng).boss_spawned);

        let right = world.player().body.rect.right();
        let boss = world.spawner.boss_mut().unwrap();
        boss.body.rect.set_left(right);
        boss.body.health = 10;

        world.request_attack();
        let report = world.tick(&mut rng);

        assert!(report.boss_defeated);
        assert!(world.boss_defeated());
        assert!(world.boss().is_none());
        assert_eq!(world.story().visible(), Some(StoryMessage::Victory));
        assert_eq!(world.player().body.health, 100);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut world = flat_world();
        world.player.inventory.add(ResourceKind::Ore, 3);

        let json = serde_json::to_value(world.snapshot()).unwrap();

        assert_eq!(json["state"], "Playing");
        assert_eq!(json["day_length"], 1200);
        assert_eq!(json["player"]["inventory"]["ore"], 3);
        assert_eq!(json["player"]["health"], 100);
        assert!(json["boss"].is_null());
        assert_eq!(json["enemies"].as_array().unwrap().len(), 0);
    }
}
