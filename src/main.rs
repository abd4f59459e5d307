use rand::SeedableRng;
use rand::rngs::StdRng;
use terra_clone::collision::{Rect, check_collisions_with_collection};
use terra_clone::{GameWorld, SimConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_TICKS: u64 = 60 * 60;
/// Mine the tile under the player's feet this often
const MINE_INTERVAL: u64 = 30;
const ATTACK_INTERVAL: u64 = 20;
/// Turn around this many pixels before the world edge
const EDGE_MARGIN: i32 = 64;

/// Headless driver: `terra_clone [ticks] [seed]`
///
/// Runs the simulation with a simple scripted player (walk, hop over walls, dig
/// down now and then, swing at anything nearby) and prints the final world
/// snapshot as JSON.
fn main() -> Result<(), String> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let ticks = match args.next() {
        Some(raw) => raw.parse::<u64>().map_err(|e| format!("Invalid tick count {:?}: {}", raw, e))?,
        None => DEFAULT_TICKS,
    };
    let seed = match args.next() {
        Some(raw) => raw.parse::<u64>().map_err(|e| format!("Invalid seed {:?}: {}", raw, e))?,
        None => rand::random(),
    };

    let config = SimConfig::load_or_default().map_err(|e| format!("Failed to load config: {}", e))?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = GameWorld::new(config, &mut rng);
    info!(seed, ticks, "simulation started");

    let world_right = world.config().world_pixel_width();
    let mut moving_right = true;
    let mut last_x = world.player().body.rect.x;

    for tick in 1..=ticks {
        let rect = world.player().body.rect;
        if rect.right() > world_right - EDGE_MARGIN {
            moving_right = false;
        } else if rect.left() < EDGE_MARGIN {
            moving_right = true;
        }
        let blocked = rect.x == last_x;
        last_x = rect.x;
        world.set_movement_intent(!moving_right, moving_right, blocked);

        if tick % MINE_INTERVAL == 0 {
            let outcome = world.request_mine(rect.center_x(), rect.bottom() + 1);
            if outcome.is_applied() {
                info!(?outcome, ore = world.player().ore_count(), "dug down");
            }
        }
        if tick % ATTACK_INTERVAL == 0 {
            let tile = world.config().tile_size;
            let swing_area = Rect::new(rect.x - tile, rect.y, rect.width + 2 * tile, rect.height);
            let enemies_near = !check_collisions_with_collection(&swing_area, world.enemies()).is_empty();
            let boss_near = world
                .boss()
                .is_some_and(|boss| !check_collisions_with_collection(&swing_area, std::slice::from_ref(boss)).is_empty());
            if enemies_near || boss_near {
                world.request_attack();
            }
        }

        let report = world.tick(&mut rng);
        if report.damage_taken > 0 {
            warn!(damage = report.damage_taken, health = world.player().body.health, "player hurt");
        }
        if world.is_game_over() {
            break;
        }
    }

    let snapshot = world.snapshot();
    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| format!("Failed to serialize snapshot: {}", e))?;
    println!("{}", json);

    info!(
        ticks = world.ticks(),
        days = world.day_count(),
        state = ?world.state(),
        boss_defeated = world.boss_defeated(),
        "simulation finished"
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
