use crate::body::Body;
use crate::collision::{Collidable, Rect};
use crate::config::SimConfig;
use crate::enemy::ChasePolicy;
use crate::random::RandomSource;
use crate::tile::TileGrid;

/// The single boss, woken by hoarding ore
///
/// Same chase-and-hop behaviour as an [`Enemy`](crate::enemy::Enemy) with a bigger
/// body, more health, faster walk and full-height jumps. Once `defeated` is set
/// the boss stops updating and is never replaced.
#[derive(Debug, Clone)]
pub struct Boss {
    pub body: Body,
    pub defeated: bool,
}

impl Boss {
    /// Creates the boss with its bottom-centre at `(center_x, bottom)`
    pub fn new(center_x: i32, bottom: i32, config: &SimConfig) -> Self {
        let side = config.boss_size_tiles * config.tile_size;
        Boss {
            body: Body::new(Rect::from_bottom_center(center_x, bottom, side, side), config.boss_health),
            defeated: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.defeated
    }

    pub fn update<R: RandomSource + ?Sized>(&mut self, grid: &TileGrid, target_center_x: i32, config: &SimConfig, rng: &mut R) {
        if self.defeated {
            return;
        }
        ChasePolicy::boss(config).update(&mut self.body, target_center_x, grid, config, rng);
    }

    /// Flags the boss defeated once its health is gone; true on the transition tick
    pub fn check_defeated(&mut self) -> bool {
        if self.defeated || self.body.is_alive() {
            return false;
        }
        self.defeated = true;
        true
    }
}

impl Collidable for Boss {
    fn get_bounds(&self) -> Rect {
        self.body.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::scripted::ScriptedRandom;
    use crate::tile::TileId;

    #[test]
    fn test_boss_dimensions_and_health() {
        let config = SimConfig::default();
        let boss = Boss::new(640, 320, &config);

        assert_eq!(boss.body.rect.width, 128);
        assert_eq!(boss.body.rect.height, 128);
        assert_eq!(boss.body.rect.bottom(), 320);
        assert_eq!(boss.body.rect.center_x(), 640);
        assert_eq!(boss.body.health, 250);
        assert!(boss.is_active());
    }

    #[test]
    fn test_boss_policy_is_faster_with_full_jump() {
        let config = SimConfig::default();
        let mut boss = Boss::new(640, 320, &config);
        boss.body.on_ground = true;
        let mut rng = ScriptedRandom::with_chances(&[0.01]);

        ChasePolicy::boss(&config).decide(&mut boss.body, 0, &mut rng);

        assert_eq!(boss.body.vel_x, -2.25);
        assert_eq!(boss.body.vel_y, -12.0);
    }

    #[test]
    fn test_boss_skips_jump_above_chance() {
        let config = SimConfig::default();
        let mut boss = Boss::new(640, 320, &config);
        boss.body.on_ground = true;
        let mut rng = ScriptedRandom::with_chances(&[0.03]);

        ChasePolicy::boss(&config).decide(&mut boss.body, 1000, &mut rng);

        assert_eq!(boss.body.vel_x, 2.25);
        assert_eq!(boss.body.vel_y, 0.0);
    }

    #[test]
    fn test_defeat_transition_happens_once() {
        let config = SimConfig::default();
        let mut boss = Boss::new(640, 320, &config);
        assert!(!boss.check_defeated());

        boss.body.health = -5;
        assert!(boss.check_defeated());
        assert!(!boss.check_defeated());
        assert!(!boss.is_active());
    }

    #[test]
    fn test_defeated_boss_stops_moving() {
        let config = SimConfig::default();
        let grid = TileGrid::new(10, 10, TileId::Air);
        let mut boss = Boss::new(160, 160, &config);
        boss.defeated = true;
        let before = boss.body.clone();

        boss.update(&grid, 0, &config, &mut ScriptedRandom::new());

        assert_eq!(boss.body, before);
    }
}
