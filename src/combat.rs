//! Combat: contact damage, knockback and the player's melee attack
//!
//! This module sits on top of [`Body`] health and cooldowns:
//! - Hostiles hurt the player by touching them (`apply_contact_damage`)
//! - The player hurts hostiles with a short-range swing (`AttackEvent`)
//!
//! Both sides respect `hurt_cooldown`: a body that was just hit ignores further
//! hits until its cooldown runs out, so overlapping for several frames costs one
//! hit, not one per frame.

use crate::body::Body;
use crate::collision::{Rect, aabb_intersect};
use serde::Serialize;

/// Source of damage for tracking and game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DamageSource {
    /// A night-spawned enemy
    Enemy,
    Boss,
    /// The player's melee attack
    Player,
}

/// A single hit with its numbers and origin
///
/// # Example
///
/// ```rust
/// use terra_clone::combat::{DamageEvent, DamageSource};
///
/// let hit = DamageEvent::new(10, DamageSource::Enemy);
/// assert_eq!(hit.amount, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageEvent {
    pub amount: i32,
    pub source: DamageSource,
}

impl DamageEvent {
    pub fn new(amount: i32, source: DamageSource) -> Self {
        DamageEvent { amount, source }
    }
}

/// Horizontal facing, used to place the attack hitbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal velocity, `None` when standing still
    pub fn from_velocity(vel_x: f32) -> Option<Facing> {
        if vel_x > 0.0 {
            Some(Facing::Right)
        } else if vel_x < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Applies `event` to `victim` if it isn't in its hurt cooldown
///
/// Returns true if the hit landed. A landed hit also starts the victim's cooldown.
pub fn apply_hit(victim: &mut Body, event: DamageEvent, cooldown_frames: u32) -> bool {
    if victim.hurt_cooldown > 0 {
        return false;
    }
    victim.health -= event.amount;
    victim.hurt_cooldown = cooldown_frames;
    true
}

/// Contact damage from a hostile touching the player
///
/// On a landed hit the player is also shoved away from the attacker: towards +x
/// when the attacker's centre is left of the player's, towards -x otherwise.
pub fn apply_contact_damage(
    attacker: &Rect,
    player: &mut Body,
    event: DamageEvent,
    knockback: f32,
    cooldown_frames: u32,
) -> bool {
    if !aabb_intersect(attacker, &player.rect) {
        return false;
    }
    if !apply_hit(player, event, cooldown_frames) {
        return false;
    }

    if attacker.center_x() < player.rect.center_x() {
        player.vel_x += knockback;
    } else {
        player.vel_x -= knockback;
    }
    true
}

/// Attack event information
///
/// Created when the player swings; the hitbox is a strip as tall as the player and
/// `range` pixels wide, directly beside the facing side.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackEvent {
    pub damage: i32,
    pub hitbox: Rect,
}

impl AttackEvent {
    pub fn new(attacker: &Rect, facing: Facing, range: i32, damage: i32) -> Self {
        let x = match facing {
            Facing::Right => attacker.right(),
            Facing::Left => attacker.left() - range,
        };
        AttackEvent {
            damage,
            hitbox: Rect::new(x, attacker.top(), range, attacker.height),
        }
    }

    /// Hits `target` if it is inside the hitbox; returns true when damage landed
    pub fn strike(&self, target: &mut Body, cooldown_frames: u32) -> bool {
        aabb_intersect(&self.hitbox, &target.rect)
            && apply_hit(target, DamageEvent::new(self.damage, DamageSource::Player), cooldown_frames)
    }
}
