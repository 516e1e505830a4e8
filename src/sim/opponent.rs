//! Opponents: basic patrol enemies and the boss
//!
//! Both are the same entity; what differs is fixed at construction:
//! - `Vulnerability` decides how a melee strike resolves
//! - `Behavior` decides how the opponent acts each tick
//! - `decisive` marks the opponent whose defeat ends the session

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// How an opponent reacts to being struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vulnerability {
    /// Any hit destroys it outright
    Fragile,
    /// Each hit removes one point; destroyed at zero
    Wounds { health: u32, max_health: u32 },
}

/// Bounded back-and-forth walk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patrol {
    pub speed: f32,
    /// +1.0 (right) or -1.0 (left)
    pub direction: f32,
    /// Distance walked since the last turn
    pub traveled: f32,
    /// Distance after which the patrol turns around
    pub limit: f32,
}

impl Patrol {
    pub fn new(speed: f32, limit: f32) -> Self {
        Self {
            speed,
            direction: 1.0,
            traveled: 0.0,
            limit,
        }
    }

    /// Horizontal displacement for this tick (advances the turn counter)
    pub fn step(&mut self) -> f32 {
        let dx = self.speed * self.direction;
        self.traveled += self.speed.abs();
        if self.traveled >= self.limit {
            self.direction = -self.direction;
            self.traveled = 0.0;
        }
        dx
    }
}

/// What an opponent does on its own each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Walks a fixed patrol route, ignoring terrain
    Patrol(Patrol),
    /// Stationary; fires a projectile whenever its attack cooldown is ready
    Artillery,
}

/// Result of a melee strike against an opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    Wounded { remaining: u32 },
    Destroyed,
}

/// A hostile entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub id: u32,
    pub rect: Rect,
    /// Contact damage dealt to the player
    pub damage: u32,
    pub attack_cooldown: u32,
    pub attack_cooldown_max: u32,
    pub vulnerability: Vulnerability,
    pub behavior: Behavior,
    /// Defeating this opponent ends the session
    pub decisive: bool,
}

impl Opponent {
    /// Basic enemy with its top-left corner at `pos`
    pub fn minion(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            rect: Rect::new(pos.x, pos.y, MINION_SIZE, MINION_SIZE),
            damage: MINION_DAMAGE,
            attack_cooldown: 0,
            attack_cooldown_max: MINION_ATTACK_COOLDOWN_TICKS,
            vulnerability: Vulnerability::Fragile,
            behavior: Behavior::Patrol(Patrol::new(MINION_SPEED, MINION_PATROL_DISTANCE)),
            decisive: false,
        }
    }

    /// The boss with its top-left corner at `pos`
    pub fn boss(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            rect: Rect::new(pos.x, pos.y, BOSS_SIZE, BOSS_SIZE),
            damage: BOSS_DAMAGE,
            attack_cooldown: 0,
            attack_cooldown_max: BOSS_ATTACK_COOLDOWN_TICKS,
            vulnerability: Vulnerability::Wounds {
                health: BOSS_MAX_HEALTH,
                max_health: BOSS_MAX_HEALTH,
            },
            behavior: Behavior::Artillery,
            decisive: true,
        }
    }

    /// Per-tick movement and cooldown countdown
    pub fn update(&mut self) {
        if let Behavior::Patrol(ref mut patrol) = self.behavior {
            let dx = patrol.step();
            self.rect.translate(Vec2::new(dx, 0.0));
        }
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown == 0
    }

    pub fn reset_attack_cooldown(&mut self) {
        self.attack_cooldown = self.attack_cooldown_max;
    }

    pub fn fires_projectiles(&self) -> bool {
        matches!(self.behavior, Behavior::Artillery)
    }

    /// Current/max health, if this opponent has a wound counter
    pub fn health(&self) -> Option<(u32, u32)> {
        match self.vulnerability {
            Vulnerability::Fragile => None,
            Vulnerability::Wounds { health, max_health } => Some((health, max_health)),
        }
    }

    /// Resolve one melee hit
    pub fn strike(&mut self) -> StrikeOutcome {
        match self.vulnerability {
            Vulnerability::Fragile => StrikeOutcome::Destroyed,
            Vulnerability::Wounds {
                ref mut health, ..
            } => {
                *health = health.saturating_sub(1);
                if *health == 0 {
                    StrikeOutcome::Destroyed
                } else {
                    StrikeOutcome::Wounded { remaining: *health }
                }
            }
        }
    }
}
