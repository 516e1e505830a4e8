//! The player character
//!
//! Physics here is deliberately simple: velocity-based horizontal movement,
//! constant gravity, a hard ground line and screen-edge clamping. Platform
//! landing needs the platform list and lives in the tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// The player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Body rectangle (position + size)
    pub rect: Rect,
    pub vel: Vec2,
    pub facing_right: bool,
    pub health: u32,
    pub max_health: u32,
    /// Ticks of invulnerability left (0 = vulnerable)
    pub invulnerable_ticks: u32,
    /// Ticks until the next attack is allowed (0 = ready)
    pub attack_cooldown: u32,
    pub attack_cooldown_max: u32,
    pub attacking: bool,
    pub jumping: bool,
    /// Standing on the ground or a platform top as of the last tick
    #[serde(default)]
    pub grounded: bool,
}

impl Player {
    /// Spawn with the top-left corner at `pos`
    pub fn new(pos: Vec2) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            facing_right: true,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            invulnerable_ticks: 0,
            attack_cooldown: 0,
            attack_cooldown_max: ATTACK_COOLDOWN_TICKS,
            attacking: false,
            jumping: false,
            grounded: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn move_left(&mut self) {
        self.vel.x = -PLAYER_SPEED;
        self.facing_right = false;
    }

    pub fn move_right(&mut self) {
        self.vel.x = PLAYER_SPEED;
        self.facing_right = true;
    }

    pub fn stop(&mut self) {
        self.vel.x = 0.0;
    }

    /// Start a jump. Ignored while a jump is already in progress.
    pub fn jump(&mut self) {
        if !self.jumping {
            self.vel.y = PLAYER_JUMP_POWER;
            self.jumping = true;
            self.grounded = false;
        }
    }

    /// Try to start an attack. Returns false (and leaves the cooldown
    /// untouched) if the previous swing has not recovered yet.
    pub fn attack(&mut self) -> bool {
        if self.attack_cooldown == 0 {
            self.attacking = true;
            self.attack_cooldown = self.attack_cooldown_max;
            true
        } else {
            false
        }
    }

    /// Apply damage unless invulnerable. Returns true if damage landed.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if self.invulnerable_ticks == 0 {
            self.health = self.health.saturating_sub(amount);
            self.invulnerable_ticks = INVULNERABLE_TICKS;
            true
        } else {
            false
        }
    }

    /// Melee hitbox: a fixed box adjacent to the body on the facing side.
    ///
    /// Always computable; callers must check `attacking` themselves.
    pub fn attack_hitbox(&self) -> Rect {
        let mut hitbox = Rect::new(0.0, 0.0, ATTACK_HITBOX_WIDTH, ATTACK_HITBOX_HEIGHT);
        if self.facing_right {
            hitbox.set_midleft(self.rect.midright());
        } else {
            hitbox.set_midright(self.rect.midleft());
        }
        hitbox
    }

    /// Integrate one tick of motion. `apply_gravity` is decided by the
    /// session's gravity mode.
    pub fn integrate(&mut self, apply_gravity: bool) {
        self.rect.translate(Vec2::new(self.vel.x, 0.0));

        if apply_gravity {
            self.vel.y += GRAVITY;
        }
        self.rect.translate(Vec2::new(0.0, self.vel.y));

        if self.rect.bottom() > GROUND_Y {
            self.rect.set_bottom(GROUND_Y);
            self.vel.y = 0.0;
            self.jumping = false;
        }

        if self.rect.left() < 0.0 {
            self.rect.set_left(0.0);
        }
        if self.rect.right() > WINDOW_WIDTH {
            self.rect.set_right(WINDOW_WIDTH);
        }
    }

    /// Count down attack and invulnerability timers
    pub fn tick_timers(&mut self) {
        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
            if self.attack_cooldown == 0 {
                self.attacking = false;
            }
        }
        self.invulnerable_ticks = self.invulnerable_ticks.saturating_sub(1);
    }

    /// Snap onto a surface at height `top` after a downward collision
    pub fn land_on(&mut self, top: f32) {
        self.rect.set_bottom(top);
        self.vel.y = 0.0;
        self.jumping = false;
        self.grounded = true;
    }

    /// Progress through the current swing, 0.0 at activation to 1.0 at recovery
    pub fn attack_progress(&self) -> f32 {
        if self.attack_cooldown_max == 0 {
            return 1.0;
        }
        (self.attack_cooldown_max - self.attack_cooldown) as f32 / self.attack_cooldown_max as f32
    }
}
