//! Hollow Vale - a small 2D side-scrolling action game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, combat, projectiles, session state)
//! - `game`: MENU / PLAYING / PAUSED / GAME_OVER state machine
//! - `renderer`: Rendering surface abstraction and scene drawing
//! - `assets`: Sprite loading with placeholder fallback
//! - `settings`: JSON settings file
//! - `clock`: Fixed-rate frame clock

pub mod assets;
pub mod clock;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Fixed tick rate
    pub const FPS: u32 = 60;

    /// Ground plane (bottom edge the player can never sink below)
    pub const GROUND_Y: f32 = WINDOW_HEIGHT - 50.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_POWER: f32 = -15.0;
    pub const GRAVITY: f32 = 0.8;
    pub const PLAYER_MAX_HEALTH: u32 = 5;
    /// Invulnerability window after taking damage (ticks)
    pub const INVULNERABLE_TICKS: u32 = 60;

    /// Melee attack
    pub const ATTACK_COOLDOWN_TICKS: u32 = 20;
    pub const ATTACK_HITBOX_WIDTH: f32 = 70.0;
    pub const ATTACK_HITBOX_HEIGHT: f32 = 50.0;

    /// Basic patrol enemy
    pub const MINION_SIZE: f32 = 30.0;
    pub const MINION_SPEED: f32 = 2.0;
    pub const MINION_PATROL_DISTANCE: f32 = 100.0;
    pub const MINION_DAMAGE: u32 = 1;
    pub const MINION_ATTACK_COOLDOWN_TICKS: u32 = 60;

    /// Boss
    pub const BOSS_SIZE: f32 = 140.0;
    pub const BOSS_MAX_HEALTH: u32 = 20;
    pub const BOSS_DAMAGE: u32 = 2;
    pub const BOSS_ATTACK_COOLDOWN_TICKS: u32 = 60;

    /// Boss projectiles
    pub const PROJECTILE_SIZE: f32 = 15.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_DAMAGE: u32 = 1;
    /// Distance past the playfield edge before a projectile is discarded
    pub const PROJECTILE_DESPAWN_MARGIN: f32 = 50.0;
}

/// Unit vector from `from` to `to`, or zero when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance > 0.0 {
        delta / distance
    } else {
        Vec2::ZERO
    }
}
