//! Session state and core simulation types
//!
//! A `Session` owns every live entity for one play-through. It is built fresh
//! when play starts and thrown away wholesale on restart; nothing outlives it.

use serde::{Deserialize, Serialize};

use super::level::{Level, Platform};
use super::opponent::Opponent;
use super::player::Player;
use super::projectile::Projectile;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// World frozen under the pause overlay
    Paused,
    /// Player died or the boss fell
    GameOver,
}

/// When gravity acts on the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityMode {
    /// Every tick, even while standing on something
    #[default]
    Continuous,
    /// Only while nothing is supporting the player
    Airborne,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player touched down on the ground or a platform
    PlayerLanded,
    PlayerHurt { amount: u32, remaining: u32 },
    PlayerDefeated,
    ProjectileFired { id: u32 },
    /// Projectile hit the player during invulnerability and was consumed
    ProjectileAbsorbed { id: u32 },
    OpponentStruck { id: u32, remaining: u32 },
    OpponentDefeated { id: u32, decisive: bool },
}

/// Per-session entity registry (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Seed used for enemy placement
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub gravity: GravityMode,
    pub player: Player,
    /// Live opponents (sorted by id)
    pub opponents: Vec<Opponent>,
    /// Live projectiles (sorted by id)
    pub projectiles: Vec<Projectile>,
    pub platforms: Vec<Platform>,
    /// Events not yet drained by the frame driver
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Set once the decisive opponent has been destroyed
    pub boss_defeated: bool,
    next_id: u32,
}

impl Session {
    /// Build a session on the given level
    pub fn new(level: &Level, seed: u64, minion_count: u32, gravity: GravityMode) -> Self {
        let mut session = Self {
            seed,
            time_ticks: 0,
            gravity,
            player: Player::new(level.player_spawn),
            opponents: Vec::new(),
            projectiles: Vec::new(),
            platforms: level.platforms.clone(),
            events: Vec::new(),
            boss_defeated: false,
            next_id: 1,
        };

        let boss_id = session.next_entity_id();
        session.opponents.push(Opponent::boss(boss_id, level.boss_spawn));

        for spawn in level.minion_spawns(minion_count, seed) {
            let id = session.next_entity_id();
            session.opponents.push(Opponent::minion(id, spawn));
        }

        log::info!(
            "New session: seed={}, minions={}, gravity={:?}",
            seed,
            minion_count,
            gravity
        );

        session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// The opponent whose defeat ends the session, while it is alive
    pub fn boss(&self) -> Option<&Opponent> {
        self.opponents.iter().find(|o| o.decisive)
    }

    /// Session is over: player dead or boss destroyed
    pub fn is_finished(&self) -> bool {
        !self.player.is_alive() || self.boss_defeated
    }

    /// Ensure entity lists are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.opponents.sort_by_key(|o| o.id);
        self.projectiles.sort_by_key(|p| p.id);
    }
}
