//! The fixed level layout
//!
//! One arena: a ground slab, three tiers of floating platforms, the boss in
//! the middle. Basic enemies are placed on platform tops from a seeded RNG so
//! a given seed always yields the same enemy set.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Static, immutable collision surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }
}

/// Spawn points and terrain for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Index 0 is always the ground slab
    pub platforms: Vec<Platform>,
    pub player_spawn: Vec2,
    pub boss_spawn: Vec2,
}

impl Level {
    /// The single built-in arena
    pub fn arena() -> Self {
        let w = WINDOW_WIDTH;
        let h = WINDOW_HEIGHT;

        let platforms = vec![
            // Ground
            Platform::new(0.0, h - 50.0, w, 50.0),
            // Lower tier
            Platform::new(50.0, h - 180.0, 100.0, 20.0),
            Platform::new(w / 2.0 - 75.0, h - 180.0, 150.0, 20.0),
            Platform::new(w - 200.0, h - 180.0, 150.0, 20.0),
            // Middle tier
            Platform::new(200.0, h - 300.0, 120.0, 20.0),
            Platform::new(w - 320.0, h - 300.0, 120.0, 20.0),
            // Upper tier
            Platform::new(100.0, h - 420.0, 80.0, 20.0),
            Platform::new(w / 2.0 - 40.0, h - 420.0, 80.0, 20.0),
            Platform::new(w - 180.0, h - 420.0, 80.0, 20.0),
            // Thick ledge
            Platform::new(50.0, h - 300.0, 100.0, 60.0),
        ];

        Self {
            platforms,
            player_spawn: Vec2::new(w / 2.0, h - 110.0),
            boss_spawn: Vec2::new(w / 2.0 - 60.0, h / 2.0 - 60.0),
        }
    }

    /// Top-left spawn positions for `count` basic enemies, each standing on a
    /// randomly chosen floating platform.
    pub fn minion_spawns(&self, count: u32, seed: u64) -> Vec<Vec2> {
        let floating = &self.platforms[1.min(self.platforms.len())..];
        if floating.is_empty() {
            return Vec::new();
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let platform = floating[rng.random_range(0..floating.len())].rect;
                let max_x = (platform.right() - MINION_SIZE).max(platform.left());
                let x = rng.random_range(platform.left()..=max_x);
                Vec2::new(x, platform.top() - MINION_SIZE)
            })
            .collect()
    }
}
