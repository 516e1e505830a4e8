//! Boss projectiles
//!
//! Fire and forget: the heading is fixed at spawn time from the shooter's
//! center toward the target's center and never re-aimed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::direction_to;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub rect: Rect,
    pub vel: Vec2,
}

impl Projectile {
    /// Spawn centered on `origin`, heading straight for `target`.
    ///
    /// If the two points coincide the projectile has zero velocity and just
    /// sits there.
    pub fn aimed(id: u32, origin: Vec2, target: Vec2) -> Self {
        Self {
            id,
            rect: Rect::from_center(origin, Vec2::splat(PROJECTILE_SIZE)),
            vel: direction_to(origin, target) * PROJECTILE_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
    }

    /// True once the top-left corner is further than the despawn margin
    /// outside the playfield
    pub fn is_out_of_bounds(&self) -> bool {
        let Vec2 { x, y } = self.rect.pos;
        x < -PROJECTILE_DESPAWN_MARGIN
            || x > WINDOW_WIDTH + PROJECTILE_DESPAWN_MARGIN
            || y < -PROJECTILE_DESPAWN_MARGIN
            || y > WINDOW_HEIGHT + PROJECTILE_DESPAWN_MARGIN
    }
}

/// Move every projectile one tick and drop the ones that left the playfield
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>) {
    for projectile in projectiles.iter_mut() {
        projectile.advance();
    }
    projectiles.retain(|p| !p.is_out_of_bounds());
}
