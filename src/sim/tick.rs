//! Fixed timestep simulation tick
//!
//! One call advances a PLAYING session by exactly one frame. Order matters:
//! 1. player motion and timers
//! 2. opponent behavior, projectile flight and despawn
//! 3. platform landing
//! 4. artillery fire
//! 5. contact damage
//! 6. projectile hits
//!
//! Artillery and contact share one cooldown, so an opponent that fires on a
//! tick deals no contact damage on it.

use super::level::Platform;
use super::opponent::StrikeOutcome;
use super::player::Player;
use super::projectile::{Projectile, advance_projectiles};
use super::state::{GameEvent, GravityMode, Session};
use crate::consts::*;

/// Advance the session by one fixed timestep
pub fn tick(session: &mut Session) {
    session.time_ticks += 1;
    let health_before = session.player.health;

    // --- PLAYER MOTION ---
    let was_grounded = session.player.grounded;
    let apply_gravity = match session.gravity {
        GravityMode::Continuous => true,
        GravityMode::Airborne => !session.player.grounded,
    };
    let prev_bottom = session.player.rect.bottom();
    session.player.integrate(apply_gravity);
    session.player.tick_timers();

    // --- OPPONENTS & PROJECTILES ---
    for opponent in &mut session.opponents {
        opponent.update();
    }
    advance_projectiles(&mut session.projectiles);

    // --- LANDING ---
    resolve_landing(&mut session.player, &session.platforms, prev_bottom);
    session.player.grounded = is_supported(&session.player, &session.platforms);
    if session.player.grounded && !was_grounded {
        session.events.push(GameEvent::PlayerLanded);
    }

    // --- ARTILLERY ---
    let target = session.player.rect.center();
    let mut muzzles = Vec::new();
    for opponent in session.opponents.iter_mut() {
        if opponent.fires_projectiles() && opponent.can_attack() {
            muzzles.push(opponent.rect.center());
            opponent.reset_attack_cooldown();
        }
    }
    for origin in muzzles {
        let id = session.next_entity_id();
        session.projectiles.push(Projectile::aimed(id, origin, target));
        session.events.push(GameEvent::ProjectileFired { id });
        log::debug!("Projectile {} fired from {:?} at {:?}", id, origin, target);
    }

    // --- CONTACT DAMAGE ---
    let Session {
        player,
        opponents,
        events,
        ..
    } = &mut *session;
    for opponent in opponents.iter_mut() {
        if opponent.can_attack() && player.rect.intersects(&opponent.rect) {
            if player.take_damage(opponent.damage) {
                opponent.reset_attack_cooldown();
                events.push(GameEvent::PlayerHurt {
                    amount: opponent.damage,
                    remaining: player.health,
                });
                log::debug!(
                    "Opponent {} hit player for {} (health {})",
                    opponent.id,
                    opponent.damage,
                    player.health
                );
            }
        }
    }

    // --- PROJECTILE HITS ---
    // Projectiles are consumed on contact whether or not damage lands
    let player_rect = session.player.rect;
    let mut hits = Vec::new();
    session.projectiles.retain(|p| {
        if p.rect.intersects(&player_rect) {
            hits.push(p.id);
            false
        } else {
            true
        }
    });
    for id in hits {
        if session.player.take_damage(PROJECTILE_DAMAGE) {
            session.events.push(GameEvent::PlayerHurt {
                amount: PROJECTILE_DAMAGE,
                remaining: session.player.health,
            });
        } else {
            session.events.push(GameEvent::ProjectileAbsorbed { id });
        }
    }

    if health_before > 0 && !session.player.is_alive() {
        session.events.push(GameEvent::PlayerDefeated);
        log::info!("Player defeated at tick {}", session.time_ticks);
    }

    session.normalize_order();
}

/// Snap a falling player onto any platform top they reached this tick.
///
/// A platform catches the player when they are moving down, overlap it
/// horizontally, and their bottom edge either crossed its top edge this tick
/// or still sits above its bottom edge.
fn resolve_landing(player: &mut Player, platforms: &[Platform], prev_bottom: f32) {
    for platform in platforms {
        let rect = &platform.rect;
        if player.vel.y <= 0.0 || !player.rect.overlaps_horizontally(rect) {
            continue;
        }
        let bottom = player.rect.bottom();
        let crossed_top = prev_bottom <= rect.top() && bottom > rect.top();
        let embedded = player.rect.intersects(rect) && bottom <= rect.bottom();
        if crossed_top || embedded {
            player.land_on(rect.top());
        }
    }
}

/// True if the player stands on the ground line or exactly on a platform top
fn is_supported(player: &Player, platforms: &[Platform]) -> bool {
    let bottom = player.rect.bottom();
    bottom >= GROUND_Y
        || platforms
            .iter()
            .any(|p| p.rect.top() == bottom && player.rect.overlaps_horizontally(&p.rect))
}

/// Resolve the swing that was just activated against every opponent the
/// hitbox overlaps right now. Called once per activation, never per tick, so
/// a single swing can hit each opponent at most once.
///
/// Returns true if the decisive opponent was destroyed.
pub fn resolve_melee(session: &mut Session) -> bool {
    if !session.player.attacking {
        return false;
    }

    let hitbox = session.player.attack_hitbox();
    let mut destroyed = Vec::new();
    let mut decisive_kill = false;

    for opponent in session
        .opponents
        .iter_mut()
        .filter(|o| o.rect.intersects(&hitbox))
    {
        match opponent.strike() {
            StrikeOutcome::Wounded { remaining } => {
                session.events.push(GameEvent::OpponentStruck {
                    id: opponent.id,
                    remaining,
                });
                log::debug!("Opponent {} struck ({} left)", opponent.id, remaining);
            }
            StrikeOutcome::Destroyed => {
                destroyed.push(opponent.id);
                session.events.push(GameEvent::OpponentDefeated {
                    id: opponent.id,
                    decisive: opponent.decisive,
                });
                if opponent.decisive {
                    decisive_kill = true;
                    log::info!("Boss {} defeated", opponent.id);
                } else {
                    log::debug!("Opponent {} destroyed", opponent.id);
                }
            }
        }
    }

    session.opponents.retain(|o| !destroyed.contains(&o.id));
    if decisive_kill {
        session.boss_defeated = true;
    }
    decisive_kill
}
