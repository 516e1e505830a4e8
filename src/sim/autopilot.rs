//! Demo mode - an AI that plays the game
//!
//! Produces the same `FrameInput` a human would. It follows a fixed platform
//! route up to one of the ledges flanking the boss, then swings whenever the
//! attack is ready. Good enough for attract mode and smoke runs, not clever.

use super::input::{FrameInput, HeldKeys, InputEvent, Key};
use super::player::Player;
use super::rect::Rect;
use super::state::{GamePhase, Session};

/// A platform to reach and where to stand on it (player left edge)
#[derive(Debug, Clone, Copy)]
struct Waypoint {
    platform: Rect,
    stand_x: f32,
}

/// Ground -> lower-left -> thick ledge -> ledge left of the boss
const LEFT_ROUTE: [Waypoint; 3] = [
    Waypoint {
        platform: Rect::new(50.0, 420.0, 100.0, 20.0),
        stand_x: 80.0,
    },
    Waypoint {
        platform: Rect::new(50.0, 300.0, 100.0, 60.0),
        stand_x: 105.0,
    },
    Waypoint {
        platform: Rect::new(200.0, 300.0, 120.0, 20.0),
        stand_x: 260.0,
    },
];

/// Ground -> lower-right -> ledge right of the boss
const RIGHT_ROUTE: [Waypoint; 2] = [
    Waypoint {
        platform: Rect::new(600.0, 420.0, 150.0, 20.0),
        stand_x: 655.0,
    },
    Waypoint {
        platform: Rect::new(480.0, 300.0, 120.0, 20.0),
        stand_x: 500.0,
    },
];

/// How close (px) counts as "arrived" while walking
const ARRIVE_TOLERANCE: f32 = 3.0;
/// Looser tolerance at the fighting spot so turning to face the boss
/// does not cause a walk back
const FIGHT_TOLERANCE: f32 = 8.0;
/// Horizontal gap at which a jump toward a higher platform starts
const JUMP_REACH: f32 = 20.0;
/// Distance from a platform edge at which a gap jump starts
const EDGE_MARGIN: f32 = 10.0;

/// Input generator for demo play
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: HeldKeys,
    /// A full run has ended; leave through the menu next time
    finished: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide this frame's input
    pub fn next_input(&mut self, phase: GamePhase, session: &Session) -> FrameInput {
        match phase {
            GamePhase::Menu => {
                let key = if self.finished { Key::Cancel } else { Key::Confirm };
                self.release_all(FrameInput::press(key))
            }
            GamePhase::Paused => self.release_all(FrameInput::press(Key::Cancel)),
            GamePhase::GameOver => {
                self.finished = true;
                self.release_all(FrameInput::press(Key::Cancel))
            }
            GamePhase::Playing => self.play(session),
        }
    }

    fn play(&mut self, session: &Session) -> FrameInput {
        let player = &session.player;
        let Some(boss) = session.boss() else {
            return self.steer(0.0, Vec::new());
        };

        let route: &[Waypoint] = if player.rect.center().x < boss.rect.center().x {
            &LEFT_ROUTE
        } else {
            &RIGHT_ROUTE
        };

        let reached = route
            .iter()
            .rposition(|w| player.grounded && standing_on(player, &w.platform));
        let next = reached.map_or(0, |i| i + 1);

        let mut events = Vec::new();

        if next >= route.len() {
            // At the fighting ledge: hold position, face the boss, swing
            let spot = route[route.len() - 1];
            let dx = spot.stand_x - player.rect.left();
            let toward_boss = (boss.rect.center().x - player.rect.center().x).signum();
            let facing = if player.facing_right { 1.0 } else { -1.0 };

            let dir = if dx.abs() > FIGHT_TOLERANCE {
                dx.signum()
            } else if facing != toward_boss {
                toward_boss
            } else {
                0.0
            };
            if dir == 0.0 && player.attack_cooldown == 0 {
                events.push(InputEvent::KeyDown(Key::Attack));
            }
            return self.steer(dir, events);
        }

        let target = route[next];
        let dx = target.stand_x - player.rect.left();
        let dir = if dx.abs() > ARRIVE_TOLERANCE {
            dx.signum()
        } else {
            0.0
        };

        if player.grounded && !player.jumping {
            let higher = target.platform.top() < player.rect.bottom() - 1.0;
            let gap = horizontal_gap(&player.rect, &target.platform);
            let at_edge = reached
                .map(|i| route[i].platform)
                .is_some_and(|support| {
                    !player.rect.overlaps_horizontally(&target.platform)
                        && near_edge(&player.rect, &support, dir)
                });
            if (higher && gap <= JUMP_REACH) || at_edge {
                events.push(InputEvent::KeyDown(Key::Jump));
            }
        }

        self.steer(dir, events)
    }

    /// Hold left/right according to `dir` (sign), emitting releases for
    /// keys that were held last frame but not now
    fn steer(&mut self, dir: f32, mut events: Vec<InputEvent>) -> FrameInput {
        let held = HeldKeys {
            left: dir < 0.0,
            right: dir > 0.0,
        };
        if self.held.left && !held.left {
            events.push(InputEvent::KeyUp(Key::Left));
        }
        if self.held.right && !held.right {
            events.push(InputEvent::KeyUp(Key::Right));
        }
        self.held = held;
        FrameInput { events, held }
    }

    fn release_all(&mut self, input: FrameInput) -> FrameInput {
        self.steer(0.0, input.events)
    }
}

/// Standing exactly on the platform's top surface
fn standing_on(player: &Player, platform: &Rect) -> bool {
    (player.rect.bottom() - platform.top()).abs() < 0.5 && player.rect.overlaps_horizontally(platform)
}

/// Horizontal distance between two rectangles (0 when they overlap)
fn horizontal_gap(a: &Rect, b: &Rect) -> f32 {
    (b.left() - a.right()).max(a.left() - b.right()).max(0.0)
}

/// About to walk off `support` in direction `dir`
fn near_edge(body: &Rect, support: &Rect, dir: f32) -> bool {
    if dir > 0.0 {
        support.right() - body.right() <= EDGE_MARGIN
    } else if dir < 0.0 {
        body.left() - support.left() <= EDGE_MARGIN
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::level::Level;
    use crate::sim::state::GravityMode;
    use glam::Vec2;

    fn session() -> Session {
        Session::new(&Level::arena(), 3, 0, GravityMode::Continuous)
    }

    fn presses(input: &FrameInput, key: Key) -> bool {
        input.events.contains(&InputEvent::KeyDown(key))
    }

    #[test]
    fn test_menu_confirm_then_quit_after_game_over() {
        let session = session();
        let mut pilot = Autopilot::new();
        assert!(presses(&pilot.next_input(GamePhase::Menu, &session), Key::Confirm));
        assert!(presses(&pilot.next_input(GamePhase::GameOver, &session), Key::Cancel));
        assert!(presses(&pilot.next_input(GamePhase::Menu, &session), Key::Cancel));
    }

    #[test]
    fn test_walks_toward_route_and_releases() {
        let mut session = session();
        session.player.grounded = true;
        let mut pilot = Autopilot::new();

        // Spawn is right of the boss center -> right route, first stop is right
        let input = pilot.next_input(GamePhase::Playing, &session);
        assert!(input.held.right);
        assert!(!input.held.left);

        // Pausing releases the held key
        let input = pilot.next_input(GamePhase::Paused, &session);
        assert!(input.events.contains(&InputEvent::KeyUp(Key::Right)));
        assert_eq!(input.held, HeldKeys::default());
    }

    #[test]
    fn test_jumps_toward_higher_platform() {
        let mut session = session();
        session.player.grounded = true;
        session.player.rect.set_left(600.0 - JUMP_REACH - PLAYER_WIDTH + 1.0);
        let mut pilot = Autopilot::new();
        let input = pilot.next_input(GamePhase::Playing, &session);
        assert!(presses(&input, Key::Jump));
    }

    #[test]
    fn test_attacks_from_fighting_ledge() {
        let mut session = session();
        session.player.rect.pos = Vec2::new(500.0, 300.0 - PLAYER_HEIGHT);
        session.player.grounded = true;
        session.player.facing_right = false;

        let mut pilot = Autopilot::new();
        let input = pilot.next_input(GamePhase::Playing, &session);
        assert!(presses(&input, Key::Attack));
        assert_eq!(input.held, HeldKeys::default());

        // Facing away: turn first, no swing
        session.player.facing_right = true;
        let input = pilot.next_input(GamePhase::Playing, &session);
        assert!(input.held.left);
        assert!(!presses(&input, Key::Attack));
    }
}
