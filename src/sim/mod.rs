//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one frame)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod input;
pub mod level;
pub mod opponent;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use input::{FrameInput, HeldKeys, InputEvent, Key};
pub use level::{Level, Platform};
pub use opponent::{Behavior, Opponent, Patrol, StrikeOutcome, Vulnerability};
pub use player::Player;
pub use projectile::Projectile;
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GravityMode, Session};
pub use tick::{resolve_melee, tick};
