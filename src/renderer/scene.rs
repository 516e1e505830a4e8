//! Scene drawing
//!
//! One routine per screen. Overlays are drawn on top of `draw_world` so the
//! frozen arena stays visible underneath them.

use glam::Vec2;

use super::RenderSurface;
use super::shapes::{circle_points, slash_arc};
use super::vertex::{Color, colors, with_alpha};
use crate::assets::SpriteSheet;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Opponent, Player, Rect, Session};

const FONT_SIZE: f32 = 36.0;

/// Attack arc effect
const SLASH_RADIUS: f32 = 40.0;
const SLASH_GLOW_RINGS: u32 = 4;
/// The arc is hidden for the tail of the cooldown
const SLASH_MIN_COOLDOWN: u32 = 5;

/// Invulnerability blink: 5 ticks dimmed, 5 ticks solid
const FLICKER_PERIOD: u32 = 10;
const FLICKER_ALPHA: f32 = 0.5;

/// Health bars
const PLAYER_BAR: Rect = Rect::new(10.0, 10.0, 200.0, 20.0);
const BOSS_BAR: Rect = Rect::new(WINDOW_WIDTH / 2.0 - 150.0, 20.0, 300.0, 25.0);

/// Platform bevel thickness
const BEVEL: f32 = 5.0;

/// Presentation switches taken from the settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOptions {
    pub flicker: bool,
    pub show_hitboxes: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            flicker: true,
            show_hitboxes: false,
        }
    }
}

impl From<&Settings> for SceneOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            flicker: settings.effective_flicker(),
            show_hitboxes: settings.show_hitboxes,
        }
    }
}

/// Title screen
pub fn draw_menu(surface: &mut dyn RenderSurface) {
    surface.clear(colors::BLACK);
    let third = WINDOW_HEIGHT / 3.0;
    surface.text("Hollow Vale", Vec2::new(WINDOW_WIDTH / 2.0, third), FONT_SIZE, colors::WHITE);
    surface.text(
        "Press ENTER to start",
        Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0),
        FONT_SIZE,
        colors::YELLOW,
    );
    surface.text(
        "ESC to quit",
        Vec2::new(WINDOW_WIDTH / 2.0, 2.0 * third),
        FONT_SIZE,
        colors::WHITE,
    );
}

/// The arena with every live entity and the HUD
pub fn draw_world(
    surface: &mut dyn RenderSurface,
    session: &Session,
    sprites: &SpriteSheet,
    options: SceneOptions,
) {
    draw_background(surface);

    for platform in &session.platforms {
        draw_platform(surface, &platform.rect);
    }
    for opponent in &session.opponents {
        draw_opponent(surface, opponent, &session.player, sprites);
    }
    for projectile in &session.projectiles {
        surface.fill_rect(projectile.rect, colors::PROJECTILE);
        surface.polygon(
            &circle_points(projectile.rect.center(), PROJECTILE_SIZE / 3.0, 8),
            colors::PROJECTILE_CORE,
        );
    }

    draw_player(surface, &session.player, sprites, options);
    draw_attack_effect(surface, &session.player);
    if options.show_hitboxes && session.player.attacking {
        outline(surface, &session.player.attack_hitbox(), colors::HITBOX);
    }

    if let Some((health, max)) = session.boss().and_then(Opponent::health) {
        draw_bar(surface, BOSS_BAR, health, max);
        surface.text(
            &format!("Boss: {}/{}", health, max),
            BOSS_BAR.center(),
            FONT_SIZE,
            colors::WHITE,
        );
    }
    draw_bar(
        surface,
        PLAYER_BAR,
        session.player.health,
        session.player.max_health,
    );
}

pub fn draw_paused_overlay(surface: &mut dyn RenderSurface) {
    draw_overlay(surface, ("PAUSED", colors::WHITE), "ESC - Resume", "R - Restart");
}

/// Same screen for defeat and victory, only the headline differs
pub fn draw_game_over_overlay(surface: &mut dyn RenderSurface, session: &Session) {
    let headline = if session.boss_defeated {
        ("VICTORY", colors::YELLOW)
    } else {
        ("GAME OVER", colors::RED)
    };
    draw_overlay(surface, headline, "R - Restart", "ESC - Back to menu");
}

fn draw_overlay(surface: &mut dyn RenderSurface, headline: (&str, Color), first: &str, second: &str) {
    surface.fill_rect(
        Rect::new(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT),
        colors::OVERLAY,
    );
    let x = WINDOW_WIDTH / 2.0;
    let third = WINDOW_HEIGHT / 3.0;
    surface.text(headline.0, Vec2::new(x, third), FONT_SIZE, headline.1);
    surface.text(first, Vec2::new(x, WINDOW_HEIGHT / 2.0), FONT_SIZE, colors::WHITE);
    surface.text(second, Vec2::new(x, 2.0 * third), FONT_SIZE, colors::WHITE);
}

/// Sky gradient in horizontal bands, then mist over the lower part
fn draw_background(surface: &mut dyn RenderSurface) {
    const BANDS: u32 = 30;

    surface.clear(colors::SKY_TOP);
    let band_height = WINDOW_HEIGHT / BANDS as f32;
    for i in 0..BANDS {
        let t = i as f32 / BANDS as f32;
        let color = lerp_color(colors::SKY_TOP, colors::SKY_BOTTOM, t);
        surface.fill_rect(
            Rect::new(0.0, i as f32 * band_height, WINDOW_WIDTH, band_height),
            color,
        );
    }

    for i in 0..5 {
        let alpha = colors::MIST[3] - i as f32 * 0.06;
        surface.fill_rect(
            Rect::new(0.0, WINDOW_HEIGHT - 150.0 + i as f32 * 20.0, WINDOW_WIDTH, 50.0),
            with_alpha(colors::MIST, alpha),
        );
    }
}

fn draw_platform(surface: &mut dyn RenderSurface, rect: &Rect) {
    surface.fill_rect(*rect, colors::PLATFORM);
    surface.fill_rect(
        Rect::new(rect.left(), rect.top(), rect.width(), BEVEL),
        colors::PLATFORM_HIGHLIGHT,
    );
    surface.fill_rect(
        Rect::new(rect.left(), rect.bottom() - BEVEL, rect.width(), BEVEL),
        colors::PLATFORM_SHADOW,
    );
    surface.fill_rect(
        Rect::new(rect.left(), rect.top(), BEVEL, rect.height()),
        colors::PLATFORM_SHADOW,
    );
    surface.fill_rect(
        Rect::new(rect.right() - BEVEL, rect.top(), BEVEL, rect.height()),
        colors::PLATFORM_SHADOW,
    );

    // Center stud
    let c = rect.center();
    surface.polygon(
        &[
            c + Vec2::new(0.0, -10.0),
            c + Vec2::new(10.0, 0.0),
            c + Vec2::new(0.0, 10.0),
            c + Vec2::new(-10.0, 0.0),
        ],
        colors::PLATFORM_HIGHLIGHT,
    );
    surface.polygon(&circle_points(c, 3.0, 8), colors::PLATFORM_SHADOW);
}

fn draw_opponent(
    surface: &mut dyn RenderSurface,
    opponent: &Opponent,
    player: &Player,
    sprites: &SpriteSheet,
) {
    if opponent.fires_projectiles() {
        let faces_left = player.rect.center().x < opponent.rect.center().x;
        surface.sprite(&sprites.boss, opponent.rect.pos, faces_left, 1.0);
    } else {
        surface.fill_rect(opponent.rect, colors::MINION);
    }
}

fn draw_player(
    surface: &mut dyn RenderSurface,
    player: &Player,
    sprites: &SpriteSheet,
    options: SceneOptions,
) {
    surface.sprite(
        &sprites.player,
        player.rect.pos,
        !player.facing_right,
        player_alpha(player, options.flicker),
    );
}

/// Sprite alpha for the invulnerability blink
pub fn player_alpha(player: &Player, flicker: bool) -> f32 {
    if flicker
        && player.invulnerable_ticks > 0
        && player.invulnerable_ticks % FLICKER_PERIOD < FLICKER_PERIOD / 2
    {
        FLICKER_ALPHA
    } else {
        1.0
    }
}

/// Slash arc with glow, anchored just ahead of the player
fn draw_attack_effect(surface: &mut dyn RenderSurface, player: &Player) {
    if !player.attacking || player.attack_cooldown <= SLASH_MIN_COOLDOWN {
        return;
    }

    let offset = if player.facing_right { 30.0 } else { -30.0 };
    let center = player.rect.center() + Vec2::new(offset, 0.0);
    let progress = player.attack_progress();

    for ring in 0..SLASH_GLOW_RINGS {
        let radius = SLASH_RADIUS + ring as f32 * 2.0;
        surface.polygon(
            &slash_arc(center, radius, player.facing_right, progress),
            colors::SLASH_GLOW,
        );
    }
    surface.polygon(
        &slash_arc(center, SLASH_RADIUS, player.facing_right, progress),
        colors::SLASH,
    );
}

/// Red track with a green fill proportional to `value / max`
fn draw_bar(surface: &mut dyn RenderSurface, track: Rect, value: u32, max: u32) {
    surface.fill_rect(track, colors::RED);
    if max == 0 {
        return;
    }
    let fraction = (value as f32 / max as f32).clamp(0.0, 1.0);
    let mut fill = track;
    fill.size.x = track.width() * fraction;
    surface.fill_rect(fill, colors::GREEN);
}

fn outline(surface: &mut dyn RenderSurface, rect: &Rect, color: Color) {
    let corners = [
        Vec2::new(rect.left(), rect.top()),
        Vec2::new(rect.right(), rect.top()),
        Vec2::new(rect.right(), rect.bottom()),
        Vec2::new(rect.left(), rect.bottom()),
    ];
    for i in 0..corners.len() {
        surface.line(corners[i], corners[(i + 1) % corners.len()], 1.0, color);
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::VertexBatch;
    use crate::sim::{GravityMode, Level};

    fn session() -> Session {
        Session::new(&Level::arena(), 5, 2, GravityMode::Continuous)
    }

    #[test]
    fn test_menu_text() {
        let mut batch = VertexBatch::new();
        draw_menu(&mut batch);
        assert_eq!(batch.clear_color, Some(colors::BLACK));
        assert!(batch.has_text("Hollow Vale"));
        assert!(batch.has_text("ENTER"));
    }

    #[test]
    fn test_world_draws_player_boss_and_labels() {
        let session = session();
        let mut batch = VertexBatch::new();
        draw_world(&mut batch, &session, &SpriteSheet::placeholders(), SceneOptions::default());

        // Boss sprite + player sprite
        assert_eq!(batch.sprites.len(), 2);
        assert!(batch.has_text("Boss: 20/20"));
        assert!(batch.triangle_count() > 0);
    }

    #[test]
    fn test_flicker_alpha() {
        let mut player = session().player;
        assert_eq!(player_alpha(&player, true), 1.0);

        player.invulnerable_ticks = 59;
        assert_eq!(player_alpha(&player, true), 1.0);
        player.invulnerable_ticks = 54;
        assert_eq!(player_alpha(&player, true), FLICKER_ALPHA);
        assert_eq!(player_alpha(&player, false), 1.0);
    }

    #[test]
    fn test_attack_effect_only_early_in_swing() {
        let mut player = session().player;
        let mut batch = VertexBatch::new();
        draw_attack_effect(&mut batch, &player);
        assert!(batch.vertices.is_empty());

        assert!(player.attack());
        draw_attack_effect(&mut batch, &player);
        // 5 polygons of 8 points, 6 triangles each
        assert_eq!(batch.triangle_count(), 5 * 6);

        batch.reset();
        player.attack_cooldown = SLASH_MIN_COOLDOWN;
        draw_attack_effect(&mut batch, &player);
        assert!(batch.vertices.is_empty());
    }

    #[test]
    fn test_game_over_headline() {
        let mut session = session();
        let mut batch = VertexBatch::new();
        draw_game_over_overlay(&mut batch, &session);
        assert!(batch.has_text("GAME OVER"));

        session.boss_defeated = true;
        batch.reset();
        draw_game_over_overlay(&mut batch, &session);
        assert!(batch.has_text("VICTORY"));
        assert!(batch.has_text("menu"));
    }

    #[test]
    fn test_health_bar_fill_is_proportional() {
        let mut batch = VertexBatch::new();
        draw_bar(&mut batch, PLAYER_BAR, 2, 5);
        let max_x = batch
            .vertices
            .iter()
            .filter(|v| v.color == colors::GREEN)
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert!((max_x - (10.0 + 80.0)).abs() < 1e-4);
    }
}
