//! Game state machine
//!
//! Owns the current `Session`. Each input event is handled by the routine of
//! the phase it arrives in; the simulation steps and the screen is drawn
//! according to the phase input leaves behind.

use crate::assets::SpriteSheet;
use crate::renderer::RenderSurface;
use crate::renderer::scene::{self, SceneOptions};
use crate::settings::Settings;
use crate::sim::{
    FrameInput, GameEvent, GamePhase, InputEvent, Key, Level, Session, resolve_melee, tick,
};

/// Top-level game: phase, live session and settings
#[derive(Debug)]
pub struct Game {
    phase: GamePhase,
    session: Session,
    settings: Settings,
    level: Level,
    running: bool,
    frame_count: u64,
    /// Events drained from the session during the last frame
    last_events: Vec<GameEvent>,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let level = Level::arena();
        let session = new_session(&level, &settings);
        Self {
            phase: GamePhase::Menu,
            session,
            settings,
            level,
            running: true,
            frame_count: 0,
            last_events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// False once a quit was requested; the driver stops before the next frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// Run one frame: input, simulation, then drawing
    pub fn frame(
        &mut self,
        input: &FrameInput,
        surface: &mut dyn RenderSurface,
        sprites: &SpriteSheet,
    ) {
        self.update(input);
        self.draw(surface, sprites);
    }

    /// Input and simulation for one frame, without drawing
    pub fn update(&mut self, input: &FrameInput) {
        self.frame_count += 1;

        // Each event goes to the routine of the phase it arrives in, so
        // nothing after a pause reaches the frozen session
        for &event in &input.events {
            match self.phase {
                GamePhase::Menu => self.handle_menu_event(event),
                GamePhase::Playing => self.handle_playing_event(event),
                GamePhase::Paused => self.handle_paused_event(event),
                GamePhase::GameOver => self.handle_game_over_event(event),
            }
        }

        // A pause or a decisive hit during input skips this frame's step
        if self.phase == GamePhase::Playing {
            if input.held.left {
                self.session.player.move_left();
            }
            if input.held.right {
                self.session.player.move_right();
            }

            tick(&mut self.session);
            if self.session.is_finished() {
                self.set_phase(GamePhase::GameOver);
            }
        }

        self.last_events = self.session.drain_events();
        for event in &self.last_events {
            log::debug!("Frame {}: {:?}", self.frame_count, event);
        }
    }

    /// Draw the screen for the current phase
    pub fn draw(&self, surface: &mut dyn RenderSurface, sprites: &SpriteSheet) {
        let options = SceneOptions::from(&self.settings);
        match self.phase {
            GamePhase::Menu => scene::draw_menu(surface),
            GamePhase::Playing => scene::draw_world(surface, &self.session, sprites, options),
            GamePhase::Paused => {
                scene::draw_world(surface, &self.session, sprites, options);
                scene::draw_paused_overlay(surface);
            }
            GamePhase::GameOver => {
                scene::draw_world(surface, &self.session, sprites, options);
                scene::draw_game_over_overlay(surface, &self.session);
            }
        }
    }

    fn handle_menu_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Cancel) => self.quit(),
            InputEvent::KeyDown(Key::Confirm) => self.start_session(),
            _ => {}
        }
    }

    fn handle_playing_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit(),
            InputEvent::KeyDown(Key::Jump) => self.session.player.jump(),
            InputEvent::KeyDown(Key::Attack) => {
                if self.session.player.attack() && resolve_melee(&mut self.session) {
                    self.set_phase(GamePhase::GameOver);
                }
            }
            InputEvent::KeyDown(Key::Cancel) => self.set_phase(GamePhase::Paused),
            InputEvent::KeyUp(key) if key.is_horizontal() => self.session.player.stop(),
            _ => {}
        }
    }

    fn handle_paused_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit(),
            InputEvent::KeyDown(Key::Cancel) => self.set_phase(GamePhase::Playing),
            InputEvent::KeyDown(Key::Restart) => self.start_session(),
            _ => {}
        }
    }

    fn handle_game_over_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit(),
            InputEvent::KeyDown(Key::Restart) => self.start_session(),
            InputEvent::KeyDown(Key::Cancel) => self.set_phase(GamePhase::Menu),
            _ => {}
        }
    }

    /// Throw the current session away and play a fresh one
    fn start_session(&mut self) {
        self.session = new_session(&self.level, &self.settings);
        self.set_phase(GamePhase::Playing);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn quit(&mut self) {
        if self.running {
            log::info!("Quit requested in {:?}", self.phase);
            self.running = false;
        }
    }
}

fn new_session(level: &Level, settings: &Settings) -> Session {
    Session::new(
        level,
        settings.seed,
        settings.minion_count,
        settings.gravity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::VertexBatch;
    use crate::sim::{HeldKeys, Vulnerability};
    use glam::Vec2;

    fn game() -> Game {
        Game::new(Settings {
            minion_count: 0,
            ..Default::default()
        })
    }

    fn playing_game() -> Game {
        let mut game = game();
        game.update(&FrameInput::press(Key::Confirm));
        assert_eq!(game.phase(), GamePhase::Playing);
        game
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    #[test]
    fn test_starts_in_menu() {
        let game = game();
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(game.is_running());
    }

    #[test]
    fn test_confirm_starts_fresh_session() {
        let mut game = playing_game();
        assert_eq!(game.session().player.health, PLAYER_MAX_HEALTH);
        let boss = game.session().boss().expect("boss");
        assert_eq!(boss.health(), Some((BOSS_MAX_HEALTH, BOSS_MAX_HEALTH)));

        // The confirm frame already ran one step
        assert_eq!(game.session().time_ticks, 1);
        game.update(&idle());
        assert_eq!(game.session().time_ticks, 2);
    }

    #[test]
    fn test_cancel_in_menu_quits() {
        let mut game = game();
        game.update(&FrameInput::press(Key::Cancel));
        assert!(!game.is_running());
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_quit_from_any_phase() {
        let mut game = playing_game();
        game.update(&FrameInput::quit());
        assert!(!game.is_running());
    }

    #[test]
    fn test_pause_freezes_world_and_resumes() {
        let mut game = playing_game();
        game.update(&FrameInput::press(Key::Cancel));
        assert_eq!(game.phase(), GamePhase::Paused);
        let frozen = game.session().time_ticks;

        for _ in 0..10 {
            game.update(&idle());
        }
        assert_eq!(game.session().time_ticks, frozen);

        game.update(&FrameInput::press(Key::Cancel));
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.session().time_ticks, frozen + 1);
    }

    #[test]
    fn test_restart_from_pause_resets_session() {
        let mut game = playing_game();
        game.session_mut().player.health = 1;
        game.session_mut().player.rect.pos = Vec2::new(10.0, 10.0);
        game.update(&FrameInput::press(Key::Cancel));

        game.update(&FrameInput::press(Key::Restart));
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.session().player.health, PLAYER_MAX_HEALTH);
        assert_eq!(game.session().time_ticks, 1);
    }

    #[test]
    fn test_player_death_then_back_to_menu() {
        let mut game = playing_game();
        game.session_mut().player.health = 0;
        game.update(&idle());
        assert_eq!(game.phase(), GamePhase::GameOver);

        game.update(&FrameInput::press(Key::Cancel));
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(game.is_running());

        game.update(&FrameInput::press(Key::Confirm));
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.session().player.is_alive());
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut game = playing_game();
        game.session_mut().player.health = 0;
        game.update(&idle());
        game.update(&FrameInput::press(Key::Restart));
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.session().player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_twenty_hits_defeat_boss() {
        let mut game = playing_game();
        {
            let player = &mut game.session_mut().player;
            // Standing on the ledge left of the boss, hitbox reaching into it
            player.rect.pos = Vec2::new(260.0, 300.0 - PLAYER_HEIGHT);
            player.vel = Vec2::ZERO;
            player.facing_right = true;
        }

        for hit in 1..=BOSS_MAX_HEALTH {
            game.session_mut().projectiles.clear();
            game.update(&FrameInput::press(Key::Attack));

            if hit < BOSS_MAX_HEALTH {
                let boss = game.session().boss().expect("boss alive");
                assert_eq!(boss.health(), Some((BOSS_MAX_HEALTH - hit, BOSS_MAX_HEALTH)));
                assert_eq!(game.phase(), GamePhase::Playing);

                // Wait out the cooldown
                for _ in 1..ATTACK_COOLDOWN_TICKS {
                    game.session_mut().projectiles.clear();
                    game.update(&idle());
                }
                assert_eq!(game.session().player.attack_cooldown, 0);
            }
        }

        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(game.session().boss().is_none());
        assert!(game.session().boss_defeated);
        assert!(game.last_events().iter().any(|e| matches!(
            e,
            GameEvent::OpponentDefeated { decisive: true, .. }
        )));
        assert_eq!(game.session().player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_events_after_pause_do_not_reach_session() {
        let mut game = playing_game();
        {
            let session = game.session_mut();
            session.projectiles.clear();
            session.player.rect.pos = Vec2::new(260.0, 300.0 - PLAYER_HEIGHT);
            session.player.facing_right = true;
            session.opponents[0].vulnerability = Vulnerability::Wounds {
                health: 1,
                max_health: BOSS_MAX_HEALTH,
            };
        }

        let input = FrameInput::press(Key::Cancel).with_event(InputEvent::KeyDown(Key::Attack));
        game.update(&input);

        assert_eq!(game.phase(), GamePhase::Paused);
        assert!(!game.session().boss_defeated);
        assert!(!game.session().player.attacking);
        let boss = game.session().boss().expect("boss alive");
        assert_eq!(boss.health(), Some((1, BOSS_MAX_HEALTH)));
    }

    #[test]
    fn test_attack_during_cooldown_is_ignored() {
        let mut game = playing_game();
        game.session_mut().player.rect.pos = Vec2::new(260.0, 300.0 - PLAYER_HEIGHT);
        game.session_mut().projectiles.clear();
        game.update(&FrameInput::press(Key::Attack));
        game.session_mut().projectiles.clear();
        game.update(&FrameInput::press(Key::Attack));

        let boss = game.session().boss().expect("boss alive");
        assert_eq!(boss.health(), Some((BOSS_MAX_HEALTH - 1, BOSS_MAX_HEALTH)));
    }

    #[test]
    fn test_left_bound_clamps_at_zero() {
        let mut game = playing_game();
        game.session_mut().player.rect.pos = Vec2::new(0.0, GROUND_Y - PLAYER_HEIGHT);

        let hold_left = FrameInput::holding(HeldKeys {
            left: true,
            right: false,
        });
        for _ in 0..30 {
            game.update(&hold_left);
            assert!(game.session().player.rect.left() >= 0.0);
        }
        assert_eq!(game.session().player.rect.left(), 0.0);
        assert!(!game.session().player.facing_right);
    }

    #[test]
    fn test_key_release_stops_player() {
        let mut game = playing_game();
        let hold_right = FrameInput::holding(HeldKeys {
            left: false,
            right: true,
        });
        game.update(&hold_right);
        assert_eq!(game.session().player.vel.x, PLAYER_SPEED);

        let x = game.session().player.rect.left();
        game.update(&idle().with_event(InputEvent::KeyUp(Key::Right)));
        assert_eq!(game.session().player.vel.x, 0.0);
        assert_eq!(game.session().player.rect.left(), x);
    }

    #[test]
    fn test_draw_matches_phase() {
        let mut game = game();
        let sprites = SpriteSheet::placeholders();
        let mut batch = VertexBatch::new();

        game.frame(&idle(), &mut batch, &sprites);
        assert!(batch.has_text("ENTER"));

        game.frame(&FrameInput::press(Key::Confirm), &mut batch, &sprites);
        assert!(batch.has_text("Boss: 20/20"));
        assert!(!batch.has_text("PAUSED"));

        game.frame(&FrameInput::press(Key::Cancel), &mut batch, &sprites);
        assert!(batch.has_text("PAUSED"));
        assert!(batch.has_text("Boss"));
    }
}
