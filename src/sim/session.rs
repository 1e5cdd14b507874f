//! Game session: owns the rally and mediates phase transitions
//!
//! All mutation goes through `start`, `set_paddle_position`, `on_tick` and
//! `apply_reset`. A generation counter tags every start so a deferred reset
//! scheduled by an earlier game can be recognised and dropped.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{
    Ball, BallStatus, GameEvent, GamePhase, PaddleHandle, ResetTicket, Snapshot, TickOutcome,
};
use super::tick::{Rally, advance};
use crate::config::ArenaConfig;
use crate::consts::{SERVE_DRIFT, START_DRIFT, STARTING_LIVES};
use crate::error::ConfigError;
use crate::geometry::launch_velocity;

/// One player's game, from first start through any number of restarts
#[derive(Debug)]
pub struct GameSession {
    config: ArenaConfig,
    seed: u64,
    rng: Pcg32,
    phase: GamePhase,
    rally: Rally,
    paddle: PaddleHandle,
    /// Bumped on every `start()`
    generation: u64,
    pending_reset: Option<ResetTicket>,
    /// Resets scheduled over the session's lifetime
    reset_serial: u64,
    /// Playing ticks since the last start
    time_ticks: u64,
}

impl GameSession {
    /// Create an idle session. `config` is assumed valid; see `try_new`.
    pub fn new(config: ArenaConfig, seed: u64) -> Self {
        let paddle = PaddleHandle::new(&config);
        let ball = Ball::new(
            config.serve_position(),
            launch_velocity(config.initial_ball_speed, START_DRIFT),
        );
        Self {
            rally: Rally::new(ball, STARTING_LIVES),
            paddle,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            config,
            phase: GamePhase::Idle,
            generation: 0,
            pending_reset: None,
            reset_serial: 0,
            time_ticks: 0,
        }
    }

    /// Validate `config` and create an idle session
    pub fn try_new(config: ArenaConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    /// Start or restart from any phase
    pub fn start(&mut self) {
        let config = &self.config;
        self.rally = Rally::new(
            Ball::new(
                config.serve_position(),
                launch_velocity(config.initial_ball_speed, START_DRIFT),
            ),
            STARTING_LIVES,
        );
        self.paddle.set(config.paddle_home());
        self.generation += 1;
        if let Some(stale) = self.pending_reset.take() {
            log::debug!("Dropping pending reset from generation {}", stale.generation);
        }
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        log::info!("Session started (generation {})", self.generation);
    }

    /// Record the latest paddle position from the input device
    pub fn set_paddle_position(&self, x: f32) {
        self.paddle.set(x);
    }

    /// Handle to the shared paddle cell for an input collaborator
    pub fn paddle_handle(&self) -> PaddleHandle {
        self.paddle.clone()
    }

    /// Advance one tick. No-op outside `Playing`.
    pub fn on_tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Playing {
            return TickOutcome::default();
        }

        self.time_ticks += 1;
        let events = advance(&mut self.rally, self.paddle.get(), &self.config);

        let mut reset = None;
        for event in &events {
            match event {
                GameEvent::Reset => {
                    self.reset_serial += 1;
                    let ticket = ResetTicket {
                        generation: self.generation,
                        serial: self.reset_serial,
                    };
                    self.pending_reset = Some(ticket);
                    reset = Some(ticket);
                }
                GameEvent::GameOver => {
                    self.phase = GamePhase::GameOver;
                    log::info!(
                        "Game over after {} ticks, final score {}",
                        self.time_ticks,
                        self.rally.score
                    );
                }
                GameEvent::Hit | GameEvent::Miss | GameEvent::Relaunch => {}
            }
        }

        TickOutcome { events, reset }
    }

    /// Fire a deferred reset. Returns `false` when the ticket is stale: the
    /// session was restarted, left `Playing`, or already consumed it.
    pub fn apply_reset(&mut self, ticket: ResetTicket) -> bool {
        let current = self.phase == GamePhase::Playing
            && ticket.generation == self.generation
            && self.pending_reset == Some(ticket)
            && self.rally.ball.status == BallStatus::AwaitingReset;
        if !current {
            log::debug!(
                "Discarding stale reset #{} (ticket generation {}, current {})",
                ticket.serial,
                ticket.generation,
                self.generation
            );
            return false;
        }

        let drift = self.rng.random_range(-SERVE_DRIFT..=SERVE_DRIFT);
        self.rally.ball = Ball::new(
            self.config.serve_position(),
            launch_velocity(self.config.initial_ball_speed, drift),
        );
        self.pending_reset = None;
        log::debug!("Ball relaunched with drift {:.3}", drift);
        true
    }

    /// Current view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_position: self.rally.ball.pos,
            paddle_position: self.paddle.get(),
            score: self.rally.score,
            lives: self.rally.lives,
            phase: self.phase,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.rally.ball
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.pending_reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn arena() -> ArenaConfig {
        ArenaConfig {
            screen_width: 200.0,
            screen_height: 200.0,
            paddle_width: 60.0,
            ..ArenaConfig::default()
        }
    }

    fn playing() -> GameSession {
        let mut session = GameSession::new(arena(), 42);
        session.start();
        session
    }

    /// Put the ball one tick away from falling out
    fn drop_ball(session: &mut GameSession) {
        session.rally.ball = Ball::new(Vec2::new(50.0, 195.0), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(arena(), 1);
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_try_new_rejects_bad_config() {
        let config = ArenaConfig {
            paddle_width: 250.0,
            ..arena()
        };
        assert!(GameSession::try_new(config, 1).is_err());
        assert!(GameSession::try_new(arena(), 1).is_ok());
    }

    #[test]
    fn test_tick_is_noop_when_idle() {
        let mut session = GameSession::new(arena(), 1);
        let before = session.snapshot();
        assert!(session.on_tick().is_empty());
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.time_ticks(), 0);
    }

    #[test]
    fn test_start_resets_everything() {
        let mut session = playing();
        session.rally.score = 12;
        session.rally.lives = 1;
        session.set_paddle_position(10.0);
        session.phase = GamePhase::GameOver;

        session.start();

        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.ball_position, Vec2::new(100.0, 160.0));
        assert_eq!(snap.paddle_position, 100.0);
        assert_eq!(session.ball().vel, Vec2::new(2.5, -5.0));
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn test_first_tick_moves_ball_from_serve() {
        let mut session = playing();
        session.on_tick();
        assert_eq!(session.snapshot().ball_position, Vec2::new(102.5, 155.0));
        assert_eq!(session.time_ticks(), 1);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut session = playing();
        session.on_tick();
        let first = session.snapshot();
        assert_eq!(session.snapshot(), first);
        assert_eq!(session.snapshot(), first);
    }

    #[test]
    fn test_paddle_position_is_clamped() {
        let session = playing();
        session.set_paddle_position(-50.0);
        assert_eq!(session.snapshot().paddle_position, 30.0);
        session.paddle_handle().set(500.0);
        assert_eq!(session.snapshot().paddle_position, 170.0);
    }

    #[test]
    fn test_miss_on_last_life_ends_game() {
        let mut session = playing();
        session.rally.lives = 1;
        session.rally.score = 4;
        drop_ball(&mut session);

        let outcome = session.on_tick();

        assert_eq!(outcome.events, vec![GameEvent::Miss, GameEvent::GameOver]);
        assert_eq!(outcome.reset, None);
        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::GameOver);
        assert_eq!(snap.lives, 0);
        assert_eq!(snap.score, 4);
        assert_eq!(session.pending_reset(), None);

        // Ticks after game over change nothing
        assert!(session.on_tick().is_empty());
        assert_eq!(session.snapshot(), snap);
    }

    #[test]
    fn test_miss_schedules_reset_and_reset_relaunches() {
        let mut session = playing();
        drop_ball(&mut session);

        let outcome = session.on_tick();

        assert_eq!(outcome.events, vec![GameEvent::Miss, GameEvent::Reset]);
        let ticket = outcome.reset.expect("reset ticket");
        assert_eq!(ticket.generation, session.generation());
        assert_eq!(session.snapshot().lives, 2);
        assert_eq!(session.snapshot().phase, GamePhase::Playing);

        assert!(session.apply_reset(ticket));
        let ball = session.ball();
        assert!(ball.in_play());
        assert_eq!(ball.pos, Vec2::new(100.0, 160.0));
        assert_eq!(ball.vel.y, -5.0);
        assert!(ball.vel.x >= -2.5 && ball.vel.x <= 2.5);

        // Each ticket fires once
        assert!(!session.apply_reset(ticket));
    }

    #[test]
    fn test_restart_invalidates_pending_reset() {
        let mut session = playing();
        drop_ball(&mut session);
        let ticket = session.on_tick().reset.expect("reset ticket");

        session.start();
        let fresh = session.snapshot();

        assert!(!session.apply_reset(ticket));
        assert_eq!(session.snapshot(), fresh);
        assert_eq!(session.ball().vel, Vec2::new(2.5, -5.0));
    }

    #[test]
    fn test_earlier_ticket_cannot_fire_later_reset() {
        let mut session = playing();
        drop_ball(&mut session);
        let first = session.on_tick().reset.expect("reset ticket");
        assert!(session.apply_reset(first));

        drop_ball(&mut session);
        let second = session.on_tick().reset.expect("reset ticket");
        assert_eq!(first.generation, second.generation);
        assert_ne!(first, second);

        assert!(!session.apply_reset(first));
        assert_eq!(session.ball().status, BallStatus::AwaitingReset);
        assert!(session.apply_reset(second));
        assert!(session.ball().in_play());
    }

    #[test]
    fn test_reset_drift_is_seeded() {
        let mut a = GameSession::new(arena(), 7);
        let mut b = GameSession::new(arena(), 7);
        for session in [&mut a, &mut b] {
            session.start();
            drop_ball(session);
            let ticket = session.on_tick().reset.expect("reset ticket");
            assert!(session.apply_reset(ticket));
        }
        assert_eq!(a.ball().vel, b.ball().vel);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_three_misses_end_the_game() {
        let mut session = playing();
        for expected_lives in [2, 1] {
            drop_ball(&mut session);
            let ticket = session.on_tick().reset.expect("reset ticket");
            assert_eq!(session.snapshot().lives, expected_lives);
            assert!(session.apply_reset(ticket));
        }
        drop_ball(&mut session);
        let outcome = session.on_tick();
        assert!(outcome.events.contains(&GameEvent::GameOver));
        assert_eq!(session.phase(), GamePhase::GameOver);
    }
}
