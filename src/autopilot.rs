//! Demo paddle controller
//!
//! Plays the game through the same `set_paddle_position` contract a human
//! input device uses. Ball velocity is estimated from consecutive snapshots,
//! so `drive` should be called once per tick.

use glam::Vec2;

use crate::config::ArenaConfig;
use crate::sim::collision::{hits_ceiling, hits_side_wall};
use crate::sim::{GamePhase, GameSession, Snapshot};

/// Upper bound on how far ahead the ball path is traced
const MAX_LOOKAHEAD_TICKS: u32 = 1200;

/// Follows the ball and meets it where it will cross the paddle band
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    last_ball: Option<Vec2>,
    ticks: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the tracked ball (call after a restart)
    pub fn reset(&mut self) {
        self.last_ball = None;
        self.ticks = 0;
    }

    /// Paddle centre to aim for, given the latest snapshot
    pub fn target(&mut self, snapshot: &Snapshot, config: &ArenaConfig) -> f32 {
        let pos = snapshot.ball_position;
        let vel = self.last_ball.map_or(Vec2::ZERO, |last| pos - last);
        self.last_ball = Some(pos);
        self.ticks += 1;

        let intercept = predict_intercept(pos, vel, config).unwrap_or(pos.x);

        // Vary the contact point so rallies don't loop
        let time_factor = self.ticks as f32 * 0.01;
        let wobble = (time_factor.sin() * 0.3) + (time_factor * 0.7).sin() * 0.15;
        intercept + wobble * config.paddle_width / 2.0
    }

    /// Move the session's paddle toward the predicted intercept
    pub fn drive(&mut self, session: &GameSession) {
        if session.phase() != GamePhase::Playing {
            return;
        }
        let target = self.target(&session.snapshot(), session.config());
        session.set_paddle_position(target);
    }
}

/// Trace the ball tick by tick, bouncing off walls and ceiling the way the
/// engine does, and return its x on the first tick inside the paddle band
pub fn predict_intercept(mut pos: Vec2, mut vel: Vec2, config: &ArenaConfig) -> Option<f32> {
    if vel == Vec2::ZERO {
        return None;
    }
    let band = config.paddle_band();
    for _ in 0..MAX_LOOKAHEAD_TICKS {
        pos += vel;
        if hits_side_wall(pos, config) {
            vel.x = -vel.x;
        }
        if hits_ceiling(pos) {
            vel.y = -vel.y;
        }
        if band.contains(pos.y) {
            return Some(pos.x);
        }
        if pos.y > config.screen_height {
            return None;
        }
    }
    None
}
