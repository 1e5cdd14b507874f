//! Fixed timestep simulation tick
//!
//! Advances the ball by one tick and resolves wall, ceiling, paddle and floor
//! contacts in that order. Velocity is distance per tick, so there is no dt.

use serde::{Deserialize, Serialize};

use super::collision::Contacts;
use super::state::{Ball, BallStatus, GameEvent};
use crate::config::ArenaConfig;

/// The part of a session the engine mutates every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rally {
    pub ball: Ball,
    pub score: u32,
    pub lives: u32,
}

impl Rally {
    pub fn new(ball: Ball, lives: u32) -> Self {
        Self {
            ball,
            score: 0,
            lives,
        }
    }
}

/// Advance the rally by one tick against the paddle at `paddle_x`
///
/// Position is updated before any contact is evaluated, and bounces flip
/// velocity only: a ball that overshoots a wall stays outside for the tick.
/// Speed compounds on every paddle hit without a ceiling.
pub fn advance(rally: &mut Rally, paddle_x: f32, config: &ArenaConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !rally.ball.in_play() {
        return events;
    }

    let ball = &mut rally.ball;
    ball.pos += ball.vel;

    let contacts = Contacts::detect(ball.pos, paddle_x, config);

    if contacts.side_wall {
        ball.vel.x = -ball.vel.x;
    }
    if contacts.ceiling {
        ball.vel.y = -ball.vel.y;
    }
    if contacts.paddle {
        ball.vel.y = -ball.vel.y;
        ball.vel *= config.speed_increase_factor;
        rally.score = rally.score.saturating_add(1);
        log::debug!("Paddle hit, score {} speed {:.3}", rally.score, ball.vel.length());
        events.push(GameEvent::Hit);
    }
    if contacts.floor {
        rally.lives = rally.lives.saturating_sub(1);
        ball.status = BallStatus::AwaitingReset;
        events.push(GameEvent::Miss);
        if rally.lives > 0 {
            log::debug!("Ball lost, {} lives left", rally.lives);
            events.push(GameEvent::Reset);
        } else {
            events.push(GameEvent::GameOver);
        }
    }

    events
}
