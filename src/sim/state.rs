//! Session state and core simulation types

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;
use crate::geometry::Span;

/// Coarse state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game started yet
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Lives exhausted, waiting for `start()`
    GameOver,
}

/// Discrete happenings pushed to the feedback collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball struck the paddle (score already incremented)
    Hit,
    /// Ball dropped below the arena (life already removed)
    Miss,
    /// A deferred ball reset was scheduled
    Reset,
    /// Last life lost
    GameOver,
    /// A deferred reset fired and the ball is back in play
    Relaunch,
}

/// Whether the ball is moving or parked waiting for its deferred reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallStatus {
    InPlay,
    AwaitingReset,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Distance per tick
    pub vel: Vec2,
    pub status: BallStatus,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            status: BallStatus::InPlay,
        }
    }

    #[inline]
    pub fn in_play(&self) -> bool {
        self.status == BallStatus::InPlay
    }
}

/// Paddle position shared between the input collaborator (writer) and the
/// engine (reader)
///
/// Single-threaded by construction (`Rc<Cell<_>>`); both sides are expected
/// to run on the same loop. Every write is clamped to the valid range.
#[derive(Debug, Clone)]
pub struct PaddleHandle {
    x: Rc<Cell<f32>>,
    range: Span,
}

impl PaddleHandle {
    pub fn new(config: &ArenaConfig) -> Self {
        Self {
            x: Rc::new(Cell::new(config.paddle_home())),
            range: config.paddle_range(),
        }
    }

    /// Current paddle centre
    #[inline]
    pub fn get(&self) -> f32 {
        self.x.get()
    }

    /// Store a new paddle centre, clamped to the arena.
    /// NaN carries no position and leaves the paddle where it is.
    pub fn set(&self, x: f32) {
        if let Some(clamped) = self.range.clamp(x) {
            self.x.set(clamped);
        }
    }

    /// Valid range for the paddle centre
    pub fn range(&self) -> Span {
        self.range
    }
}

/// Proof that a particular miss scheduled a reset under a given session
/// generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResetTicket {
    pub generation: u64,
    /// Unique per scheduled reset within a session
    pub serial: u64,
}

/// Result of one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Set when a deferred reset must be scheduled by the host
    pub reset: Option<ResetTicket>,
}

impl TickOutcome {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.reset.is_none()
    }
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball_position: Vec2,
    pub paddle_position: f32,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
}
