//! Arena configuration
//!
//! Immutable bounds and speed tuning for one session. Values are validated
//! once up front so the simulation never has to re-check them.

use serde::{Deserialize, Serialize};

use crate::consts::{PADDLE_BAND_BOTTOM_OFFSET, PADDLE_BAND_TOP_OFFSET, SERVE_OFFSET};
use crate::error::ConfigError;
use crate::geometry::{Span, Vec2};

/// Default tuning values
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const INITIAL_BALL_SPEED: f32 = 5.0; // distance per tick
    pub const SPEED_INCREASE_FACTOR: f32 = 1.05; // multiplied in on every paddle hit

    // Paddle
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
}

/// Arena bounds and speed constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ball_size: f32,
    pub paddle_width: f32,
    /// Drawn height only; the hit band is fixed relative to the bottom edge
    pub paddle_height: f32,
    pub initial_ball_speed: f32,
    pub speed_increase_factor: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            ball_size: Params::BALL_SIZE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            initial_ball_speed: Params::INITIAL_BALL_SPEED,
            speed_increase_factor: Params::SPEED_INCREASE_FACTOR,
        }
    }
}

impl ArenaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is finite and positive and the paddle fits
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ball_size", self.ball_size),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("initial_ball_speed", self.initial_ball_speed),
            ("speed_increase_factor", self.speed_increase_factor),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.paddle_width >= self.screen_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                screen_width: self.screen_width,
            });
        }
        Ok(())
    }

    /// Valid range for the paddle centre
    pub fn paddle_range(&self) -> Span {
        let half = self.paddle_width / 2.0;
        Span::new(half, self.screen_width - half)
    }

    /// Vertical band in which the ball can strike the paddle
    pub fn paddle_band(&self) -> Span {
        Span::new(
            self.screen_height - PADDLE_BAND_TOP_OFFSET,
            self.screen_height - PADDLE_BAND_BOTTOM_OFFSET,
        )
    }

    /// Where the ball is placed on start and after a reset
    pub fn serve_position(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height - SERVE_OFFSET)
    }

    /// Paddle centre on start
    pub fn paddle_home(&self) -> f32 {
        self.screen_width / 2.0
    }
}
