//! Collision detection for the rectangular arena
//!
//! All checks run against the ball position *after* displacement. They only
//! report contacts; velocity response lives in `tick`. The ball is treated
//! as a point, and nothing here moves it back inside the arena.

use glam::Vec2;

use crate::config::ArenaConfig;

/// Which surfaces the ball touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Left or right wall
    pub side_wall: bool,
    pub ceiling: bool,
    pub paddle: bool,
    /// Fell past the bottom edge
    pub floor: bool,
}

impl Contacts {
    pub fn detect(pos: Vec2, paddle_x: f32, config: &ArenaConfig) -> Self {
        Self {
            side_wall: hits_side_wall(pos, config),
            ceiling: hits_ceiling(pos),
            paddle: hits_paddle(pos, paddle_x, config),
            floor: past_floor(pos, config),
        }
    }
}

/// `x <= 0` or `x >= screen_width`
#[inline]
pub fn hits_side_wall(pos: Vec2, config: &ArenaConfig) -> bool {
    pos.x <= 0.0 || pos.x >= config.screen_width
}

#[inline]
pub fn hits_ceiling(pos: Vec2) -> bool {
    pos.y <= 0.0
}

/// Ball inside the paddle band and strictly within half a paddle of its centre
#[inline]
pub fn hits_paddle(pos: Vec2, paddle_x: f32, config: &ArenaConfig) -> bool {
    config.paddle_band().contains(pos.y) && (pos.x - paddle_x).abs() < config.paddle_width / 2.0
}

/// Strictly below the bottom edge
#[inline]
pub fn past_floor(pos: Vec2, config: &ArenaConfig) -> bool {
    pos.y > config.screen_height
}
