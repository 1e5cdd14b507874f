//! Paddle Rally - a single-ball paddle arcade engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Arena dimensions and speed tuning
//! - `driver`: Fixed-timestep tick driver and deferred reset timers
//! - `feedback`: Event sinks for haptic/audio/visual effects
//! - `settings`: Feedback preferences
//! - `autopilot`: Demo paddle controller

pub mod autopilot;
pub mod config;
pub mod driver;
pub mod error;
pub mod feedback;
pub mod geometry;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::ArenaConfig;
pub use driver::TickDriver;
pub use error::ConfigError;
pub use feedback::{Cue, CueFeedback, FeedbackSink, LogFeedback};
pub use settings::Settings;
pub use sim::{GameEvent, GamePhase, GameSession, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate (ticks per second)
    pub const TICK_HZ: u32 = 60;
    /// Wall-clock duration of one tick, in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame deltas above this are clamped before feeding the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Lives at the start of every session
    pub const STARTING_LIVES: u32 = 3;
    /// Paddle hit band is [height - TOP_OFFSET, height - BOTTOM_OFFSET]
    pub const PADDLE_BAND_TOP_OFFSET: f32 = 30.0;
    pub const PADDLE_BAND_BOTTOM_OFFSET: f32 = 10.0;
    /// Serve point sits this far above the bottom edge
    pub const SERVE_OFFSET: f32 = 40.0;
    /// Horizontal launch component at start, as a fraction of the initial speed
    pub const START_DRIFT: f32 = 0.5;
    /// Deferred reset samples horizontal drift uniformly from [-SERVE_DRIFT, SERVE_DRIFT]
    pub const SERVE_DRIFT: f32 = 0.5;
    /// Delay between a miss and the ball coming back (seconds, wall clock)
    pub const RESET_DELAY_SECS: f64 = 1.0;
}
