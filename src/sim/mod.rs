//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocity is distance per tick)
//! - Seeded RNG only
//! - No rendering, timers or platform dependencies

pub mod collision;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::Contacts;
pub use session::GameSession;
pub use state::{
    Ball, BallStatus, GameEvent, GamePhase, PaddleHandle, ResetTicket, Snapshot, TickOutcome,
};
pub use tick::{Rally, advance};
