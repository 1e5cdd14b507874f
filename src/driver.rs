//! Tick driver
//!
//! Turns irregular frame deltas into fixed ticks and owns the one-shot
//! wall-clock timers for deferred ball resets. Hosts call `update` once per
//! frame with the real elapsed time.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, RESET_DELAY_SECS, TICK_DT};
use crate::feedback::FeedbackSink;
use crate::sim::{GameEvent, GameSession, ResetTicket};

#[derive(Debug, Clone, Copy)]
struct ScheduledReset {
    due: f64,
    ticket: ResetTicket,
}

/// Fixed-timestep accumulator plus reset timers
#[derive(Debug, Clone)]
pub struct TickDriver {
    accumulator: f32,
    /// Wall-clock seconds seen so far (unclamped)
    clock: f64,
    reset_delay: f64,
    timers: Vec<ScheduledReset>,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TickDriver {
    pub fn new() -> Self {
        Self::with_reset_delay(RESET_DELAY_SECS)
    }

    pub fn with_reset_delay(reset_delay: f64) -> Self {
        Self {
            accumulator: 0.0,
            clock: 0.0,
            reset_delay,
            timers: Vec::new(),
        }
    }

    /// Run one frame: fire due resets, then as many ticks as the accumulated
    /// time allows (at most `MAX_SUBSTEPS`). Returns the number of ticks run.
    pub fn update<S>(&mut self, session: &mut GameSession, frame_dt: f32, sink: &mut S) -> u32
    where
        S: FeedbackSink + ?Sized,
    {
        // NaN and negative deltas count as no time
        let real_dt = frame_dt.max(0.0);
        self.clock += f64::from(real_dt);
        self.fire_due_resets(session, sink);

        self.accumulator += real_dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            self.step(session, sink);
            self.accumulator -= TICK_DT;
            substeps += 1;
        }
        substeps
    }

    /// Run exactly one tick, forward its events and schedule any reset
    pub fn step<S>(&mut self, session: &mut GameSession, sink: &mut S)
    where
        S: FeedbackSink + ?Sized,
    {
        let outcome = session.on_tick();
        for event in outcome.events {
            sink.notify(event);
        }
        if let Some(ticket) = outcome.reset {
            let due = self.clock + self.reset_delay;
            log::debug!(
                "Reset #{} scheduled for t={due:.3}s (generation {})",
                ticket.serial,
                ticket.generation
            );
            self.timers.push(ScheduledReset { due, ticket });
        }
    }

    fn fire_due_resets<S>(&mut self, session: &mut GameSession, sink: &mut S)
    where
        S: FeedbackSink + ?Sized,
    {
        if self.timers.is_empty() {
            return;
        }
        let now = self.clock;
        let (due, waiting): (Vec<_>, Vec<_>) = self.timers.drain(..).partition(|t| t.due <= now);
        self.timers = waiting;

        for timer in due {
            if session.apply_reset(timer.ticket) {
                sink.notify(GameEvent::Relaunch);
            }
        }
    }

    /// Timers still waiting to fire
    pub fn pending_resets(&self) -> usize {
        self.timers.len()
    }

    /// Wall-clock seconds the driver has seen
    pub fn now(&self) -> f64 {
        self.clock
    }
}
