//! Feedback sinks
//!
//! The engine pushes every `GameEvent` to a `FeedbackSink`. Hosts plug in
//! whatever produces sound, vibration or flashes; this module ships a logger,
//! a recorder and a cue mapper that applies the player's `Settings`.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Receives events in the order the engine emits them
pub trait FeedbackSink {
    fn notify(&mut self, event: GameEvent);
}

/// Records events, mostly for tests and replays
impl FeedbackSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards everything
impl FeedbackSink for () {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Writes every event to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameOver => log::info!("Feedback: game over"),
            other => log::debug!("Feedback: {other:?}"),
        }
    }
}

/// Effect a host should play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Ball hits paddle
    PaddleHit,
    /// Ball fell out of the arena
    BallLost,
    /// Ball back in play after a reset
    Relaunch,
    /// Last life lost
    GameOver,
}

impl Cue {
    /// Cue for an event, if the event is felt by the player
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::Hit => Some(Cue::PaddleHit),
            GameEvent::Miss => Some(Cue::BallLost),
            GameEvent::Relaunch => Some(Cue::Relaunch),
            GameEvent::GameOver => Some(Cue::GameOver),
            GameEvent::Reset => None,
        }
    }

    /// Relative vibration strength before settings are applied
    pub fn haptic_weight(self) -> f32 {
        match self {
            Cue::PaddleHit => 0.4,
            Cue::BallLost => 0.8,
            Cue::Relaunch => 0.2,
            Cue::GameOver => 1.0,
        }
    }
}

/// How loud and how strong a cue should be
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intensity {
    pub volume: f32,
    pub haptic: f32,
}

impl Intensity {
    pub fn is_silent(&self) -> bool {
        self.volume <= 0.0 && self.haptic <= 0.0
    }
}

/// Maps events to cues and hands them to `play` scaled by `Settings`
///
/// Cues that would be both silent and still are dropped.
pub struct CueFeedback<F> {
    settings: Settings,
    play: F,
}

impl<F: FnMut(Cue, Intensity)> CueFeedback<F> {
    pub fn new(settings: Settings, play: F) -> Self {
        Self { settings, play }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }
}

impl<F: FnMut(Cue, Intensity)> FeedbackSink for CueFeedback<F> {
    fn notify(&mut self, event: GameEvent) {
        let Some(cue) = Cue::for_event(event) else {
            return;
        };
        let intensity = Intensity {
            volume: self.settings.effective_volume(),
            haptic: self.settings.haptic_strength(cue),
        };
        if intensity.is_silent() {
            return;
        }
        (self.play)(cue, intensity);
    }
}
