//! Paddle Rally entry point
//!
//! Headless native demo: the autopilot plays one game in real time while
//! events are logged. Set `RUST_LOG=debug` to see every hit and miss.

#[cfg(not(target_arch = "wasm32"))]
/// Stop the demo after this long even if the autopilot never misses
const DEMO_SECONDS: f32 = 60.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::thread;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use paddle_rally::consts::TICK_DT;
    use paddle_rally::{ArenaConfig, Autopilot, GamePhase, GameSession, LogFeedback, TickDriver};

    env_logger::init();
    log::info!("Paddle Rally (native) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut session = GameSession::new(ArenaConfig::default(), seed);
    session.start();
    log::info!("Game initialized with seed: {}", seed);

    let mut driver = TickDriver::new();
    let mut pilot = Autopilot::new();
    let mut sink = LogFeedback;

    let started = Instant::now();
    let mut last_frame = started;
    let frame = Duration::from_secs_f32(TICK_DT);

    while session.phase() == GamePhase::Playing
        && started.elapsed().as_secs_f32() < DEMO_SECONDS
    {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        pilot.drive(&session);
        driver.update(&mut session, dt, &mut sink);

        thread::sleep(frame.saturating_sub(now.elapsed()));
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts embed the library directly
}
