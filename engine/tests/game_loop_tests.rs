use std::sync::mpsc;
use std::time::{Duration, Instant};

use engine::game_loop::{GameLoop, LoopRates, LoopStatus, LoopTick, RateCounter, TickCounts};

#[test]
fn iterate_fires_updates_before_renders() {
    let start = Instant::now();
    let mut game_loop = GameLoop::new(LoopRates::new(100, 50), start);
    let mut seen = Vec::new();
    let status = game_loop.iterate(start + Duration::from_millis(20), &mut |tick: LoopTick| {
        seen.push(tick);
        true
    });
    assert_eq!(status, LoopStatus::Running);
    assert_eq!(
        seen,
        vec![LoopTick::Update, LoopTick::Update, LoopTick::Render]
    );
}

#[test]
fn simulated_second_matches_configured_rates() {
    let start = Instant::now();
    let mut game_loop = GameLoop::new(LoopRates::new(120, 60), start);
    let mut counts = TickCounts::default();
    let mut sink = |tick: LoopTick| {
        match tick {
            LoopTick::Update => counts.updates += 1,
            LoopTick::Render => counts.renders += 1,
        }
        true
    };
    for ms in 1..=1000u64 {
        game_loop.iterate(start + Duration::from_millis(ms), &mut sink);
    }
    // Accumulated float error may hold back the very last tick of either rate.
    assert!((119..=120).contains(&counts.updates), "{counts:?}");
    assert!((59..=60).contains(&counts.renders), "{counts:?}");
}

#[test]
fn closed_sink_stops_the_loop() {
    let start = Instant::now();
    let mut game_loop = GameLoop::new(LoopRates::default(), start);
    let status = game_loop.iterate(start + Duration::from_millis(100), &mut |_: LoopTick| false);
    assert_eq!(status, LoopStatus::SinkClosed);
}

#[test]
fn rate_counter_reports_once_per_second() {
    let start = Instant::now();
    let mut counter = RateCounter::new(start);
    counter.record(TickCounts {
        updates: 120,
        renders: 60,
    });
    assert!(counter.poll(start + Duration::from_millis(999)).is_none());

    let report = counter
        .poll(start + Duration::from_secs(1))
        .expect("a full second elapsed");
    assert_eq!(report.ups, 120);
    assert_eq!(report.fps, 60);

    // The window restarted, so the old counts are gone.
    let report = counter
        .poll(start + Duration::from_secs(2))
        .expect("another second elapsed");
    assert_eq!(report.ups, 0);
    assert_eq!(report.fps, 0);
}

#[test]
fn spawned_loop_delivers_ticks_until_receiver_drops() {
    let (tx, rx) = mpsc::channel();
    let handle = GameLoop::spawn(LoopRates::new(200, 100), move |tick: LoopTick| {
        tx.send(tick).is_ok()
    })
    .expect("spawn game loop thread");

    let first = rx
        .recv_timeout(Duration::from_secs(2))
        .expect("loop should tick");
    assert!(matches!(first, LoopTick::Update | LoopTick::Render));

    drop(rx);
    handle.join().expect("loop thread should exit cleanly");
}
