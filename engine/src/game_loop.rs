//! Fixed-rate update/render driver.
//!
//! Two fractional accumulators advance with wall-clock time, one per rate. Whenever an
//! accumulator reaches a whole tick it fires and drops by one, so a stalled thread catches up
//! with several ticks in one iteration instead of losing them.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Upper bound on a single sleep between iterations, so a wildly late clock never parks the
/// loop for long.
const MAX_IDLE: Duration = Duration::from_millis(4);

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopRates {
    pub updates_per_second: u32,
    pub frames_per_second: u32,
}

impl LoopRates {
    pub const fn new(updates_per_second: u32, frames_per_second: u32) -> Self {
        Self {
            updates_per_second,
            frames_per_second,
        }
    }
}

impl Default for LoopRates {
    fn default() -> Self {
        Self::new(120, 60)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopTick {
    Update,
    Render,
}

/// Receiver for loop ticks. Returning `false` stops the loop.
pub trait TickSink {
    fn tick(&mut self, tick: LoopTick) -> bool;
}

impl<F> TickSink for F
where
    F: FnMut(LoopTick) -> bool,
{
    fn tick(&mut self, tick: LoopTick) -> bool {
        self(tick)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickCounts {
    pub updates: u32,
    pub renders: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    ups: f64,
    fps: f64,
    delta_u: f64,
    delta_f: f64,
}

impl FixedStep {
    pub fn new(rates: LoopRates) -> Self {
        Self {
            ups: rates.updates_per_second.max(1) as f64,
            fps: rates.frames_per_second.max(1) as f64,
            delta_u: 0.0,
            delta_f: 0.0,
        }
    }

    /// Adds `elapsed` to both accumulators and drains every whole tick.
    pub fn advance(&mut self, elapsed: Duration) -> TickCounts {
        let secs = elapsed.as_secs_f64();
        self.delta_u += secs * self.ups;
        self.delta_f += secs * self.fps;

        let mut counts = TickCounts::default();
        while self.delta_u >= 1.0 {
            self.delta_u -= 1.0;
            counts.updates += 1;
        }
        while self.delta_f >= 1.0 {
            self.delta_f -= 1.0;
            counts.renders += 1;
        }
        counts
    }

    /// Time until the earlier of the next update or render tick becomes due.
    pub fn until_next_tick(&self) -> Duration {
        let update = (1.0 - self.delta_u).max(0.0) / self.ups;
        let render = (1.0 - self.delta_f).max(0.0) / self.fps;
        Duration::from_secs_f64(update.min(render))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateReport {
    pub fps: u32,
    pub ups: u32,
}

/// Counts ticks over wall-clock windows of one second.
#[derive(Debug, Clone, Copy)]
pub struct RateCounter {
    window_start: Instant,
    updates: u32,
    renders: u32,
}

impl RateCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            updates: 0,
            renders: 0,
        }
    }

    pub fn record(&mut self, counts: TickCounts) {
        self.updates = self.updates.saturating_add(counts.updates);
        self.renders = self.renders.saturating_add(counts.renders);
    }

    /// Returns the counts of the finished window once a second has passed, and starts a new one.
    pub fn poll(&mut self, now: Instant) -> Option<RateReport> {
        if now.saturating_duration_since(self.window_start) < REPORT_INTERVAL {
            return None;
        }
        let report = RateReport {
            fps: self.renders,
            ups: self.updates,
        };
        *self = Self::new(now);
        Some(report)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Running,
    SinkClosed,
}

#[derive(Debug)]
pub struct GameLoop {
    step: FixedStep,
    counter: RateCounter,
    last: Instant,
}

impl GameLoop {
    pub fn new(rates: LoopRates, now: Instant) -> Self {
        Self {
            step: FixedStep::new(rates),
            counter: RateCounter::new(now),
            last: now,
        }
    }

    pub fn until_next_tick(&self) -> Duration {
        self.step.until_next_tick()
    }

    /// One pass of the loop: fire due ticks into `sink` and emit the per-second report.
    pub fn iterate<S>(&mut self, now: Instant, sink: &mut S) -> LoopStatus
    where
        S: TickSink + ?Sized,
    {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        let due = self.step.advance(elapsed);

        let mut fired = TickCounts::default();
        let mut status = LoopStatus::Running;
        for _ in 0..due.updates {
            if !sink.tick(LoopTick::Update) {
                status = LoopStatus::SinkClosed;
                break;
            }
            fired.updates += 1;
        }
        if status == LoopStatus::Running {
            for _ in 0..due.renders {
                if !sink.tick(LoopTick::Render) {
                    status = LoopStatus::SinkClosed;
                    break;
                }
                fired.renders += 1;
            }
        }

        self.counter.record(fired);
        if let Some(report) = self.counter.poll(now) {
            log::info!("FPS: {} UPS: {}", report.fps, report.ups);
        }
        status
    }

    /// Runs the loop on a dedicated `game-loop` thread until the sink closes.
    pub fn spawn<S>(rates: LoopRates, mut sink: S) -> io::Result<JoinHandle<()>>
    where
        S: TickSink + Send + 'static,
    {
        thread::Builder::new()
            .name("game-loop".to_string())
            .spawn(move || {
                let mut game_loop = GameLoop::new(rates, Instant::now());
                while game_loop.iterate(Instant::now(), &mut sink) == LoopStatus::Running {
                    let idle = game_loop.until_next_tick().min(MAX_IDLE);
                    if !idle.is_zero() {
                        thread::sleep(idle);
                    }
                }
                log::debug!("game loop stopped: tick sink closed");
            })
    }
}
