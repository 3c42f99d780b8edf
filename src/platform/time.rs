//! Frame pacing

use std::time::{Duration, Instant};

/// Paces the frame loop
pub trait FrameClock {
    /// Wait out the rest of a frame at `rate_hz` frames per second
    fn tick(&mut self, rate_hz: u32);

    /// Block for a fixed amount of time
    fn delay(&mut self, duration: Duration);
}

/// Sleeps so that consecutive `tick` calls are at least one frame apart
#[derive(Debug, Default)]
pub struct SleepClock {
    last_tick: Option<Instant>,
}

impl SleepClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for SleepClock {
    fn tick(&mut self, rate_hz: u32) {
        let frame = Duration::from_secs_f64(1.0 / f64::from(rate_hz.max(1)));
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }

    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Never sleeps; records what it was asked to do
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualClock {
    /// Rate passed to each `tick`, in order
    pub ticks: Vec<u32>,
    /// Every requested delay, in order
    pub delays: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time spent so far
    pub fn elapsed(&self) -> Duration {
        let frames: Duration = self
            .ticks
            .iter()
            .map(|hz| Duration::from_secs_f64(1.0 / f64::from((*hz).max(1))))
            .sum();
        frames + self.delays.iter().sum::<Duration>()
    }
}

impl FrameClock for ManualClock {
    fn tick(&mut self, rate_hz: u32) {
        self.ticks.push(rate_hz);
    }

    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }
}
