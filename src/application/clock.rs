use std::time::{Duration, Instant};

/// How long a paused loop iteration waits before polling again
pub const PAUSED_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    Running,
    Paused,
}

/// Decision for one loop iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Beat {
    /// Advance the simulation by one generation and repaint
    pub advance: bool,
    /// Best-effort delay before the next iteration
    pub wait: Duration,
}

/// SimulationClock paces the loop.
///
/// Every running tick is paced to `1000 / fps` ms, and only every
/// `update_frequency`-th tick advances a generation, which keeps the
/// generation rate independent from the polling rate.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    state: ClockState,
    frame_interval: Duration,
    update_frequency: u32,
    tick: u64,
    last_tick: Instant,
}

impl SimulationClock {
    /// New clock, already running
    pub fn new(fps: u32, update_frequency: u32, now: Instant) -> Self {
        assert!(fps > 0, "fps must be non-zero");
        assert!(update_frequency > 0, "update frequency must be non-zero");

        Self {
            state: ClockState::Running,
            frame_interval: Duration::from_secs(1) / fps,
            update_frequency,
            tick: 0,
            last_tick: now,
        }
    }

    pub const fn state(&self) -> ClockState {
        self.state
    }

    pub const fn is_paused(&self) -> bool {
        matches!(self.state, ClockState::Paused)
    }

    pub const fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Running ticks seen so far
    pub const fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn pause(&mut self) {
        self.state = ClockState::Paused;
    }

    /// Resume and restart frame timing from `now`, so time spent paused
    /// is not counted against the next frame.
    pub fn resume(&mut self, now: Instant) {
        self.state = ClockState::Running;
        self.last_tick = now;
    }

    /// Run one loop iteration at `now`
    pub fn poll(&mut self, now: Instant) -> Beat {
        if self.is_paused() {
            return Beat {
                advance: false,
                wait: PAUSED_POLL_INTERVAL,
            };
        }

        self.tick += 1;
        let advance = self.tick % u64::from(self.update_frequency) == 0;

        let elapsed = now.saturating_duration_since(self.last_tick);
        let wait = self.frame_interval.saturating_sub(elapsed);
        self.last_tick = now;

        Beat { advance, wait }
    }
}
