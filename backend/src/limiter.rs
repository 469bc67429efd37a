use std::thread;
use std::time::{Duration, Instant};

/// Time source for the limiter. The game runs on the system clock, tests
/// substitute a scripted one.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&mut self, duration: Duration);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Blocks between presents so loop iterations run at a fixed rate.
pub struct FrameLimiter<C: Clock = SystemClock> {
    clock: C,
    period: Duration,
    last: Option<Instant>,
}

impl FrameLimiter<SystemClock> {
    pub fn new(target_fps: u32) -> FrameLimiter<SystemClock> {
        Self::with_clock(target_fps, SystemClock)
    }
}

impl<C: Clock> FrameLimiter<C> {
    pub fn with_clock(target_fps: u32, clock: C) -> FrameLimiter<C> {
        assert!(target_fps > 0, "target_fps must be positive");
        FrameLimiter {
            clock,
            period: Duration::new(0, 1_000_000_000u32 / target_fps),
            last: None,
        }
    }

    /// Sleeps out whatever remains of the current frame period. A frame that
    /// already overran its period is not delayed further. The first call only
    /// establishes the reference instant.
    pub fn wait(&mut self) {
        let now = self.clock.now();
        if let Some(last) = self.last {
            let deadline = last + self.period;
            if now < deadline {
                self.clock.sleep(deadline - now);
            }
        }
        self.last = Some(self.clock.now());
    }
}
