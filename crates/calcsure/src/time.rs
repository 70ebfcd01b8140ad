// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time abstraction for waits and timing.
//!
//! Every wait and timer in this crate reads time through a [`Clock`]. The
//! [`FakeClock`] advances virtual time when slept on, so polling loops can be
//! tested without wall-clock delays.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Future returned by [`Clock::sleep`]
pub type Sleep<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Source of monotonic time and delays for waits.
pub trait Clock: Send + Sync {
    /// Milliseconds since this clock's origin
    fn now_millis(&self) -> u64;

    fn sleep(&self, duration: Duration) -> Sleep<'_>;

    /// Time elapsed since an earlier reading of `now_millis`
    fn elapsed_since(&self, start_millis: u64) -> Duration {
        Duration::from_millis(self.now_millis().saturating_sub(start_millis))
    }
}

/// Wall-clock time measured from construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        saturating_millis(self.origin.elapsed())
    }

    fn sleep(&self, duration: Duration) -> Sleep<'_> {
        Box::pin(tokio::time::sleep(duration))
    }
}

#[derive(Debug, Default)]
struct VirtualTime {
    millis: AtomicU64,
    sleeps: AtomicU32,
}

/// Virtual time for tests.
///
/// Clones share the same timeline. Sleeping advances it by the requested
/// duration unless the handle was obtained from [`FakeClock::frozen`].
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    time: Arc<VirtualTime>,
    frozen: bool,
}

impl FakeClock {
    pub fn new(start_millis: u64) -> Self {
        let clock = Self::default();
        clock.advance_ms(start_millis);
        clock
    }

    /// A handle on the same timeline whose sleeps do not move time.
    pub fn frozen(&self) -> Self {
        Self {
            time: Arc::clone(&self.time),
            frozen: true,
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.advance_ms(saturating_millis(duration));
    }

    pub fn advance_ms(&self, ms: u64) {
        self.time.millis.fetch_add(ms, Ordering::SeqCst);
    }

    /// Number of sleeps requested on this timeline
    pub fn sleeps(&self) -> u32 {
        self.time.sleeps.load(Ordering::SeqCst)
    }
}

impl Clock for FakeClock {
    fn now_millis(&self) -> u64 {
        self.time.millis.load(Ordering::SeqCst)
    }

    fn sleep(&self, duration: Duration) -> Sleep<'_> {
        self.time.sleeps.fetch_add(1, Ordering::SeqCst);
        if !self.frozen {
            self.advance(duration);
        }
        Box::pin(std::future::ready(()))
    }
}

/// Either clock, chosen at runtime.
#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    pub fn system() -> Self {
        Self::System(SystemClock::new())
    }

    /// Fake timeline starting at zero
    pub fn fake() -> Self {
        Self::Fake(FakeClock::default())
    }

    /// The fake timeline, for advancing it from a test
    pub fn as_fake(&self) -> Option<&FakeClock> {
        match self {
            Self::Fake(clock) => Some(clock),
            Self::System(_) => None,
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

impl From<FakeClock> for ClockHandle {
    fn from(clock: FakeClock) -> Self {
        Self::Fake(clock)
    }
}

impl From<SystemClock> for ClockHandle {
    fn from(clock: SystemClock) -> Self {
        Self::System(clock)
    }
}

impl Clock for ClockHandle {
    fn now_millis(&self) -> u64 {
        match self {
            Self::System(clock) => clock.now_millis(),
            Self::Fake(clock) => clock.now_millis(),
        }
    }

    fn sleep(&self, duration: Duration) -> Sleep<'_> {
        match self {
            Self::System(clock) => clock.sleep(duration),
            Self::Fake(clock) => clock.sleep(duration),
        }
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
