// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Condition polling.
//!
//! [`poll_until`] re-evaluates a predicate until it holds or the timeout
//! elapses. Evaluations are strictly sequential: the next attempt starts only
//! after the previous one has resolved and the interval has been slept.

use crate::error::WaitError;
use crate::time::Clock;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Default timeout for condition polling (in milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default delay between attempts (in milliseconds).
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Timing for a polling wait
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollOptions {
    pub timeout: Duration,
    pub interval: Duration,
}

impl PollOptions {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// Same interval, different timeout
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

/// Wait until `predicate` resolves to `true`.
///
/// The predicate is evaluated at least once, even with a zero timeout.
/// Returns [`WaitError::TimeoutExceeded`] once the elapsed time on `clock`
/// reaches `options.timeout` without the predicate holding. The last sleep is
/// cut short at the deadline and the predicate never runs at or after it.
pub async fn poll_until<C, P, Fut>(
    clock: &C,
    waiting_for: &str,
    options: PollOptions,
    mut predicate: P,
) -> Result<(), WaitError>
where
    C: Clock + ?Sized,
    P: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    try_poll_until(clock, waiting_for, options, || {
        let attempt = predicate();
        async move { Ok::<_, WaitError>(attempt.await) }
    })
    .await
}

/// Fallible form of [`poll_until`].
///
/// An `Err` from the predicate ends the wait immediately and is returned
/// unchanged.
pub async fn try_poll_until<C, P, Fut, E>(
    clock: &C,
    waiting_for: &str,
    options: PollOptions,
    mut predicate: P,
) -> Result<(), E>
where
    C: Clock + ?Sized,
    P: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: From<WaitError>,
{
    let start = clock.now_millis();
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        if predicate().await? {
            debug!(waiting_for, attempts, "condition met");
            return Ok(());
        }

        let paused = sleep_within(clock, start, options.timeout, options.interval).await;
        if let Err(elapsed) = paused {
            debug!(waiting_for, attempts, ?elapsed, "condition not met before timeout");
            return Err(WaitError::TimeoutExceeded {
                waiting_for: waiting_for.to_string(),
                elapsed,
                timeout: options.timeout,
            }
            .into());
        }
    }
}

/// Sleep for `interval`, capped at what is left of `timeout` since `start`.
///
/// Returns the elapsed time as `Err` when the deadline has passed, either
/// before the sleep or after it. Callers must not attempt again on `Err`.
pub(crate) async fn sleep_within<C>(
    clock: &C,
    start: u64,
    timeout: Duration,
    interval: Duration,
) -> Result<(), Duration>
where
    C: Clock + ?Sized,
{
    let elapsed = clock.elapsed_since(start);
    if elapsed >= timeout {
        return Err(elapsed);
    }
    clock.sleep(interval.min(timeout - elapsed)).await;

    let elapsed = clock.elapsed_since(start);
    if elapsed >= timeout {
        return Err(elapsed);
    }
    Ok(())
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
