// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Element stability waiting.
//!
//! Elements that are animating or still being laid out give misleading reads.
//! [`wait_for_stable`] samples an element's geometry until it has stopped
//! changing for a number of consecutive samples.

use crate::error::WaitError;
use crate::geometry::BoundingBox;
use crate::poll::sleep_within;
use crate::time::Clock;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_REQUIRED_SAMPLES: u32 = 3;
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 100;
pub const DEFAULT_STABILITY_TIMEOUT_MS: u64 = 5000;

/// Timing and tolerance for a stability wait
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StabilityOptions {
    /// Consecutive samples that must match the reference sample
    pub required_samples: u32,
    pub sample_interval: Duration,
    /// Budget for the whole wait, including waiting for the element to appear
    pub timeout: Duration,
    /// Per-field geometry tolerance
    pub epsilon: f64,
}

impl Default for StabilityOptions {
    fn default() -> Self {
        Self {
            required_samples: DEFAULT_REQUIRED_SAMPLES,
            sample_interval: Duration::from_millis(DEFAULT_SAMPLE_INTERVAL_MS),
            timeout: Duration::from_millis(DEFAULT_STABILITY_TIMEOUT_MS),
            epsilon: BoundingBox::DEFAULT_EPSILON,
        }
    }
}

/// Wait until the sampled geometry stops changing.
///
/// `sampler` returns `None` while the element is not observable. The wait
/// first polls until a geometry is available, then counts consecutive samples
/// within `epsilon` of the reference. Any change resets the count and becomes
/// the new reference. Returns the settled geometry. No sample is taken at
/// or after `options.timeout`.
pub async fn wait_for_stable<C, S, Fut>(
    clock: &C,
    waiting_for: &str,
    options: StabilityOptions,
    mut sampler: S,
) -> Result<BoundingBox, WaitError>
where
    C: Clock + ?Sized,
    S: FnMut() -> Fut,
    Fut: Future<Output = Option<BoundingBox>>,
{
    try_wait_for_stable(clock, waiting_for, options, || {
        let sample = sampler();
        async move { Ok::<_, WaitError>(sample.await) }
    })
    .await
}

/// Fallible form of [`wait_for_stable`].
pub async fn try_wait_for_stable<C, S, Fut, E>(
    clock: &C,
    waiting_for: &str,
    options: StabilityOptions,
    mut sampler: S,
) -> Result<BoundingBox, E>
where
    C: Clock + ?Sized,
    S: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<BoundingBox>, E>>,
    E: From<WaitError>,
{
    let start = clock.now_millis();
    let timed_out = |elapsed: Duration| -> E {
        debug!(waiting_for, ?elapsed, "element did not settle before timeout");
        WaitError::TimeoutExceeded {
            waiting_for: waiting_for.to_string(),
            elapsed,
            timeout: options.timeout,
        }
        .into()
    };

    let mut reference = loop {
        if let Some(geometry) = sampler().await? {
            break geometry;
        }
        sleep_within(clock, start, options.timeout, options.sample_interval)
            .await
            .map_err(&timed_out)?;
    };

    let mut stable_count: u32 = 0;
    while stable_count < options.required_samples {
        sleep_within(clock, start, options.timeout, options.sample_interval)
            .await
            .map_err(&timed_out)?;

        match sampler().await? {
            Some(current) if current.approx_eq(&reference, options.epsilon) => {
                stable_count += 1;
            }
            Some(current) => {
                stable_count = 0;
                reference = current;
            }
            // Element vanished mid-wait.
            None => stable_count = 0,
        }
    }

    debug!(waiting_for, elapsed = ?clock.elapsed_since(start), "element settled");
    Ok(reference)
}

#[cfg(test)]
#[path = "stability_tests.rs"]
mod tests;
