// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timing of UI actions against advisory thresholds.
//!
//! Exceeding a threshold never fails the caller. The breach is reported to a
//! [`PerformanceObserver`] and reflected in [`PerformanceSample::within_threshold`].

use crate::time::{saturating_millis, Clock};
use calcsure_capture::{ObservationKind, ObservationLog};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Threshold for a calculation round trip (in milliseconds).
pub const CALCULATION_THRESHOLD_MS: u64 = 2000;

/// Threshold for general UI actions such as navigation (in milliseconds).
pub const ACTION_THRESHOLD_MS: u64 = 3000;

/// One measured action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PerformanceSample {
    pub duration_ms: u64,
    pub within_threshold: bool,
}

/// Receives every sample taken by a [`PerformanceMonitor`].
pub trait PerformanceObserver: Send + Sync {
    fn observe(&self, label: &str, sample: &PerformanceSample, threshold: Duration);
}

/// Reports samples through `tracing`; breaches at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl PerformanceObserver for TracingObserver {
    fn observe(&self, label: &str, sample: &PerformanceSample, threshold: Duration) {
        let threshold_ms = saturating_millis(threshold);
        if sample.within_threshold {
            debug!(label, duration_ms = sample.duration_ms, threshold_ms, "performance check");
        } else {
            warn!(
                label,
                duration_ms = sample.duration_ms,
                threshold_ms,
                "{} took {}ms (expected < {}ms)",
                label,
                sample.duration_ms,
                threshold_ms
            );
        }
    }
}

/// Records samples into an [`ObservationLog`].
#[derive(Clone, Debug, Default)]
pub struct CaptureObserver {
    log: ObservationLog,
}

impl CaptureObserver {
    pub fn new(log: ObservationLog) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &ObservationLog {
        &self.log
    }
}

impl PerformanceObserver for CaptureObserver {
    fn observe(&self, label: &str, sample: &PerformanceSample, threshold: Duration) {
        self.log.record(ObservationKind::Performance {
            label: label.to_string(),
            duration_ms: sample.duration_ms,
            threshold_ms: saturating_millis(threshold),
            within_threshold: sample.within_threshold,
        });
    }
}

/// Discards samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl PerformanceObserver for NullObserver {
    fn observe(&self, _label: &str, _sample: &PerformanceSample, _threshold: Duration) {}
}

/// Times actions on a clock and compares them with a threshold
pub struct PerformanceMonitor<C> {
    clock: C,
    threshold: Duration,
    observer: Arc<dyn PerformanceObserver>,
}

impl<C: Clock> PerformanceMonitor<C> {
    /// Monitor reporting through [`TracingObserver`]
    pub fn new(clock: C, threshold: Duration) -> Self {
        Self {
            clock,
            threshold,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Monitor with the calculation threshold
    pub fn for_calculations(clock: C) -> Self {
        Self::new(clock, Duration::from_millis(CALCULATION_THRESHOLD_MS))
    }

    /// Replace the observer
    pub fn with_observer(mut self, observer: Arc<dyn PerformanceObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Time `action`, including any suspension inside it.
    pub async fn measure<F, Fut>(&self, label: &str, action: F) -> PerformanceSample
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.time(label, action).await.1
    }

    /// Like [`measure`](Self::measure), also returning the action's output.
    pub async fn time<F, Fut, T>(&self, label: &str, action: F) -> (T, PerformanceSample)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let timer = self.start(label);
        let output = action().await;
        (output, timer.finish())
    }

    /// Start a labelled timer; the sample is reported on [`PerfTimer::finish`].
    pub fn start(&self, label: &str) -> PerfTimer<'_, C> {
        debug!(label, "starting performance check");
        PerfTimer {
            monitor: self,
            label: label.to_string(),
            start_millis: self.clock.now_millis(),
        }
    }

    fn sample(&self, elapsed: Duration) -> PerformanceSample {
        PerformanceSample {
            duration_ms: saturating_millis(elapsed),
            within_threshold: elapsed <= self.threshold,
        }
    }
}

/// A running timer started by [`PerformanceMonitor::start`]
pub struct PerfTimer<'a, C> {
    monitor: &'a PerformanceMonitor<C>,
    label: String,
    start_millis: u64,
}

impl<C: Clock> PerfTimer<'_, C> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stop the timer and report the sample
    pub fn finish(self) -> PerformanceSample {
        let elapsed = self.monitor.clock.elapsed_since(self.start_millis);
        let sample = self.monitor.sample(elapsed);
        self.monitor
            .observer
            .observe(&self.label, &sample, self.monitor.threshold);
        sample
    }
}

#[cfg(test)]
#[path = "perf_tests.rs"]
mod tests;
