// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interest calculator UI verification
//!
//! Polling waits and result checks for end-to-end tests of a web-based
//! interest calculator. A scenario drives the browser through its own
//! automation layer, lets the page settle with [`poll_until`] or
//! [`wait_for_stable`], then hands the displayed text to the validators.
//!
//! Only conditions that prevent a scenario from continuing (timeouts,
//! driver failures) are errors. Unmet expectations come back as `bool` or
//! [`ValidationResult`] so one scenario can report several defects.
//!
#![doc = include_str!("../README.md")]

pub mod calculator;
pub mod config;
pub mod consistency;
pub mod driver;
pub mod env;
pub mod error;
pub mod form;
pub mod format;
pub mod geometry;
pub mod interest;
pub mod numeric;
pub mod perf;
pub mod poll;
pub mod presentation;
pub mod stability;
pub mod time;
pub mod validation;

/// Re-exported observation types from the calcsure-capture crate.
pub mod capture {
    pub use calcsure_capture::{Observation, ObservationKind, ObservationLog};
}

pub use calculator::{Element, Field};
pub use config::{Settings, Viewport};
pub use consistency::{verify_calculation_consistency, ConsistencyReport, Divergence};
pub use driver::{Driver, ElementState, Locator, MemoryDriver};
pub use error::{CheckError, ConfigError, DriverError, WaitError};
pub use format::{has_two_decimal_figure, verify_currency_display, verify_number_format};
pub use geometry::BoundingBox;
pub use interest::{verify_mathematical_accuracy, CalculationInput, Period, Rate};
pub use numeric::{extract_numeric_value, Amount, Tolerance};
pub use perf::{
    CaptureObserver, NullObserver, PerfTimer, PerformanceMonitor, PerformanceObserver,
    PerformanceSample, TracingObserver,
};
pub use poll::{poll_until, PollOptions};
pub use presentation::{verify_results_presentation, PresentationIssue};
pub use stability::{wait_for_stable, StabilityOptions};
pub use time::{Clock, ClockHandle, FakeClock, Sleep, SystemClock};
pub use validation::ValidationResult;
