// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types.
//!
//! Only conditions that stop a scenario from proceeding are errors. Parse
//! failures and unmet expectations are returned as values.

use crate::time::saturating_millis;
use calcsure_capture::ObservationKind;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A wait did not succeed within its budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitError {
    #[error("timed out waiting for {waiting_for} after {elapsed:?} (timeout {timeout:?})")]
    TimeoutExceeded {
        waiting_for: String,
        elapsed: Duration,
        timeout: Duration,
    },
}

impl WaitError {
    /// Time spent before giving up
    pub fn elapsed(&self) -> Duration {
        match self {
            WaitError::TimeoutExceeded { elapsed, .. } => *elapsed,
        }
    }

    /// Configured budget
    pub fn timeout(&self) -> Duration {
        match self {
            WaitError::TimeoutExceeded { timeout, .. } => *timeout,
        }
    }

    /// Convert to an observation for a reporting sink
    pub fn to_observation(&self) -> ObservationKind {
        let WaitError::TimeoutExceeded {
            waiting_for,
            elapsed,
            timeout,
        } = self;
        ObservationKind::Timeout {
            waiting_for: waiting_for.clone(),
            elapsed_ms: saturating_millis(*elapsed),
            timeout_ms: saturating_millis(*timeout),
        }
    }
}

/// Failures reported by a [`Driver`](crate::driver::Driver).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("element not found: {0}")]
    NotFound(String),

    #[error("driver failure: {0}")]
    Failed(String),
}

/// Errors from checks that consult a driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Wait(#[from] WaitError),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Errors loading [`Settings`](crate::config::Settings).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),

    #[error("stability epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
}
