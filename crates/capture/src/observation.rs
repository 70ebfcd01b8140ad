// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Observation record types.

use crate::millis;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// A single recorded observation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Observation {
    /// Sequence number within the log
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created
    #[serde(rename = "elapsed_ms", with = "millis")]
    pub elapsed: Duration,

    /// What was observed
    pub kind: ObservationKind,
}

/// What an observation describes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObservationKind {
    /// A timed action
    Performance {
        label: String,
        duration_ms: u64,
        threshold_ms: u64,
        within_threshold: bool,
    },
    /// Defects found by one validation pass
    Validation {
        subject: String,
        errors: Vec<String>,
    },
    /// A wait that ran out of time
    Timeout {
        waiting_for: String,
        elapsed_ms: u64,
        timeout_ms: u64,
    },
}

impl ObservationKind {
    /// Whether this observation should be surfaced as a warning.
    ///
    /// Slow actions, failed validations and timeouts are warnings; everything
    /// else is informational.
    pub fn is_warning(&self) -> bool {
        match self {
            ObservationKind::Performance {
                within_threshold, ..
            } => !within_threshold,
            ObservationKind::Validation { errors, .. } => !errors.is_empty(),
            ObservationKind::Timeout { .. } => true,
        }
    }
}

#[cfg(test)]
#[path = "observation_tests.rs"]
mod tests;
