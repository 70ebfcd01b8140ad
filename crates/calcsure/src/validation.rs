// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregated validation outcome.

use calcsure_capture::ObservationKind;
use serde::Serialize;
use std::fmt;

/// Every defect found by one validation pass, in discovery order.
///
/// Checks append to the result instead of failing fast, so a caller sees
/// all problems at once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a defect
    pub fn push(&mut self, error: impl fmt::Display) {
        self.errors.push(error.to_string());
    }

    /// Record `error` unless `ok` holds
    pub fn check(&mut self, ok: bool, error: impl fmt::Display) {
        if !ok {
            self.push(error);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether a defect with this message was recorded
    pub fn contains(&self, error: impl fmt::Display) -> bool {
        let wanted = error.to_string();
        self.errors.iter().any(|e| *e == wanted)
    }

    /// Convert to an observation for a reporting sink
    pub fn to_observation(&self, subject: impl Into<String>) -> ObservationKind {
        ObservationKind::Validation {
            subject: subject.into(),
            errors: self.errors.clone(),
        }
    }
}
