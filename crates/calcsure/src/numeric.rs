// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric values extracted from display text.
//!
//! Extraction never fails: text that does not hold a number yields
//! [`Amount::NAN`], and every comparison against it is false.

use serde::{Deserialize, Serialize};

/// Absolute slack added to tolerance comparisons so that differences of
/// exactly `tolerance` survive binary rounding.
const COMPARISON_SLACK: f64 = 1e-9;

/// A number parsed from display text, or the not-a-number sentinel
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// The parse-failure sentinel.
    pub const NAN: Amount = Amount(f64::NAN);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The parsed value, or `None` for the sentinel
    pub fn value(self) -> Option<f64> {
        if self.0.is_nan() {
            None
        } else {
            Some(self.0)
        }
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Raw value; NaN for the sentinel.
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Whether `self` is within `tolerance` of `other`.
    pub fn approx_eq(self, other: impl Into<Amount>, tolerance: Tolerance) -> bool {
        tolerance.accepts(self.0, other.into().0)
    }

    /// Strictly greater than `bound`; false for the sentinel.
    pub fn exceeds(self, bound: impl Into<Amount>) -> bool {
        self.0 > bound.into().0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{v:.2}"),
            None => write!(f, "NaN"),
        }
    }
}

/// Non-negative absolute tolerance for numeric comparisons
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
pub struct Tolerance(f64);

impl Tolerance {
    /// One cent.
    pub const DEFAULT: Tolerance = Tolerance(0.01);

    /// Exact comparison (up to binary rounding slack).
    pub const EXACT: Tolerance = Tolerance(0.0);

    /// Returns `None` for negative or NaN tolerances.
    pub fn new(value: f64) -> Option<Self> {
        if value >= 0.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `|a - b| <= tolerance`. Any NaN operand fails.
    pub fn accepts(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0 + COMPARISON_SLACK
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parse the number shown in `display`.
///
/// Every character except ASCII digits, `.` and a leading `-` is discarded
/// (currency symbols, grouping separators, whitespace, labels). Yields
/// [`Amount::NAN`] when nothing numeric remains or more than one decimal point
/// is present.
pub fn extract_numeric_value(display: &str) -> Amount {
    let mut cleaned = String::with_capacity(display.len());
    for c in display.chars() {
        match c {
            '0'..='9' | '.' => cleaned.push(c),
            '-' if cleaned.is_empty() => cleaned.push(c),
            _ => {}
        }
    }

    let digits = cleaned.strip_prefix('-').unwrap_or(&cleaned);
    if !digits.bytes().any(|b| b.is_ascii_digit()) || digits.matches('.').count() > 1 {
        return Amount::NAN;
    }

    cleaned.parse::<f64>().map(Amount).unwrap_or(Amount::NAN)
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod tests;
