// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simple-interest model and the financial correctness check.
//!
//! Interest is non-compounding and apportioned evenly over the period:
//! `principal * rate / divisor`, with divisors 365 (daily), 12 (monthly)
//! and 1 (yearly). No day-count conventions are applied.

use crate::format::CURRENCY_DECIMAL_PLACES;
use crate::numeric::{extract_numeric_value, Tolerance};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest rate the calculator offers, in percent.
pub const MAX_RATE_PERCENT: u32 = 15;

/// Calculation period
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Daily,
    Monthly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Monthly, Period::Yearly];

    /// Number of periods per year
    pub fn divisor(self) -> f64 {
        match self {
            Period::Daily => 365.0,
            Period::Monthly => 12.0,
            Period::Yearly => 1.0,
        }
    }

    /// Label shown in the UI
    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown period label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period: {0}")]
pub struct ParsePeriodError(String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePeriodError(s.to_string()))
    }
}

/// Annual interest rate as a fraction (`0.05` for 5%)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(f64);

impl Rate {
    pub fn from_fraction(fraction: f64) -> Self {
        Self(fraction)
    }

    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    /// Parse `"5%"` or `"0.05"`. Negative or non-numeric input yields `None`.
    pub fn parse(s: &str) -> Option<Rate> {
        let s = s.trim();
        let rate = match s.strip_suffix('%') {
            Some(percent) => Rate::from_percent(percent.trim().parse().ok()?),
            None => Rate::from_fraction(s.parse().ok()?),
        };
        (rate.0.is_finite() && rate.0 >= 0.0).then_some(rate)
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Rates offered by the calculator: 1% through 15%.
    pub fn options() -> impl Iterator<Item = Rate> {
        (1..=MAX_RATE_PERCENT).map(|p| Rate::from_percent(f64::from(p)))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = (self.0 * 100.0 * 10_000.0).round() / 10_000.0;
        write!(f, "{percent}%")
    }
}

/// Parameters of one calculator invocation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub principal: f64,
    pub rate: Rate,
    pub period: Period,
}

impl CalculationInput {
    pub fn new(principal: f64, rate: Rate, period: Period) -> Self {
        Self {
            principal,
            rate,
            period,
        }
    }

    /// Expected interest, rounded to cents
    pub fn expected_interest(&self) -> f64 {
        round_to_cents(self.principal * self.rate.fraction() / self.period.divisor())
    }

    /// Principal plus rounded interest
    pub fn expected_total(&self) -> f64 {
        round_to_cents(self.principal + self.expected_interest())
    }
}

/// Round to two decimal places, halves away from zero.
///
/// `x` is scaled by 100 and rounded with [`f64::round`], so the tie rule
/// applies to the scaled binary value: `0.125` becomes `0.13`, while
/// `1.005` (stored as `1.00499…`) becomes `1.0`.
pub fn round_to_cents(x: f64) -> f64 {
    let scale = 10f64.powi(CURRENCY_DECIMAL_PLACES as i32);
    (x * scale).round() / scale
}

/// Whether `displayed_interest` matches the expected simple interest within
/// one cent.
pub fn verify_mathematical_accuracy(
    principal: f64,
    rate: Rate,
    period: Period,
    displayed_interest: &str,
) -> bool {
    verify_mathematical_accuracy_with(
        &CalculationInput::new(principal, rate, period),
        displayed_interest,
        Tolerance::DEFAULT,
    )
}

/// [`verify_mathematical_accuracy`] with an explicit tolerance.
pub fn verify_mathematical_accuracy_with(
    input: &CalculationInput,
    displayed_interest: &str,
    tolerance: Tolerance,
) -> bool {
    extract_numeric_value(displayed_interest).approx_eq(input.expected_interest(), tolerance)
}

#[cfg(test)]
#[path = "interest_tests.rs"]
mod tests;
