// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-checks between the displayed interest, total and principal.

use crate::format::{verify_number_format, CURRENCY_DECIMAL_PLACES};
use crate::numeric::{extract_numeric_value, Tolerance};
use crate::validation::ValidationResult;
use std::fmt;

/// A defect in how results are presented
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationIssue {
    InterestFormat,
    TotalFormat,
    TotalNotAbovePrincipal,
    InterestNotPositive,
    TotalMismatch,
}

impl fmt::Display for PresentationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            PresentationIssue::InterestFormat => {
                "Interest amount is not properly formatted to 2 decimal places"
            }
            PresentationIssue::TotalFormat => {
                "Total amount is not properly formatted to 2 decimal places"
            }
            PresentationIssue::TotalNotAbovePrincipal => {
                "Total amount should be greater than principal amount"
            }
            PresentationIssue::InterestNotPositive => "Interest amount should be positive",
            PresentationIssue::TotalMismatch => {
                "Total amount does not equal principal plus interest"
            }
        };
        f.write_str(msg)
    }
}

/// Check the displayed results against each other and the principal.
///
/// All five checks run regardless of earlier failures. Unparseable values
/// fail every numeric check.
pub fn verify_results_presentation(
    interest_display: &str,
    total_display: &str,
    principal: f64,
) -> ValidationResult {
    verify_results_presentation_with(interest_display, total_display, principal, Tolerance::DEFAULT)
}

/// [`verify_results_presentation`] with an explicit bookkeeping tolerance.
pub fn verify_results_presentation_with(
    interest_display: &str,
    total_display: &str,
    principal: f64,
    tolerance: Tolerance,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.check(
        verify_number_format(interest_display, CURRENCY_DECIMAL_PLACES),
        PresentationIssue::InterestFormat,
    );
    result.check(
        verify_number_format(total_display, CURRENCY_DECIMAL_PLACES),
        PresentationIssue::TotalFormat,
    );

    let total = extract_numeric_value(total_display);
    let interest = extract_numeric_value(interest_display);

    result.check(
        total.exceeds(principal),
        PresentationIssue::TotalNotAbovePrincipal,
    );
    result.check(interest.exceeds(0.0), PresentationIssue::InterestNotPositive);
    result.check(
        total.approx_eq(principal + interest.raw(), tolerance),
        PresentationIssue::TotalMismatch,
    );

    result
}

#[cfg(test)]
#[path = "presentation_tests.rs"]
mod tests;
