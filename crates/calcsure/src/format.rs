// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display-format checks for monetary values.

use regex::Regex;
use std::sync::OnceLock;

/// Decimal places shown for monetary values.
pub const CURRENCY_DECIMAL_PLACES: usize = 2;

/// Characters removed before a currency value is format-checked.
const CURRENCY_NOISE: &[char] = &['£', '$', '€', ','];

/// Whether `display` shows a number with exactly `decimal_places` decimals.
///
/// Everything except ASCII digits and `.` is removed first, so currency
/// symbols, grouping separators and signs do not affect the result. The
/// remainder must be one or more digits, a point, and exactly
/// `decimal_places` digits.
pub fn verify_number_format(display: &str, decimal_places: usize) -> bool {
    let stripped: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // Only digits and points remain, so splitting at the first point leaves a
    // digit-only whole part.
    stripped.split_once('.').is_some_and(|(whole, fraction)| {
        !whole.is_empty() && fraction.len() == decimal_places && !fraction.contains('.')
    })
}

/// [`verify_number_format`] at two places after removing `£ $ € ,` and whitespace.
pub fn verify_currency_display(display: &str) -> bool {
    let cleaned: String = display
        .chars()
        .filter(|c| !CURRENCY_NOISE.contains(c) && !c.is_whitespace())
        .collect();
    verify_number_format(&cleaned, CURRENCY_DECIMAL_PLACES)
}

/// Whether `text` contains a `digits.dd` figure anywhere.
///
/// Looser than [`verify_number_format`]: surrounding labels and extra
/// digits are allowed.
pub fn has_two_decimal_figure(text: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+\.[0-9]{2}").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
