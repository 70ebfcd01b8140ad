// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

fn five_percent() -> Rate {
    Rate::from_percent(5.0)
}

#[parameterized(
    yearly = { Period::Yearly, "50.00" },
    monthly = { Period::Monthly, "4.17" },
    daily = { Period::Daily, "0.14" },
    yearly_with_symbol = { Period::Yearly, "£50.00" },
    monthly_unrounded_within_cent = { Period::Monthly, "4.16" },
)]
fn accurate_interest_passes(period: Period, displayed: &str) {
    assert!(verify_mathematical_accuracy(1000.0, five_percent(), period, displayed));
}

#[parameterized(
    yearly_off_by_a_pound = { Period::Yearly, "51.00" },
    monthly_off = { Period::Monthly, "4.19" },
    daily_shown_yearly = { Period::Daily, "50.00" },
    unparseable = { Period::Yearly, "N/A" },
    empty = { Period::Yearly, "" },
)]
fn inaccurate_interest_fails(period: Period, displayed: &str) {
    assert!(!verify_mathematical_accuracy(1000.0, five_percent(), period, displayed));
}

#[parameterized(
    daily = { 1000.0, 5.0, Period::Daily, 0.14 },
    monthly = { 1000.0, 5.0, Period::Monthly, 4.17 },
    yearly = { 1000.0, 5.0, Period::Yearly, 50.0 },
    max_rate = { 1000.0, 15.0, Period::Yearly, 150.0 },
    rounding_case = { 2500.0, 10.0, Period::Monthly, 20.83 },
    decimal_principal = { 750.50, 7.5, Period::Daily, 0.15 },
)]
fn expected_interest(principal: f64, percent: f64, period: Period, expected: f64) {
    let input = CalculationInput::new(principal, Rate::from_percent(percent), period);
    assert_eq!(input.expected_interest(), expected);
}

#[test]
fn expected_total_adds_rounded_interest() {
    let input = CalculationInput::new(1000.0, five_percent(), Period::Monthly);
    assert_eq!(input.expected_total(), 1004.17);
}

#[parameterized(
    exact_half = { 0.125, 0.13 },
    negative_half = { -0.125, -0.13 },
    below_half = { 0.124, 0.12 },
    binary_below_half = { 1.005, 1.0 },
    whole = { 50.0, 50.0 },
)]
fn rounding_boundaries(x: f64, expected: f64) {
    assert_eq!(round_to_cents(x), expected);
}

#[test]
fn explicit_tolerance_is_honoured() {
    let input = CalculationInput::new(1000.0, five_percent(), Period::Yearly);
    assert!(!verify_mathematical_accuracy_with(&input, "50.01", Tolerance::EXACT));
    assert!(verify_mathematical_accuracy_with(
        &input,
        "50.40",
        Tolerance::new(0.5).unwrap()
    ));
}

#[parameterized(
    percent = { "5%", Some(0.05) },
    spaced_percent = { " 7.5 % ", Some(0.075) },
    fraction = { "0.05", Some(0.05) },
    negative = { "-5%", None },
    words = { "five", None },
    empty = { "", None },
)]
fn rate_parsing(s: &str, expected: Option<f64>) {
    assert_eq!(Rate::parse(s).map(Rate::fraction), expected);
}

#[test]
fn rate_options_run_to_fifteen_percent() {
    let labels: Vec<String> = Rate::options().map(|r| r.to_string()).collect();
    assert_eq!(labels.len(), 15);
    assert_eq!(labels.first().unwrap(), "1%");
    assert_eq!(labels[6], "7%");
    assert_eq!(labels.last().unwrap(), "15%");
}

#[test]
fn period_round_trips_through_label() {
    for period in Period::ALL {
        assert_eq!(period.label().parse::<Period>().unwrap(), period);
    }
    assert_eq!("monthly".parse::<Period>().unwrap(), Period::Monthly);
    assert!("Weekly".parse::<Period>().is_err());
}
