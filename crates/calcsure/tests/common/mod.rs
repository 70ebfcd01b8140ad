// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for calcsure integration tests.

use calcsure::{
    BoundingBox, CalculationInput, Element, ElementState, MemoryDriver, Period,
};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber once per process. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Full-width control on a 375px mobile layout.
pub fn control_box(y: f64) -> BoundingBox {
    BoundingBox::new(16.0, y, 343.0, 40.0)
}

fn labelled_input(label: &str, y: f64) -> ElementState {
    ElementState::visible()
        .with_attribute("required", "")
        .with_attribute("aria-label", label)
        .with_box(control_box(y))
}

/// A calculator page with every control rendered and no results yet.
pub fn calculator_page() -> MemoryDriver {
    let mut driver = MemoryDriver::new()
        .with(
            Element::PrincipalInput.locator(),
            labelled_input("Principal Amount", 80.0),
        )
        .with(
            Element::RateSelect.locator(),
            labelled_input("Interest Rate", 140.0),
        )
        .with(
            Element::ConsentCheckbox.locator(),
            labelled_input("Consent", 260.0),
        )
        .with(
            Element::CalculateButton.locator(),
            ElementState::visible()
                .with_text("Calculate")
                .with_box(control_box(320.0)),
        );
    for period in Period::ALL {
        driver = driver.with(
            Element::PeriodOption(period).locator(),
            ElementState::visible().with_text(period.label()),
        );
    }
    driver
}

/// Render the results a correct calculator would show for `input`.
pub fn show_results(driver: &MemoryDriver, input: &CalculationInput) {
    show_text(
        driver,
        Element::CalculatedInterest,
        &format!("£{:.2}", input.expected_interest()),
    );
    show_text(
        driver,
        Element::TotalAmount,
        &format!("£{}", group_thousands(input.expected_total())),
    );
}

/// Render `text` in `element`, creating it if needed.
pub fn show_text(driver: &MemoryDriver, element: Element, text: &str) {
    driver.insert(
        element.locator(),
        ElementState::visible()
            .with_text(text)
            .with_box(BoundingBox::new(16.0, 420.0, 343.0, 24.0)),
    );
}

/// `1234.5` -> `"1,234.50"`
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (whole, frac) = fixed.split_once('.').unwrap();
    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{grouped}.{frac}")
}
