// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The interest calculator page: its fields and elements.

use crate::driver::Locator;
use crate::interest::Period;
use std::fmt;

/// A mandatory form field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Principal,
    Rate,
    Duration,
    Consent,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Principal, Field::Rate, Field::Duration, Field::Consent];

    /// Identifier used in the page's test ids
    pub fn id(self) -> &'static str {
        match self {
            Field::Principal => "principal",
            Field::Rate => "rate",
            Field::Duration => "duration",
            Field::Consent => "consent",
        }
    }

    /// Message shown when the field is left empty
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Principal => "Principal amount is required",
            Field::Rate => "Interest rate must be selected",
            Field::Duration => "Duration must be selected",
            Field::Consent => "Consent is required",
        }
    }

    /// Test id of the field's inline error
    pub fn error_test_id(self) -> String {
        format!("{}-error", self.id())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An element of the calculator page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    PrincipalInput,
    RateSelect,
    PeriodOption(Period),
    ConsentCheckbox,
    CalculateButton,
    CalculatedInterest,
    TotalAmount,
    ErrorMessage,
    FieldError(Field),
}

impl Element {
    /// Controls that must be visible at every viewport size
    pub const LAYOUT_CONTROLS: [Element; 4] = [
        Element::PrincipalInput,
        Element::RateSelect,
        Element::ConsentCheckbox,
        Element::CalculateButton,
    ];

    /// Fields that must carry `required` and `aria-label`
    pub const MANDATORY_INPUTS: [Element; 3] = [
        Element::PrincipalInput,
        Element::RateSelect,
        Element::ConsentCheckbox,
    ];

    pub fn locator(self) -> Locator {
        match self {
            Element::PrincipalInput => Locator::role("textbox", "Principal Amount"),
            Element::RateSelect => Locator::role("combobox", "Interest Rate"),
            Element::PeriodOption(period) => Locator::role("link", period.label()),
            Element::ConsentCheckbox => Locator::role("checkbox", "Consent"),
            Element::CalculateButton => Locator::role("button", "Calculate"),
            Element::CalculatedInterest => Locator::test_id("calculated-interest"),
            Element::TotalAmount => Locator::test_id("total-amount"),
            Element::ErrorMessage => Locator::test_id("error-message"),
            Element::FieldError(field) => Locator::test_id(field.error_test_id()),
        }
    }
}

impl From<Element> for Locator {
    fn from(element: Element) -> Self {
        element.locator()
    }
}
