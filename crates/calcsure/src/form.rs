// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks that read the calculator page through a [`Driver`].

use crate::calculator::{Element, Field};
use crate::config::Viewport;
use crate::driver::{Driver, Locator};
use crate::error::{CheckError, DriverError};
use crate::format::has_two_decimal_figure;
use crate::geometry::BoundingBox;
use crate::interest::Period;
use crate::poll::{try_poll_until, PollOptions};
use crate::stability::{try_wait_for_stable, StabilityOptions};
use crate::time::Clock;
use crate::validation::ValidationResult;
use serde::Serialize;

/// Snapshot of the form's structural health
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub all_fields_present: bool,
    pub mandatory_fields_marked: bool,
    pub form_is_accessible: bool,
}

impl FormState {
    pub fn is_healthy(&self) -> bool {
        self.all_fields_present && self.mandatory_fields_marked && self.form_is_accessible
    }
}

/// Interest and total text as displayed
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayedResults {
    pub interest: String,
    pub total: String,
}

/// Poll until `locator` is visible.
pub async fn wait_until_visible<D, C>(
    driver: &D,
    clock: &C,
    locator: &Locator,
    options: PollOptions,
) -> Result<(), CheckError>
where
    D: Driver + ?Sized,
    C: Clock + ?Sized,
{
    let label = locator.to_string();
    try_poll_until(clock, &label, options, || {
        let visible = driver.is_visible(locator);
        async move { visible.await.map_err(CheckError::from) }
    })
    .await
}

/// Wait for `locator` to become visible and its geometry to settle.
///
/// Visibility and stability share the single `options.timeout` budget.
pub async fn wait_for_stable_element<D, C>(
    driver: &D,
    clock: &C,
    locator: &Locator,
    options: StabilityOptions,
) -> Result<BoundingBox, CheckError>
where
    D: Driver + ?Sized,
    C: Clock + ?Sized,
{
    let label = locator.to_string();
    try_wait_for_stable(clock, &label, options, || async move {
        let visible = driver.is_visible(locator).await.map_err(CheckError::from)?;
        if !visible {
            return Ok(None);
        }
        driver.bounding_box(locator).await.map_err(CheckError::from)
    })
    .await
}

/// Text of an element, empty when it has none.
pub async fn read_text<D>(driver: &D, element: Element) -> Result<String, DriverError>
where
    D: Driver + ?Sized,
{
    let locator = element.locator();
    Ok(driver.text_content(&locator).await?.unwrap_or_default())
}

/// Wait for both result elements to be visible, then read them.
pub async fn read_results<D, C>(
    driver: &D,
    clock: &C,
    options: PollOptions,
) -> Result<DisplayedResults, CheckError>
where
    D: Driver + ?Sized,
    C: Clock + ?Sized,
{
    for element in [Element::CalculatedInterest, Element::TotalAmount] {
        wait_until_visible(driver, clock, &element.locator(), options).await?;
    }
    Ok(DisplayedResults {
        interest: read_text(driver, Element::CalculatedInterest).await?,
        total: read_text(driver, Element::TotalAmount).await?,
    })
}

/// Whether both results show a two-decimal figure.
pub async fn verify_results_rounded<D>(driver: &D) -> Result<bool, DriverError>
where
    D: Driver + ?Sized,
{
    let interest = read_text(driver, Element::CalculatedInterest).await?;
    let total = read_text(driver, Element::TotalAmount).await?;
    Ok(has_two_decimal_figure(&interest) && has_two_decimal_figure(&total))
}

/// Presence, `required` marking and labelling of the form's inputs.
pub async fn validate_form_state<D>(driver: &D) -> Result<FormState, DriverError>
where
    D: Driver + ?Sized,
{
    let present = [
        Element::PrincipalInput,
        Element::RateSelect,
        Element::PeriodOption(Period::Daily),
        Element::ConsentCheckbox,
        Element::CalculateButton,
    ];

    let mut all_fields_present = true;
    for element in present {
        all_fields_present &= driver.is_visible(&element.locator()).await?;
    }

    let mut mandatory_fields_marked = true;
    let mut form_is_accessible = true;
    for element in Element::MANDATORY_INPUTS {
        let locator = element.locator();
        mandatory_fields_marked &= optional_attribute(driver, &locator, "required")
            .await?
            .is_some();
        form_is_accessible &= optional_attribute(driver, &locator, "aria-label")
            .await?
            .is_some();
    }

    Ok(FormState {
        all_fields_present,
        mandatory_fields_marked,
        form_is_accessible,
    })
}

/// Whether an element exposes an accessible name: an `aria-label`,
/// non-blank text, or an explicit `role`.
pub async fn verify_element_accessibility<D>(
    driver: &D,
    locator: &Locator,
) -> Result<bool, DriverError>
where
    D: Driver + ?Sized,
{
    if driver.attribute(locator, "aria-label").await?.is_some() {
        return Ok(true);
    }
    let has_text = driver
        .text_content(locator)
        .await?
        .is_some_and(|t| !t.trim().is_empty());
    if has_text {
        return Ok(true);
    }
    Ok(driver.attribute(locator, "role").await?.is_some())
}

/// Every layout control must be visible; one error per missing control.
pub async fn verify_responsive_layout<D>(driver: &D) -> Result<ValidationResult, DriverError>
where
    D: Driver + ?Sized,
{
    let mut result = ValidationResult::new();
    for element in Element::LAYOUT_CONTROLS {
        let locator = element.locator();
        let visible = driver.is_visible(&locator).await?;
        result.check(visible, format_args!("{locator} is not visible"));
    }
    Ok(result)
}

/// Every element in `elements` must have geometry that fits `viewport`;
/// one error per element that is missing or overflows.
pub async fn verify_within_viewport<D>(
    driver: &D,
    viewport: &Viewport,
    elements: &[Element],
) -> Result<ValidationResult, DriverError>
where
    D: Driver + ?Sized,
{
    let mut result = ValidationResult::new();
    for element in elements {
        let locator = element.locator();
        match driver.bounding_box(&locator).await? {
            Some(geometry) => result.check(
                viewport.contains(&geometry),
                format_args!(
                    "{locator} does not fit the {} viewport ({}px wide)",
                    viewport.name, viewport.width
                ),
            ),
            None => result.push(format_args!("{locator} has no layout box")),
        }
    }
    Ok(result)
}

/// Inline error text for `field`, or `None` when no error is shown.
pub async fn read_field_error<D>(driver: &D, field: Field) -> Result<Option<String>, DriverError>
where
    D: Driver + ?Sized,
{
    let locator = Element::FieldError(field).locator();
    if !driver.is_visible(&locator).await? {
        return Ok(None);
    }
    driver.text_content(&locator).await
}

/// Whether `field` shows its expected "required" message.
pub async fn field_error_matches<D>(driver: &D, field: Field) -> Result<bool, DriverError>
where
    D: Driver + ?Sized,
{
    Ok(read_field_error(driver, field)
        .await?
        .is_some_and(|text| text.contains(field.required_message())))
}

async fn optional_attribute<D>(
    driver: &D,
    locator: &Locator,
    name: &str,
) -> Result<Option<String>, DriverError>
where
    D: Driver + ?Sized,
{
    match driver.attribute(locator, name).await {
        Err(DriverError::NotFound(_)) => Ok(None),
        other => other,
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
