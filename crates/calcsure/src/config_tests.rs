// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Write;
use yare::parameterized;

fn parse(toml: &str) -> Result<Settings, ConfigError> {
    Settings::parse(toml, Path::new("test.toml"))
}

#[test]
fn empty_file_gives_defaults() {
    let settings = parse("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.viewports.len(), 3);
    assert_eq!(settings.tolerance(), Tolerance::DEFAULT);
}

#[test]
fn defaults_match_component_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.poll_options(), PollOptions::default());
    assert_eq!(settings.stability_options(), StabilityOptions::default());
    assert_eq!(settings.calculation_threshold(), Duration::from_millis(2000));
    assert_eq!(settings.action_threshold(), Duration::from_millis(3000));
}

#[test]
fn partial_sections_keep_other_defaults() {
    let settings = parse(
        r#"
        tolerance = 0.005

        [stability]
        required_samples = 5

        [performance]
        calculation_threshold_ms = 1500
        "#,
    )
    .unwrap();

    assert_eq!(settings.stability.required_samples, 5);
    assert_eq!(settings.stability.sample_interval_ms, 100);
    assert_eq!(settings.performance.calculation_threshold_ms, 1500);
    assert_eq!(settings.performance.action_threshold_ms, 3000);
    assert_eq!(settings.tolerance().value(), 0.005);
}

#[test]
fn custom_viewports() {
    let settings = parse(
        r#"
        [[viewports]]
        name = "Small phone"
        width = 320
        height = 568
        "#,
    )
    .unwrap();
    assert_eq!(settings.viewports, vec![Viewport::new("Small phone", 320, 568)]);
    assert!(settings.viewports[0].is_portrait());
}

#[test]
fn negative_tolerance_is_rejected() {
    let err = parse("tolerance = -0.01").unwrap_err();
    assert!(matches!(err, ConfigError::NegativeTolerance(t) if t == -0.01));
}

#[parameterized(
    negative = { "-1.0" },
    not_a_number = { "nan" },
    infinite = { "inf" },
)]
fn unusable_epsilon_is_rejected(epsilon: &str) {
    let err = parse(&format!("[stability]\nepsilon = {epsilon}")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEpsilon(_)), "{err:?}");
    assert!(err.to_string().contains("epsilon"));
}

#[test]
fn zero_epsilon_is_exact_comparison() {
    let settings = parse("[stability]\nepsilon = 0.0").unwrap();
    assert_eq!(settings.stability_options().epsilon, 0.0);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = parse("[wait]\ntimeout = 5").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("test.toml"));
}

#[test]
fn from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[wait]\ntimeout_ms = 2500\npoll_interval_ms = 50").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(
        settings.poll_options(),
        PollOptions::new(Duration::from_millis(2500), Duration::from_millis(50))
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn default_viewports() {
    let names: Vec<_> = Viewport::defaults().into_iter().map(|v| v.name).collect();
    assert_eq!(names, ["Mobile", "Tablet", "Desktop"]);
    assert!(!Viewport::new("Desktop", 1920, 1080).is_portrait());
}

#[parameterized(
    inside = { 16.0, 343.0, true },
    touching_right_edge = { 32.0, 343.0, true },
    overflows_right = { 200.0, 400.0, false },
    starts_off_screen = { -4.0, 100.0, false },
    nan = { f64::NAN, 100.0, false },
)]
fn mobile_viewport_containment(x: f64, width: f64, fits: bool) {
    let mobile = Viewport::new("Mobile", 375, 667);
    // Height is ignored; the page scrolls vertically.
    let geometry = BoundingBox::new(x, 900.0, width, 40.0);
    assert_eq!(mobile.contains(&geometry), fits);
}
