// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings for waits, thresholds and viewports.
//!
//! Settings come from built-in defaults, optionally overlaid by a TOML file
//! and then by environment variables (see [`crate::env`]).

use crate::error::ConfigError;
use crate::geometry::BoundingBox;
use crate::numeric::Tolerance;
use crate::perf::{ACTION_THRESHOLD_MS, CALCULATION_THRESHOLD_MS};
use crate::poll::{PollOptions, DEFAULT_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
use crate::stability::{
    StabilityOptions, DEFAULT_REQUIRED_SAMPLES, DEFAULT_SAMPLE_INTERVAL_MS,
    DEFAULT_STABILITY_TIMEOUT_MS,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

fn default_tolerance() -> f64 {
    Tolerance::DEFAULT.value()
}

/// Top-level settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub wait: WaitSettings,

    #[serde(default)]
    pub stability: StabilitySettings,

    #[serde(default)]
    pub performance: PerformanceSettings,

    /// Absolute tolerance for monetary comparisons
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Viewports the layout is checked at
    #[serde(default = "Viewport::defaults")]
    pub viewports: Vec<Viewport>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wait: WaitSettings::default(),
            stability: StabilitySettings::default(),
            performance: PerformanceSettings::default(),
            tolerance: default_tolerance(),
            viewports: Viewport::defaults(),
        }
    }
}

/// Condition polling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaitSettings {
    pub timeout_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

/// Element stability
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StabilitySettings {
    pub required_samples: u32,
    pub sample_interval_ms: u64,
    pub timeout_ms: u64,
    /// Per-field geometry tolerance in pixels
    pub epsilon: f64,
}

impl Default for StabilitySettings {
    fn default() -> Self {
        Self {
            required_samples: DEFAULT_REQUIRED_SAMPLES,
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            timeout_ms: DEFAULT_STABILITY_TIMEOUT_MS,
            epsilon: BoundingBox::DEFAULT_EPSILON,
        }
    }
}

/// Advisory performance thresholds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceSettings {
    pub calculation_threshold_ms: u64,
    pub action_threshold_ms: u64,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            calculation_threshold_ms: CALCULATION_THRESHOLD_MS,
            action_threshold_ms: ACTION_THRESHOLD_MS,
        }
    }
}

/// A named browser viewport
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Viewport {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Mobile, tablet and desktop
    pub fn defaults() -> Vec<Viewport> {
        vec![
            Viewport::new("Mobile", 375, 667),
            Viewport::new("Tablet", 768, 1024),
            Viewport::new("Desktop", 1920, 1080),
        ]
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    /// Whether `geometry` lies horizontally within the viewport.
    ///
    /// Only the horizontal extent is checked since the page scrolls
    /// vertically. NaN coordinates never fit.
    pub fn contains(&self, geometry: &BoundingBox) -> bool {
        geometry.x >= 0.0 && geometry.x + geometry.width <= f64::from(self.width)
    }
}

impl Settings {
    /// Defaults, then `CALCSURE_CONFIG` if set, then env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = match crate::env::config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        Ok(settings.with_env_overrides())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply `CALCSURE_*` environment overrides. Unparseable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(ms) = crate::env::timeout_ms() {
            self.wait.timeout_ms = ms;
        }
        if let Some(ms) = crate::env::poll_ms() {
            self.wait.poll_interval_ms = ms;
        }
        if let Some(n) = crate::env::stable_samples() {
            self.stability.required_samples = n;
        }
        if let Some(ms) = crate::env::perf_threshold_ms() {
            self.performance.calculation_threshold_ms = ms;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if Tolerance::new(self.tolerance).is_none() {
            return Err(ConfigError::NegativeTolerance(self.tolerance));
        }
        let epsilon = self.stability.epsilon;
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        Ok(())
    }

    pub fn poll_options(&self) -> PollOptions {
        PollOptions::new(
            Duration::from_millis(self.wait.timeout_ms),
            Duration::from_millis(self.wait.poll_interval_ms),
        )
    }

    pub fn stability_options(&self) -> StabilityOptions {
        StabilityOptions {
            required_samples: self.stability.required_samples,
            sample_interval: Duration::from_millis(self.stability.sample_interval_ms),
            timeout: Duration::from_millis(self.stability.timeout_ms),
            epsilon: self.stability.epsilon,
        }
    }

    /// Validated tolerance; falls back to the default if invalid.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.tolerance).unwrap_or_default()
    }

    pub fn calculation_threshold(&self) -> Duration {
        Duration::from_millis(self.performance.calculation_threshold_ms)
    }

    pub fn action_threshold(&self) -> Duration {
        Duration::from_millis(self.performance.action_threshold_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
