// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by calcsure are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

use std::path::PathBuf;

/// `CALCSURE_CONFIG`: Path to a TOML settings file.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(names::CALCSURE_CONFIG)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// `CALCSURE_TIMEOUT_MS`: Default timeout for condition polling.
pub fn timeout_ms() -> Option<u64> {
    var_u64(names::CALCSURE_TIMEOUT_MS)
}

/// `CALCSURE_POLL_MS`: Default interval between poll attempts.
pub fn poll_ms() -> Option<u64> {
    var_u64(names::CALCSURE_POLL_MS)
}

/// `CALCSURE_STABLE_SAMPLES`: Consecutive identical samples required for stability.
pub fn stable_samples() -> Option<u32> {
    var_u64(names::CALCSURE_STABLE_SAMPLES).and_then(|v| u32::try_from(v).ok())
}

/// `CALCSURE_PERF_THRESHOLD_MS`: Calculation performance threshold.
pub fn perf_threshold_ms() -> Option<u64> {
    var_u64(names::CALCSURE_PERF_THRESHOLD_MS)
}

fn var_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}
