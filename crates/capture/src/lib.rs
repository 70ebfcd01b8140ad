// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Observation capture for UI verification runs.
//!
//! This crate records what the verification layer observed while a scenario
//! ran: performance samples, aggregated validation defects, and wait timeouts.
//! Observations are kept in memory and can optionally be streamed to a JSONL file.

mod millis;
mod log;
mod observation;

pub use log::ObservationLog;
pub use observation::{Observation, ObservationKind};
