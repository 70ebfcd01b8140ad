// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Element geometry snapshots.

use serde::{Deserialize, Serialize};

/// On-screen geometry of an element at one instant
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Default per-field tolerance in CSS pixels.
    pub const DEFAULT_EPSILON: f64 = 0.5;

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Field-by-field comparison within `epsilon`.
    ///
    /// NaN in either box never compares equal.
    pub fn approx_eq(&self, other: &BoundingBox, epsilon: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= epsilon;
        close(self.x, other.x)
            && close(self.y, other.y)
            && close(self.width, other.width)
            && close(self.height, other.height)
    }
}
