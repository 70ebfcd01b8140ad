// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repeat-run consistency of calculations.

use crate::interest::CalculationInput;
use serde::Serialize;
use std::future::Future;

/// How many times each case is run by default.
pub const DEFAULT_CONSISTENCY_RUNS: usize = 3;

/// A case whose repeated runs disagreed
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Divergence {
    pub input: CalculationInput,
    /// Output of every run, in run order
    pub outputs: Vec<String>,
}

/// Outcome of a consistency check
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConsistencyReport {
    pub runs: usize,
    pub divergent: Vec<Divergence>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.divergent.is_empty()
    }
}

/// Run every case `runs` times and report those whose outputs differ.
///
/// Runs are interleaved: each round performs every case once before the next
/// round starts. The first error from `calculate` aborts the check.
pub async fn verify_calculation_consistency<F, Fut, E>(
    cases: &[CalculationInput],
    runs: usize,
    mut calculate: F,
) -> Result<ConsistencyReport, E>
where
    F: FnMut(CalculationInput) -> Fut,
    Fut: Future<Output = Result<String, E>>,
{
    let mut outputs: Vec<Vec<String>> = vec![Vec::with_capacity(runs); cases.len()];

    for _ in 0..runs {
        for (case, seen) in cases.iter().zip(outputs.iter_mut()) {
            seen.push(calculate(*case).await?);
        }
    }

    let divergent = cases
        .iter()
        .zip(outputs)
        .filter(|(_, seen)| seen.windows(2).any(|pair| pair[0] != pair[1]))
        .map(|(input, outputs)| Divergence {
            input: *input,
            outputs,
        })
        .collect();

    Ok(ConsistencyReport { runs, divergent })
}
