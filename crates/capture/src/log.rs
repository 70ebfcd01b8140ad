// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared, append-only observation storage with an optional JSONL mirror.

use crate::observation::{Observation, ObservationKind};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

struct Inner {
    start: Instant,
    entries: Mutex<Vec<Observation>>,
    mirror: Option<Mutex<BufWriter<File>>>,
}

/// Append-only log of observations.
///
/// Clones share the same underlying storage, so a log can be handed to
/// several observers and inspected afterwards from the test body.
#[derive(Clone)]
pub struct ObservationLog {
    inner: Arc<Inner>,
}

impl ObservationLog {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Log that also appends each observation to `path` as one JSON line.
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::build(Some(Mutex::new(BufWriter::new(file)))))
    }

    fn build(mirror: Option<Mutex<BufWriter<File>>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                start: Instant::now(),
                entries: Mutex::new(Vec::new()),
                mirror,
            }),
        }
    }

    /// Append an observation. Mirror write failures are ignored.
    pub fn record(&self, kind: ObservationKind) {
        let mut entries = self.inner.entries.lock();
        let observation = Observation {
            seq: entries.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.inner.start.elapsed(),
            kind,
        };

        if let Some(mirror) = &self.inner.mirror {
            if let Ok(line) = serde_json::to_string(&observation) {
                let mut out = mirror.lock();
                let _ = writeln!(out, "{line}").and_then(|()| out.flush());
            }
        }
        entries.push(observation);
    }

    pub fn observations(&self) -> Vec<Observation> {
        self.inner.entries.lock().clone()
    }

    /// The most recent `n` observations, oldest first
    pub fn last(&self, n: usize) -> Vec<Observation> {
        let entries = self.inner.entries.lock();
        entries[entries.len().saturating_sub(n)..].to_vec()
    }

    /// Observations that should be surfaced as warnings
    pub fn warnings(&self) -> Vec<Observation> {
        self.select(|o| o.kind.is_warning())
    }

    /// Performance observations recorded under `label`
    pub fn find_by_label(&self, label: &str) -> Vec<Observation> {
        self.select(|o| {
            matches!(&o.kind, ObservationKind::Performance { label: l, .. } if l == label)
        })
    }

    pub fn len(&self) -> usize {
        self.inner.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop stored observations. The file mirror is left untouched.
    pub fn clear(&self) {
        self.inner.entries.lock().clear();
    }

    fn select(&self, keep: impl Fn(&Observation) -> bool) -> Vec<Observation> {
        self.inner
            .entries
            .lock()
            .iter()
            .filter(|o| keep(o))
            .cloned()
            .collect()
    }
}

impl Default for ObservationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ObservationLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservationLog")
            .field("len", &self.len())
            .field("mirrored", &self.inner.mirror.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
