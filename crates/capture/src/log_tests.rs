// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;
use std::thread;

fn perf(label: &str, duration_ms: u64, threshold_ms: u64) -> ObservationKind {
    ObservationKind::Performance {
        label: label.to_string(),
        duration_ms,
        threshold_ms,
        within_threshold: duration_ms <= threshold_ms,
    }
}

fn timeout(what: &str) -> ObservationKind {
    ObservationKind::Timeout {
        waiting_for: what.to_string(),
        elapsed_ms: 5000,
        timeout_ms: 5000,
    }
}

#[test]
fn test_record_and_retrieve() {
    let log = ObservationLog::new();

    log.record(perf("calculate", 120, 2000));

    assert_eq!(log.len(), 1);
    let observations = log.observations();
    assert_eq!(observations[0].seq, 0);
    assert_eq!(observations[0].kind, perf("calculate", 120, 2000));
}

#[rstest]
#[case(1, 1)]
#[case(5, 2)]
#[case(10, 5)]
#[case(3, 10)]
fn test_last_n(#[case] total: usize, #[case] n: usize) {
    let log = ObservationLog::new();

    for i in 0..total {
        log.record(perf(&format!("action {}", i), 1, 10));
    }

    let last = log.last(n);
    let expected_len = n.min(total);
    assert_eq!(last.len(), expected_len);
    if let Some(first) = last.first() {
        assert_eq!(first.seq as usize, total - expected_len);
    }
}

#[test]
fn test_warnings_filter() {
    let log = ObservationLog::new();
    log.record(perf("fast", 10, 2000));
    log.record(perf("slow", 2500, 2000));
    log.record(timeout("total-amount"));

    let warnings = log.warnings();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].kind, perf("slow", 2500, 2000));
    assert_eq!(warnings[1].kind, timeout("total-amount"));
}

#[test]
fn test_find_by_label() {
    let log = ObservationLog::new();
    log.record(perf("calculate", 10, 2000));
    log.record(perf("login", 10, 3000));
    log.record(perf("calculate", 20, 2000));

    assert_eq!(log.find_by_label("calculate").len(), 2);
    assert_eq!(log.find_by_label("login").len(), 1);
    assert!(log.find_by_label("missing").is_empty());
}

#[test]
fn test_clear() {
    let log = ObservationLog::new();
    log.record(timeout("x"));
    assert!(!log.is_empty());
    log.clear();
    assert!(log.is_empty());
}

#[test]
fn test_clone_shares_storage() {
    let log = ObservationLog::new();
    let clone = log.clone();
    clone.record(timeout("x"));
    assert_eq!(log.len(), 1);
}

#[test]
fn test_concurrent_records_get_unique_seq() {
    let log = ObservationLog::new();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let log = log.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    log.record(perf("p", 1, 1));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let mut seqs: Vec<u64> = log.observations().iter().map(|o| o.seq).collect();
    seqs.sort_unstable();
    seqs.dedup();
    assert_eq!(seqs.len(), 200);
}

#[test]
fn test_with_file_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("observations.jsonl");

    let log = ObservationLog::with_file(&path).unwrap();
    log.record(perf("calculate", 10, 2000));
    log.record(timeout("error-message"));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: Observation = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first.seq, 0);
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["kind"]["type"], "timeout");
}

proptest! {
    #[test]
    fn len_equals_record_count(count in 0usize..100) {
        let log = ObservationLog::new();
        for _ in 0..count {
            log.record(perf("p", 1, 1));
        }
        prop_assert_eq!(log.len(), count);
    }

    #[test]
    fn warnings_count_matches_slow_samples(
        durations in proptest::collection::vec(0u64..5000, 0..50),
    ) {
        let log = ObservationLog::new();
        for d in &durations {
            log.record(perf("p", *d, 2000));
        }
        let slow = durations.iter().filter(|d| **d > 2000).count();
        prop_assert_eq!(log.warnings().len(), slow);
    }
}
