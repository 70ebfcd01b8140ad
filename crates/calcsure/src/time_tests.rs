// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[tokio::test]
async fn system_clock_measures_real_sleep() {
    let clock = SystemClock::new();
    let start = clock.now_millis();
    clock.sleep(Duration::from_millis(20)).await;
    assert!(clock.elapsed_since(start) >= Duration::from_millis(20));
}

#[test]
fn fake_clock_starts_where_asked() {
    let clock = FakeClock::new(1000);
    clock.advance(Duration::from_millis(500));
    clock.advance_ms(250);
    assert_eq!(clock.now_millis(), 1750);
}

#[tokio::test]
async fn sleeping_moves_the_shared_timeline() {
    let clock = FakeClock::new(1000);
    let observer = clock.clone();
    clock.sleep(Duration::from_millis(500)).await;
    clock.sleep(Duration::from_millis(100)).await;
    assert_eq!(observer.now_millis(), 1600);
    assert_eq!(observer.sleeps(), 2);
}

#[tokio::test]
async fn frozen_handle_counts_sleeps_without_moving_time() {
    let clock = FakeClock::new(1000);
    let frozen = clock.frozen();

    frozen.sleep(Duration::from_millis(500)).await;
    assert_eq!(frozen.now_millis(), 1000);
    assert_eq!(clock.sleeps(), 1);

    clock.advance_ms(10);
    assert_eq!(frozen.now_millis(), 1010);
}

#[test]
fn elapsed_since_saturates() {
    let clock = FakeClock::new(100);
    assert_eq!(clock.elapsed_since(500), Duration::ZERO);
    assert_eq!(clock.elapsed_since(40), Duration::from_millis(60));
}

#[tokio::test]
async fn handle_delegates_to_fake_timeline() {
    let fake = FakeClock::default();
    let handle = ClockHandle::from(fake.clone());
    handle.sleep(Duration::from_millis(100)).await;
    assert_eq!(fake.now_millis(), 100);
    assert_eq!(handle.as_fake().unwrap().sleeps(), 1);
}

#[test]
fn handle_defaults_to_system_time() {
    assert!(ClockHandle::default().as_fake().is_none());
    assert!(ClockHandle::fake().as_fake().is_some());
}

#[test]
fn saturating_millis_clamps_huge_durations() {
    assert_eq!(saturating_millis(Duration::from_micros(2500)), 2);
    assert_eq!(saturating_millis(Duration::MAX), u64::MAX);
}
