//! Sip controller tests with a live ticker thread
//!
//! Intervals are short so the tests run fast; assertions only rely on
//! ordering and bounds, never on exact tick counts per wall-clock window.

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use waterline::intake::{FillState, IntakeEvent, IntakeGoal, SipController, SipState};
use waterline::storage::{MemoryPreferenceStore, PreferenceStore, FILL_FRACTION_KEY};

const FAST: Duration = Duration::from_millis(2);

fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let step = Duration::from_millis(2);
    let mut waited = Duration::ZERO;
    while waited < timeout {
        if condition() {
            return true;
        }
        thread::sleep(step);
        waited += step;
    }
    condition()
}

#[test]
fn test_holding_drains_goal_and_stops() {
    let goal = IntakeGoal::new(50, 5);
    let controller = SipController::new(goal, FAST);
    let events = controller.subscribe();

    controller.press_start();
    assert!(wait_until(Duration::from_secs(5), || controller.state() == SipState::Idle));

    let fill = controller.snapshot();
    assert_eq!(fill.remaining, 0);
    assert!((fill.fraction - 1.0).abs() < 1e-9);

    let received: Vec<_> = events.try_iter().collect();
    let sips = received
        .iter()
        .filter(|e| matches!(e, IntakeEvent::Changed(_)))
        .count();
    assert_eq!(sips, 10);
    assert!(received.contains(&IntakeEvent::Exhausted));
    assert_eq!(
        received.last(),
        Some(&IntakeEvent::StateChanged(SipState::Idle))
    );
}

#[test]
fn test_release_stops_ticks_synchronously() {
    let controller = SipController::new(IntakeGoal::default(), FAST);

    controller.press_start();
    assert!(wait_until(Duration::from_secs(5), || controller.snapshot().remaining < 2100));
    controller.press_end();

    let at_release = controller.snapshot();
    thread::sleep(Duration::from_millis(30));
    assert_eq!(controller.snapshot(), at_release);
    assert_eq!(controller.state(), SipState::Idle);
}

#[test]
fn test_press_again_resumes_from_last_value() {
    let controller = SipController::new(IntakeGoal::default(), FAST);

    controller.press_start();
    assert!(wait_until(Duration::from_secs(5), || controller.snapshot().remaining <= 2090));
    controller.press_end();
    let paused = controller.snapshot();

    controller.press_start();
    assert!(wait_until(Duration::from_secs(5), || {
        controller.snapshot().remaining < paused.remaining
    }));
    controller.press_end();

    let resumed = controller.snapshot();
    assert!(resumed.fraction > paused.fraction);
    assert!(resumed.remaining < paused.remaining);
}

#[test]
fn test_events_are_monotonic() {
    let controller = SipController::new(IntakeGoal::new(100, 5), FAST);
    let events = controller.subscribe();

    controller.press_start();
    assert!(wait_until(Duration::from_secs(5), || controller.state() == SipState::Idle));

    let mut last = FillState::empty(&IntakeGoal::new(100, 5));
    for event in events.try_iter() {
        if let IntakeEvent::Changed(fill) = event {
            assert!(fill.fraction >= last.fraction);
            assert!(fill.remaining <= last.remaining);
            last = fill;
        }
    }
    assert_eq!(last.remaining, 0);
}

#[test]
fn test_reset_while_holding() {
    let controller = SipController::new(IntakeGoal::default(), FAST);

    controller.press_start();
    assert!(wait_until(Duration::from_secs(5), || controller.snapshot().remaining < 2100));
    controller.reset();

    assert_eq!(controller.snapshot(), FillState { fraction: 0.0, remaining: 2100 });
    assert_eq!(controller.state(), SipState::Idle);

    thread::sleep(Duration::from_millis(30));
    assert_eq!(controller.snapshot(), FillState { fraction: 0.0, remaining: 2100 });
}

#[test]
fn test_every_sip_is_persisted() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let controller = SipController::restore(IntakeGoal::new(20, 5), FAST, store.clone());

    controller.press_start();
    assert!(wait_until(Duration::from_secs(5), || controller.state() == SipState::Idle));
    assert_eq!(store.get_f64(FILL_FRACTION_KEY).unwrap(), Some(1.0));

    controller.reset();
    assert_eq!(store.get_f64(FILL_FRACTION_KEY).unwrap(), Some(0.0));
}

#[test]
fn test_restart_after_exhaustion_goes_idle_again() {
    let controller = SipController::new(IntakeGoal::new(10, 5), FAST);

    controller.press_start();
    assert!(wait_until(Duration::from_secs(5), || controller.state() == SipState::Idle));
    let full = controller.snapshot();

    controller.press_start();
    assert!(wait_until(Duration::from_secs(5), || controller.state() == SipState::Idle));
    assert_eq!(controller.snapshot(), full);
}
