//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests render the home view and check the accessibility tree for
//! the expected labels and controls.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use std::sync::Arc;
use waterline::config::TrackerConfig;
use waterline::storage::{MemoryPreferenceStore, PreferenceStore, FILL_FRACTION_KEY};
use waterline::intake::SipState;
use waterline::ui::{AppState, HomeView, SettingsView, StatisticsList, Tab, TabBar, Theme};

fn state_with_fraction(fraction: f64) -> AppState {
    let store = Arc::new(MemoryPreferenceStore::new());
    store.set_f64(FILL_FRACTION_KEY, fraction).unwrap();
    AppState::with_store(TrackerConfig::default(), store)
}

fn home_harness(state: AppState) -> Harness<'static, AppState> {
    Harness::builder()
        .with_size(egui::Vec2::new(390.0, 844.0))
        .build_state(
            |ctx, state: &mut AppState| {
                let theme = Theme::light();
                egui::CentralPanel::default().show(ctx, |ui| {
                    HomeView::new(state, &theme).show(ui);
                });
            },
            state,
        )
}

fn space(pressed: bool) -> egui::Event {
    egui::Event::Key {
        key: egui::Key::Space,
        physical_key: None,
        pressed,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    }
}

/// Home view plus the tab bar, switching content like the app does
fn tabbed_harness(state: AppState) -> Harness<'static, AppState> {
    Harness::builder()
        .with_size(egui::Vec2::new(390.0, 844.0))
        .build_state(
            |ctx, state: &mut AppState| {
                let theme = Theme::light();
                state.poll_events();
                egui::TopBottomPanel::bottom("tab_bar").show(ctx, |ui| {
                    TabBar::new(state, &theme).show(ui);
                });
                egui::CentralPanel::default().show(ctx, |ui| {
                    if state.selected_tab == Tab::Home {
                        HomeView::new(state, &theme).show(ui);
                    }
                });
            },
            state,
        )
}

/// Test that the home view shows its title and goal
#[test]
fn test_home_labels_exist() {
    let mut harness = home_harness(AppState::in_memory());
    harness.run();

    let _title = harness.get_by_label("Time to drink!");
    let _goal = harness.get_by_label("Your goal is 2.1 liters");
    let _progress = harness.get_by_label("0.00 L");
}

/// Test that the drink and reset buttons are accessible
#[test]
fn test_buttons_exist() {
    let mut harness = home_harness(AppState::in_memory());
    harness.run();

    let _drink = harness.get_by_label("Drink water");
    let _reset = harness.get_by_label("Reset intake");
}

/// Test that a restored fraction shows as consumed liters
#[test]
fn test_restored_progress_is_shown() {
    let mut harness = home_harness(state_with_fraction(0.5));
    harness.run();

    let _progress = harness.get_by_label("1.05 L");
}

/// Test that clicking reset empties the tracker
#[test]
fn test_reset_button_empties_tracker() {
    let mut harness = home_harness(state_with_fraction(0.5));
    harness.run();

    harness.get_by_label("Reset intake").click();
    harness.run();

    assert_eq!(harness.state().fill.fraction, 0.0);
    assert_eq!(harness.state().fill.remaining, 2100);

    harness.run();
    let _progress = harness.get_by_label("0.00 L");
}

/// Test that a full tracker shows the goal-reached title
#[test]
fn test_goal_reached_title() {
    let mut harness = home_harness(state_with_fraction(1.0));
    harness.run();

    let _title = harness.get_by_label("Goal reached!");
}

/// Test that the statistics tab lists the saved records
#[test]
fn test_statistics_list() {
    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(390.0, 600.0))
        .build_state(
            |ctx, state: &mut AppState| {
                let theme = Theme::light();
                egui::CentralPanel::default().show(ctx, |ui| {
                    StatisticsList::new(&state.records, &theme).show(ui);
                });
            },
            AppState::in_memory(),
        );
    harness.run();

    let _header = harness.get_by_label("Your saves");
    let _tuesday = harness.get_by_label("Tuesday");
    let _monday = harness.get_by_label("Monday");
    let _amount = harness.get_by_label("2.000 ml");
}

/// Test that settings show the configured goal
#[test]
fn test_settings_show_goal() {
    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(390.0, 600.0))
        .build_state(
            |ctx, state: &mut AppState| {
                let theme = Theme::light();
                egui::CentralPanel::default().show(ctx, |ui| {
                    SettingsView::new(state, &theme).show(ui);
                });
            },
            AppState::in_memory(),
        );
    harness.run();

    let _goal = harness.get_by_label("Daily goal");
    let _sip = harness.get_by_label("5 ml");
    let _interval = harness.get_by_label("100 ms");
}

/// Test that pressing the pointer on the drink button sips until release
#[test]
fn test_pointer_hold_starts_and_stops_sipping() {
    let mut harness = tabbed_harness(AppState::in_memory());
    harness.run();

    let bounds = harness
        .get_by_label("Drink water")
        .bounding_box()
        .expect("drink button has bounds");
    let center = egui::pos2(
        ((bounds.x0 + bounds.x1) / 2.0) as f32,
        ((bounds.y0 + bounds.y1) / 2.0) as f32,
    );
    let button = |pressed| egui::Event::PointerButton {
        pos: center,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    };

    harness.input_mut().events.push(egui::Event::PointerMoved(center));
    harness.input_mut().events.push(button(true));
    harness.run();
    harness.state_mut().poll_events();
    assert!(harness.state().is_pressing);
    assert_eq!(harness.state().sip_state, SipState::Accumulating);

    harness.input_mut().events.push(button(false));
    harness.run();
    harness.state_mut().poll_events();
    assert!(!harness.state().is_pressing);
    assert_eq!(harness.state().sip_state, SipState::Idle);
}

/// Test that holding Space holds the drink button
#[test]
fn test_space_hold_starts_and_stops_sipping() {
    let mut harness = tabbed_harness(AppState::in_memory());
    harness.run();

    harness.input_mut().events.push(space(true));
    harness.run();
    harness.state_mut().poll_events();
    assert!(harness.state().is_pressing);
    assert_eq!(harness.state().sip_state, SipState::Accumulating);

    harness.input_mut().events.push(space(false));
    harness.run();
    harness.state_mut().poll_events();
    assert!(!harness.state().is_pressing);
    assert_eq!(harness.state().sip_state, SipState::Idle);
}

/// Test that switching away from home while holding stops the sip timer
#[test]
fn test_tab_switch_releases_drink_button() {
    let mut harness = tabbed_harness(AppState::in_memory());
    harness.run();

    harness.input_mut().events.push(space(true));
    harness.run();
    assert!(harness.state().is_pressing);

    harness.get_by_label("Statistics").click();
    harness.run();
    harness.state_mut().poll_events();

    assert_eq!(harness.state().selected_tab, Tab::Statistics);
    assert!(!harness.state().is_pressing);
    assert_eq!(harness.state().sip_state, SipState::Idle);
    assert_eq!(harness.state().controller.state(), SipState::Idle);
}

/// Test that an unreadable preferences file is reported on the settings tab
#[test]
fn test_corrupt_preferences_are_reported() {
    let path = std::env::temp_dir()
        .join(format!("waterline-ui-{}", uuid::Uuid::new_v4()))
        .join("preferences.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[1, 2").unwrap();

    let config = TrackerConfig::default().with_preferences_path(path.clone());
    let state = AppState::new(config).unwrap();

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(390.0, 600.0))
        .build_state(
            |ctx, state: &mut AppState| {
                let theme = Theme::light();
                egui::CentralPanel::default().show(ctx, |ui| {
                    SettingsView::new(state, &theme).show(ui);
                });
            },
            state,
        );
    harness.run();

    let _error = harness.get_by_label("Saved preferences are unreadable and were ignored.");
    assert_eq!(harness.state().fill.fraction, 0.0);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
