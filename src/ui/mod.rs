//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for Waterline.

mod app;
pub mod components;
mod home;
mod state;
mod theme;

pub use app::WaterlineApp;
pub use components::{DrinkButton, RulerOverlay, StatisticsList, TabBar, WaterFill};
pub use home::{HomeView, SettingsView};
pub use state::{AppState, Tab};
pub use theme::Theme;
