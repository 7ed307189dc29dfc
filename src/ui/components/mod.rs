//! UI components module
//!
//! This module provides reusable UI components for the Waterline application.

pub mod drink_button;
pub mod ruler;
pub mod statistics_list;
pub mod tab_bar;
pub mod water;

pub use drink_button::DrinkButton;
pub use ruler::RulerOverlay;
pub use statistics_list::StatisticsList;
pub use tab_bar::TabBar;
pub use water::WaterFill;
