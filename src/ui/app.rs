//! Main application struct and eframe integration
//!
//! This module contains the main WaterlineApp that implements eframe::App.

use crate::config::TrackerConfig;
use crate::ui::components::{StatisticsList, TabBar};
use crate::ui::home::{HomeView, SettingsView};
use crate::ui::state::{AppState, Tab};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, TopBottomPanel};
use tracing::info;

/// Main Waterline application
pub struct WaterlineApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Whether the app has been initialized
    initialized: bool,
}

impl WaterlineApp {
    /// Create a new Waterline application
    pub fn new(cc: &eframe::CreationContext<'_>, config: TrackerConfig) -> crate::Result<Self> {
        let theme = Theme::light();
        theme.apply(&cc.egui_ctx);

        Ok(Self {
            state: AppState::new(config)?,
            theme,
            initialized: false,
        })
    }

    /// Log the restored state (called on first frame)
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        info!(
            "Waterline UI initialized at {:.0}% of {} ml",
            self.state.fill.fraction * 100.0,
            self.state.config.total_goal_ml
        );
        self.initialized = true;
    }

    /// Show the tab bar along the bottom
    fn show_tab_bar(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("tab_bar")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(self.theme.spacing_sm),
            )
            .show(ctx, |ui| {
                TabBar::new(&mut self.state, &self.theme).show(ui);
            });
    }

    /// Show the selected tab
    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| match self.state.selected_tab {
                Tab::Home => HomeView::new(&mut self.state, &self.theme).show(ui),
                Tab::Statistics => {
                    egui::Frame::none()
                        .inner_margin(self.theme.spacing)
                        .show(ui, |ui| {
                            StatisticsList::new(&self.state.records, &self.theme).show(ui);
                        });
                }
                Tab::Settings => {
                    egui::Frame::none()
                        .inner_margin(self.theme.spacing)
                        .show(ui, |ui| {
                            SettingsView::new(&self.state, &self.theme).show(ui);
                        });
                }
            });
    }
}

impl eframe::App for WaterlineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.initialize();

        // Pick up sips applied by the ticker thread
        self.state.poll_events();

        self.show_tab_bar(ctx);
        self.show_content(ctx);

        // The wave never stops moving
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.press_end();
        info!("Waterline shutting down");
    }
}
