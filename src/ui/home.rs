//! Home tab: water fill, ruler, and the drink button

use crate::ui::components::{DrinkButton, RulerOverlay, WaterFill};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::RichText;

pub struct HomeView<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> HomeView<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let container = ui.max_rect();
        let fraction = self.state.fill.fraction;
        let config = &self.state.config;
        WaterFill::new(
            fraction,
            config.wave_parameters(),
            self.state.wave_phase(),
            self.theme.water,
        )
        .wave_height(config.wave_height)
        .lowering(config.lowering_offset)
        .paint(ui.painter(), container);

        let consumed = self.state.consumed_liters();
        RulerOverlay::new(self.theme, consumed).paint(ui.painter(), container);

        let date = chrono::Local::now().format("%B %-d, %Y").to_string();
        let goal_liters = self.state.config.goal_liters();
        let goal_reached = self.state.goal_reached;

        ui.vertical_centered(|ui| {
            ui.add_space(self.theme.spacing_lg * 2.0);
            ui.label(RichText::new(date).size(20.0).strong());

            ui.add_space(container.height() * 0.2);
            let title = if goal_reached {
                "Goal reached!"
            } else {
                "Time to drink!"
            };
            ui.label(RichText::new(title).size(30.0).strong().color(self.theme.text_primary));
            ui.label(
                RichText::new(format!("Your goal is {:.1} liters", goal_liters))
                    .size(18.0)
                    .color(self.theme.text_muted),
            );
            ui.label(
                RichText::new(format!("{:.2} L", consumed))
                    .size(16.0)
                    .color(self.theme.water),
            );

            ui.add_space(self.theme.spacing_lg * 2.0);
            DrinkButton::new(self.state, self.theme).show(ui);

            ui.add_space(self.theme.spacing);
            let reset = ui.button("Reset");
            reset.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Reset intake")
            });
            if reset.clicked() {
                self.state.reset();
            }
        });
    }
}

/// Settings tab: read-only view of the active configuration
pub struct SettingsView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> SettingsView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let config = &self.state.config;
        ui.heading("Settings");
        ui.add_space(self.theme.spacing);

        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([self.theme.spacing, self.theme.spacing_sm])
            .show(ui, |ui| {
                ui.label("Daily goal");
                ui.label(format!("{} ml", config.total_goal_ml));
                ui.end_row();

                ui.label("Sip size");
                ui.label(format!("{} ml", config.sip_amount_ml));
                ui.end_row();

                ui.label("Sip interval");
                ui.label(format!("{} ms", config.tick_interval_ms));
                ui.end_row();

                ui.label("Remaining today");
                ui.label(format!("{} ml", self.state.fill.remaining));
                ui.end_row();
            });

        if let Some(error) = &self.state.last_error {
            ui.add_space(self.theme.spacing);
            ui.label(RichText::new(error).color(egui::Color32::RED));
        }
    }
}
