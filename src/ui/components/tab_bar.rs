//! Bottom tab bar

use crate::ui::state::{AppState, Tab};
use crate::ui::theme::Theme;
use egui::RichText;

/// One selectable label per tab, evenly spaced
pub struct TabBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.columns(Tab::ALL.len(), |columns| {
            for (column, tab) in columns.iter_mut().zip(Tab::ALL) {
                column.vertical_centered(|ui| {
                    let selected = self.state.selected_tab == tab;
                    let color = if selected {
                        self.theme.water
                    } else {
                        self.theme.text_muted
                    };
                    let text = RichText::new(tab.title()).color(color);
                    if ui.selectable_label(selected, text).clicked() {
                        self.state.select_tab(tab);
                    }
                });
            }
        });
    }
}
