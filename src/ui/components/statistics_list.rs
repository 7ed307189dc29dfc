//! Statistics list component

use crate::stats::DrinkRecord;
use crate::ui::theme::Theme;
use egui::{RichText, ScrollArea};

pub struct StatisticsList<'a> {
    records: &'a [DrinkRecord],
    theme: &'a Theme,
}

impl<'a> StatisticsList<'a> {
    pub fn new(records: &'a [DrinkRecord], theme: &'a Theme) -> Self {
        Self { records, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.heading("Statistics");
        ui.add_space(self.theme.spacing);
        ui.label(RichText::new("Your saves").color(self.theme.text_muted));

        ScrollArea::vertical().id_salt("statistics").show(ui, |ui| {
            if self.records.is_empty() {
                ui.label(RichText::new("Nothing saved yet").color(self.theme.text_muted));
                return;
            }

            for record in self.records {
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .rounding(self.theme.card_rounding)
                    .inner_margin(self.theme.spacing_sm)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&record.day).strong());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(record.display_amount())
                                            .strong()
                                            .color(self.theme.water),
                                    );
                                },
                            );
                        });
                    });
            }
        });
    }
}
