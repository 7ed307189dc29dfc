//! Theme and styling for the Waterline UI
//!
//! This module provides colors, fonts, and visual styling for the application.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Water and accent color
    pub water: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_muted: Color32,

    /// Ruler line and tick color
    pub ruler: Color32,

    /// Drink button fill and drop shadow
    pub button_fill: Color32,
    pub button_shadow: Color32,

    /// Border radius for cards/panels
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Create a light theme
    pub fn light() -> Self {
        Self {
            water: Color32::from_rgb(51, 153, 230),

            bg_primary: Color32::WHITE,
            bg_secondary: Color32::from_rgb(242, 242, 247),

            text_primary: Color32::BLACK,
            text_muted: Color32::GRAY,

            ruler: Color32::GRAY,

            button_fill: Color32::WHITE,
            button_shadow: Color32::from_rgba_unmultiplied(128, 128, 128, 100),

            card_rounding: Rounding::same(12.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.hovered.bg_fill = self.water.gamma_multiply(0.2);
        visuals.widgets.active.bg_fill = self.water.gamma_multiply(0.4);

        visuals.selection.bg_fill = self.water.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.water);
        visuals.hyperlink_color = self.water;
        visuals.window_rounding = self.card_rounding;

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(30.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(16.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(16.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}
