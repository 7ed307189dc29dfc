//! Drink button component
//!
//! Press and hold to sip. Holding Space does the same when no text field has
//! focus.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{Align2, FontId, Key, Rect, Rounding, Sense, Vec2};

/// Capsule button driving the sip timer
pub struct DrinkButton<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> DrinkButton<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let size = Vec2::new(220.0, 60.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Drink water")
        });

        let any_widget_focused = ui.memory(|m| m.focused().is_some());
        let space_held = !any_widget_focused && ui.input(|i| i.key_down(Key::Space));
        let held = response.is_pointer_button_down_on() || space_held;

        if held {
            self.state.press_start();
        } else {
            self.state.press_end();
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect);
        }

        response
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect) {
        let painter = ui.painter();
        let scale = if self.state.is_pressing { 1.05 } else { 1.0 };
        let rect = Rect::from_center_size(rect.center(), rect.size() * scale);
        let rounding = Rounding::same(rect.height() / 2.0);

        painter.rect_filled(
            rect.translate(Vec2::new(0.0, 5.0)),
            rounding,
            self.theme.button_shadow,
        );
        painter.rect_filled(rect, rounding, self.theme.button_fill);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Drink water",
            FontId::proportional(22.0),
            self.theme.water,
        );
    }
}
