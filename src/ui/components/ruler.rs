//! Ruler overlay component
//!
//! Vertical gauge on the right edge with liter marks and the current level.

use crate::ruler;
use crate::ui::theme::Theme;
use egui::{Align2, FontId, Pos2, Rect, Stroke};

/// Width reserved for the ruler
const RULER_WIDTH: f32 = 50.0;

pub struct RulerOverlay<'a> {
    theme: &'a Theme,
    liters: f64,
}

impl<'a> RulerOverlay<'a> {
    /// `liters` is the amount drunk so far
    pub fn new(theme: &'a Theme, liters: f64) -> Self {
        Self { theme, liters }
    }

    /// Paint into the right-hand strip of `container`
    pub fn paint(&self, painter: &egui::Painter, container: Rect) {
        let rect = Rect::from_min_max(
            Pos2::new(container.right() - RULER_WIDTH, container.top()),
            container.max,
        );
        let line_x = rect.right() - 1.0;

        painter.line_segment(
            [Pos2::new(line_x, rect.top()), Pos2::new(line_x, rect.bottom())],
            Stroke::new(2.0, self.theme.ruler),
        );

        for mark in ruler::marks(rect.height()) {
            let y = rect.top() + mark.y;
            painter.line_segment(
                [Pos2::new(line_x - 8.0, y), Pos2::new(line_x, y)],
                Stroke::new(1.0, self.theme.ruler),
            );
            painter.text(
                Pos2::new(line_x - 10.0, y),
                Align2::RIGHT_CENTER,
                &mark.label,
                FontId::proportional(11.0),
                self.theme.text_primary,
            );
        }

        let level_y = rect.top() + ruler::indicator_y(rect.height(), self.liters);
        painter.circle_filled(Pos2::new(line_x, level_y), 4.0, self.theme.water);
    }
}
