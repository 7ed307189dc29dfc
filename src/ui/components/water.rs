//! Water fill component
//!
//! Paints the stacked wave layers behind the home view. Each layer is a mesh
//! of vertical strips running from the sampled surface down to the bottom
//! of the container.

use crate::wave::{self, WaveLayer, WaveParameters};
use egui::epaint::Mesh;
use egui::{Color32, Pos2, Rect, Shape};

/// Water fill painted into a fixed rect
pub struct WaterFill {
    fraction: f64,
    params: WaveParameters,
    phase: f32,
    wave_height: f32,
    lowering: f32,
    color: Color32,
}

impl WaterFill {
    pub fn new(fraction: f64, params: WaveParameters, phase: f32, color: Color32) -> Self {
        Self {
            fraction,
            params,
            phase,
            wave_height: 70.0,
            lowering: 80.0,
            color,
        }
    }

    pub fn wave_height(mut self, wave_height: f32) -> Self {
        self.wave_height = wave_height;
        self
    }

    pub fn lowering(mut self, lowering: f32) -> Self {
        self.lowering = lowering;
        self
    }

    /// Paint all home layers, back to front
    pub fn paint(&self, painter: &egui::Painter, rect: Rect) {
        let painter = painter.with_clip_rect(rect);
        for layer in WaveLayer::HOME.iter().rev() {
            painter.add(Shape::mesh(self.layer_mesh(rect, layer)));
        }
    }

    fn layer_mesh(&self, rect: Rect, layer: &WaveLayer) -> Mesh {
        let offset = wave::surface_offset(rect.height(), self.fraction, self.wave_height, self.lowering)
            + layer.y_offset;
        let params = layer.parameters(&self.params, self.phase);
        let color = self.color.gamma_multiply(layer.opacity);
        let top = rect.top() + offset;
        let bottom = rect.bottom().max(top + self.wave_height);

        let mut mesh = Mesh::default();
        for point in wave::curve(rect.width(), self.wave_height, &params) {
            let x = rect.left() + point.x;
            mesh.colored_vertex(Pos2::new(x, top + point.y), color);
            mesh.colored_vertex(Pos2::new(x, bottom), color);
        }

        let columns = mesh.vertices.len() as u32 / 2;
        for i in 1..columns {
            let (a, b) = (2 * (i - 1), 2 * (i - 1) + 1);
            let (c, d) = (2 * i, 2 * i + 1);
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(c, b, d);
        }
        mesh
    }
}
