//! Liter marks for the ruler overlay

/// Largest value on the ruler
pub const MAX_LITERS: f64 = 2.0;
/// Intervals between marks; there is one more mark than steps
pub const STEPS: usize = 4;
/// Gap between the outermost marks and the container edges
pub const VERTICAL_PADDING: f32 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RulerMark {
    pub liters: f64,
    /// Distance from the container top
    pub y: f32,
    pub label: String,
}

/// Marks from 0.0 L at the bottom to `MAX_LITERS` at the top
pub fn marks(total_height: f32) -> Vec<RulerMark> {
    let step_height = step_height(total_height);
    (0..=STEPS)
        .map(|index| {
            let liters = index as f64 * (MAX_LITERS / STEPS as f64);
            RulerMark {
                liters,
                y: total_height - VERTICAL_PADDING - index as f32 * step_height,
                label: format!("{:.1} L", liters),
            }
        })
        .collect()
}

/// Where `liters` sits on the same scale as the marks, pinned to the
/// top mark above `MAX_LITERS`
pub fn indicator_y(total_height: f32, liters: f64) -> f32 {
    let usable = total_height - VERTICAL_PADDING * 2.0;
    let scaled = (liters / MAX_LITERS).clamp(0.0, 1.0) as f32;
    total_height - VERTICAL_PADDING - usable * scaled
}

fn step_height(total_height: f32) -> f32 {
    (total_height - VERTICAL_PADDING * 2.0) / STEPS as f32
}
