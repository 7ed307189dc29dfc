//! Animated liquid surface: curve sampling, placement, and the phase clock

pub mod curve;
pub mod phase;

pub use curve::{closed_outline, curve, surface_offset, Curve, CurvePoint, WaveParameters};
pub use phase::PhaseClock;

/// One of the stacked water layers drawn on the home view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveLayer {
    /// Added to the clock phase so the layers don't move in lockstep
    pub phase_offset: f32,
    /// Extra downward shift in points
    pub y_offset: f32,
    pub opacity: f32,
}

impl WaveLayer {
    /// Front and back layers of the home view
    pub const HOME: [WaveLayer; 2] = [
        WaveLayer {
            phase_offset: 0.0,
            y_offset: 0.0,
            opacity: 0.8,
        },
        WaveLayer {
            phase_offset: 1.0,
            y_offset: 5.0,
            opacity: 0.6,
        },
    ];

    pub fn parameters(&self, base: &WaveParameters, phase: f32) -> WaveParameters {
        base.with_phase(phase + self.phase_offset)
    }
}
