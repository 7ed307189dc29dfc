//! Sine-wave liquid surface
//!
//! `curve` samples the surface at every whole unit of x. Callers close the
//! shape by going down to the bottom of the rect, see `closed_outline`.

use std::f32::consts::TAU;

/// Widest surface that is sampled. Past 2^24 an `f32` can no longer tell
/// neighbouring whole units apart, so wider rects stop sampling here.
pub const MAX_SAMPLED_WIDTH: u32 = 1 << 24;

/// A point on the surface, in the rect's local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub x: f32,
    pub y: f32,
}

impl CurvePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Shape of the surface. Phase is the animated part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParameters {
    /// Amplitude relative to half the rect height
    pub strength: f32,
    /// Full periods across the rect width
    pub frequency: f32,
    /// Offset into the sine, in radians
    pub phase: f32,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self::new(0.1, 3.5)
    }
}

impl WaveParameters {
    pub fn new(strength: f32, frequency: f32) -> Self {
        Self {
            strength,
            frequency,
            phase: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Height of the surface at horizontal position `x`
    pub fn height_at(&self, x: f32, width: f32, height: f32) -> f32 {
        let relative_x = x / width;
        self.strength * height * 0.5 * (relative_x * TAU * self.frequency + self.phase).sin()
    }
}

/// Lazily sampled surface from `x = 0` to `x = width`
#[derive(Clone, Debug)]
pub struct Curve {
    params: WaveParameters,
    width: f32,
    height: f32,
    next: u64,
    last: Option<u64>,
}

impl Iterator for Curve {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        let last = self.last?;
        if self.next > last {
            return None;
        }
        let x = self.next as f32;
        self.next += 1;
        Some(CurvePoint::new(x, self.params.height_at(x, self.width, self.height)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.last {
            Some(last) if self.next <= last => usize::try_from(last - self.next + 1).unwrap_or(usize::MAX),
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Curve {}

/// Sample the surface of a `width` x `height` rect
///
/// A zero, negative or non-finite width produces no points. Sampling stops
/// at `MAX_SAMPLED_WIDTH`.
pub fn curve(width: f32, height: f32, params: &WaveParameters) -> Curve {
    let last = if width.is_finite() && width > 0.0 {
        Some((width.floor() as u64).min(MAX_SAMPLED_WIDTH as u64))
    } else {
        None
    };
    Curve {
        params: *params,
        width,
        height,
        next: 0,
        last,
    }
}

/// Surface followed by the bottom corners, ready to fill as a polygon
pub fn closed_outline(width: f32, height: f32, params: &WaveParameters) -> Vec<CurvePoint> {
    let surface = curve(width, height, params);
    if surface.len() == 0 {
        return Vec::new();
    }
    let mut points = Vec::with_capacity(surface.len() + 2);
    points.extend(surface);
    points.push(CurvePoint::new(width, height));
    points.push(CurvePoint::new(0.0, height));
    points
}

/// Vertical offset of the wave band inside a container
///
/// An empty tracker sits `lowering` below the container bottom so no water
/// shows; a full one brings the band top to the container top plus `lowering`.
pub fn surface_offset(container_height: f32, fraction: f64, wave_height: f32, lowering: f32) -> f32 {
    container_height - (container_height * fraction as f32 + wave_height) + lowering
}
