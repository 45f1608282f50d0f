use crate::color::Rgba;
use crate::constants::{WAVE_BASELINE_OFFSET, WAVE_MAX_AMPLITUDE};
use crate::error::{Result, SceneError};
use crate::point::OscillatingPoint;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// One filled, smoothed wave band spanning the stage width.
#[derive(Clone, Debug)]
pub struct WaveLayer {
    pub layer_index: usize,
    pub point_count: usize,
    pub fill: Rgba,
    pub points: Vec<OscillatingPoint>,
    pub viewport: Vec2,
    pub anchor_y: f32,
    pub point_spacing: f32,
    baseline_offset: f32,
    max_amplitude: f32,
}

impl WaveLayer {
    pub fn new(layer_index: usize, point_count: usize, fill: Rgba) -> Result<Self> {
        if point_count < 2 {
            return Err(SceneError::TooFewPoints(point_count));
        }
        Ok(Self {
            layer_index,
            point_count,
            fill,
            points: Vec::with_capacity(point_count),
            viewport: Vec2::ZERO,
            anchor_y: 0.0,
            point_spacing: 0.0,
            baseline_offset: WAVE_BASELINE_OFFSET,
            max_amplitude: WAVE_MAX_AMPLITUDE,
        })
    }

    pub fn with_tuning(mut self, baseline_offset: f32, max_amplitude: f32) -> Self {
        self.baseline_offset = baseline_offset;
        self.max_amplitude = max_amplitude.max(0.0);
        self
    }

    /// Rebuild the point sequence for a new stage size. Amplitudes are
    /// re-rolled from `rng` on every call.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.viewport = Vec2::new(width, height);
        self.anchor_y = height - self.baseline_offset;
        self.point_spacing = width / (self.point_count - 1) as f32;

        self.points.clear();
        for i in 0..self.point_count {
            let amplitude = if self.max_amplitude > 0.0 {
                rng.gen_range(0.0..self.max_amplitude)
            } else {
                0.0
            };
            self.points.push(OscillatingPoint::new(
                (self.layer_index + i) as f32,
                amplitude,
                Vec2::new(self.point_spacing * i as f32, self.anchor_y),
            ));
        }
    }

    pub fn advance(&mut self) {
        for p in &mut self.points {
            p.advance();
        }
    }

    /// Advance every point and fill the band silhouette.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.points.is_empty() {
            return;
        }
        self.advance();

        surface.begin_path();
        surface.set_fill(self.fill);

        let first = self.points[0].current;
        let mut prev = first;
        surface.move_to(prev);
        for p in &self.points[1..] {
            let cur = p.current;
            // previous sample is the control point, midpoint the destination
            surface.quadratic_curve_to(prev, (prev + cur) * 0.5);
            prev = cur;
        }

        surface.line_to(prev);
        surface.line_to(self.viewport);
        surface.line_to(Vec2::new(first.x, self.viewport.y));
        surface.close_path();
        surface.fill();
    }
}
