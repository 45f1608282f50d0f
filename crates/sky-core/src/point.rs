use crate::constants::PHASE_STEP;
use glam::Vec2;
use std::f32::consts::TAU;

/// A position that bobs vertically around a fixed anchor.
///
/// After `n` calls to [`advance`](Self::advance) the point sits at
/// `anchor.y + amplitude * sin(phase_seed + (n - 1) * PHASE_STEP)`; `x` never
/// moves.
#[derive(Clone, Debug)]
pub struct OscillatingPoint {
    pub phase_seed: f32,
    pub amplitude: f32,
    pub anchor: Vec2,
    pub current: Vec2,
    phase: f32,
}

impl OscillatingPoint {
    pub fn new(phase_seed: f32, amplitude: f32, anchor: Vec2) -> Self {
        Self {
            phase_seed,
            amplitude: amplitude.abs(),
            anchor,
            current: anchor,
            phase: phase_seed,
        }
    }

    #[inline]
    pub fn advance(&mut self) -> Vec2 {
        self.current.y = self.anchor.y + self.amplitude * self.phase.sin();
        // kept in [0, TAU) for long-running pages
        self.phase = (self.phase + PHASE_STEP).rem_euclid(TAU);
        self.current
    }

    /// Range `current.y` is confined to.
    #[inline]
    pub fn band(&self) -> (f32, f32) {
        (self.anchor.y - self.amplitude, self.anchor.y + self.amplitude)
    }
}
