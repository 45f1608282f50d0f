//! Scene configuration.
//!
//! `SceneConfig::default()` reproduces the reference header scene. Front-ends
//! only override the RNG seed in practice; the remaining fields exist so the
//! model can be exercised with smaller or differently-tuned scenes.

use crate::color::Rgba;
use crate::constants::*;

/// Boat geometry, relative to the boat's own viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoatTuning {
    pub fill: Rgba,
    /// Sprite height / viewport height.
    pub height_ratio: f32,
    /// Sprite width / sprite height.
    pub aspect: f32,
    pub anchor_x: f32,
    /// Anchor y is `2 * height - anchor_y_inset`.
    pub anchor_y_inset: f32,
    pub bob_amplitude: f32,
}

impl Default for BoatTuning {
    fn default() -> Self {
        Self {
            fill: BOAT_FILL,
            height_ratio: BOAT_HEIGHT_RATIO,
            aspect: BOAT_ASPECT,
            anchor_x: BOAT_ANCHOR_X,
            anchor_y_inset: BOAT_ANCHOR_Y_INSET,
            bob_amplitude: BOAT_BOB_AMPLITUDE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// One wave layer per entry, drawn in order.
    pub wave_colors: Vec<Rgba>,
    pub wave_point_density: f32,
    pub wave_baseline_offset: f32,
    pub wave_max_amplitude: f32,
    pub boat: BoatTuning,
    pub boat_sprite_path: &'static str,
    /// Frames a failed sprite load waits before it is requested again.
    pub sprite_retry_frames: u32,
    pub pixel_ratio: f32,
    pub boat_stage_scale: f32,
    /// Fixed seed for point amplitudes; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            wave_colors: DEFAULT_WAVE_COLORS.to_vec(),
            wave_point_density: WAVE_POINT_DENSITY,
            wave_baseline_offset: WAVE_BASELINE_OFFSET,
            wave_max_amplitude: WAVE_MAX_AMPLITUDE,
            boat: BoatTuning::default(),
            boat_sprite_path: BOAT_SPRITE_PATH,
            sprite_retry_frames: SPRITE_RETRY_FRAMES,
            pixel_ratio: PIXEL_RATIO,
            boat_stage_scale: BOAT_STAGE_SCALE,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Points per wave layer for a canvas of the given on-screen width.
    pub fn wave_point_count(&self, css_width: f32) -> usize {
        let n = (css_width * self.wave_point_density).round();
        if n.is_finite() && n > 0.0 {
            (n as usize).max(WAVE_MIN_POINTS)
        } else {
            WAVE_MIN_POINTS
        }
    }
}
