use crate::config::SceneConfig;
use crate::error::{Result, SceneError};
use crate::surface::Surface;
use crate::wave::WaveLayer;
use rand::Rng;

/// Fixed set of wave layers composited back-to-front.
#[derive(Clone, Debug)]
pub struct WaveStack {
    pub layers: Vec<WaveLayer>,
}

impl WaveStack {
    /// `css_width` is the canvas' on-screen width; it only sizes the per-layer
    /// point count.
    pub fn new(config: &SceneConfig, css_width: f32) -> Result<Self> {
        if config.wave_colors.is_empty() {
            return Err(SceneError::EmptyPalette);
        }
        let point_count = config.wave_point_count(css_width);
        let layers = config
            .wave_colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                WaveLayer::new(i, point_count, *color).map(|l| {
                    l.with_tuning(config.wave_baseline_offset, config.wave_max_amplitude)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        log::debug!(
            "[waves] layers={} points_per_layer={}",
            layers.len(),
            point_count
        );
        Ok(Self { layers })
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        for layer in &mut self.layers {
            layer.resize(width, height, rng);
        }
    }

    /// Draw every layer, index 0 first.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for layer in &mut self.layers {
            layer.draw(surface);
        }
    }
}
