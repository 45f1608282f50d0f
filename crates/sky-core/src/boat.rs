use crate::config::BoatTuning;
use crate::point::OscillatingPoint;
use crate::surface::Surface;
use glam::Vec2;

/// Static boat image bobbing on a single oscillating point.
#[derive(Clone, Debug)]
pub struct BoatSprite<I> {
    pub viewport: Vec2,
    pub sprite_size: Vec2,
    pub anchor: Vec2,
    pub tuning: BoatTuning,
    pub point: Option<OscillatingPoint>,
    image: I,
}

impl<I> BoatSprite<I> {
    pub fn new(image: I, tuning: BoatTuning) -> Self {
        Self {
            viewport: Vec2::ZERO,
            sprite_size: Vec2::ZERO,
            anchor: Vec2::ZERO,
            tuning,
            point: None,
            image,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        let t = self.tuning;
        let sprite_h = height * t.height_ratio;
        self.sprite_size = Vec2::new(sprite_h * t.aspect, sprite_h);
        self.anchor = Vec2::new(t.anchor_x, height * 2.0 - t.anchor_y_inset);
        self.point = Some(OscillatingPoint::new(0.0, t.bob_amplitude, self.anchor));
    }

    pub fn draw<S>(&mut self, surface: &mut S)
    where
        S: Surface<Image = I> + ?Sized,
    {
        let Some(point) = self.point.as_mut() else {
            return;
        };
        let at = point.advance();
        surface.begin_path();
        surface.set_fill(self.tuning.fill);
        surface.draw_image(&self.image, at, self.sprite_size);
        surface.fill();
        surface.close_path();
    }
}
