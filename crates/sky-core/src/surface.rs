//! Immediate-mode 2D drawing contract used by the scene.
//!
//! The web front-end implements this on top of `CanvasRenderingContext2d`;
//! `RecordingSurface` captures the call stream for host-side tests.

use crate::color::Rgba;
use glam::Vec2;

pub trait Surface {
    /// Host image handle, loaded once and reused across frames.
    type Image;

    /// Size of the surface as laid out on screen (CSS pixels).
    fn css_size(&self) -> Vec2;
    /// Resize the backing pixel buffer.
    fn set_pixel_size(&mut self, width: u32, height: u32);

    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn quadratic_curve_to(&mut self, control: Vec2, to: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn close_path(&mut self);
    fn set_fill(&mut self, color: Rgba);
    fn fill(&mut self);
    /// Draw `image` scaled into the rectangle at `at` of `size`. Images that
    /// are not ready must be skipped silently.
    fn draw_image(&mut self, image: &Self::Image, at: Vec2, size: Vec2);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    SetPixelSize(u32, u32),
    ClearRect(Vec2, Vec2),
    BeginPath,
    MoveTo(Vec2),
    QuadraticCurveTo(Vec2, Vec2),
    LineTo(Vec2),
    ClosePath,
    SetFill(Rgba),
    Fill,
    DrawImage(Vec2, Vec2),
}

/// Surface that records every call instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub css_size: Vec2,
    pub pixel_size: (u32, u32),
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(css_width: f32, css_height: f32) -> Self {
        Self {
            css_size: Vec2::new(css_width, css_height),
            ..Default::default()
        }
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Fill colors in the order they were set.
    pub fn fills(&self) -> Vec<Rgba> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::SetFill(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Image = ();

    fn css_size(&self) -> Vec2 {
        self.css_size
    }

    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.pixel_size = (width, height);
        self.ops.push(DrawOp::SetPixelSize(width, height));
    }

    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ops.push(DrawOp::ClearRect(origin, size));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.ops.push(DrawOp::MoveTo(p));
    }

    fn quadratic_curve_to(&mut self, control: Vec2, to: Vec2) {
        self.ops.push(DrawOp::QuadraticCurveTo(control, to));
    }

    fn line_to(&mut self, p: Vec2) {
        self.ops.push(DrawOp::LineTo(p));
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn set_fill(&mut self, color: Rgba) {
        self.ops.push(DrawOp::SetFill(color));
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn draw_image(&mut self, _image: &(), at: Vec2, size: Vec2) {
        self.ops.push(DrawOp::DrawImage(at, size));
    }
}
