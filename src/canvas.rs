use crate::sprite::Sprite;
use anyhow::anyhow;
use glam::Vec2;
use sky_core::{Rgba, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by a canvas element and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Fails when the canvas cannot hand out a 2D context; there is nothing
    /// useful to animate without one.
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext('2d'): {:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    type Image = Sprite;

    fn css_size(&self) -> Vec2 {
        Vec2::new(
            self.canvas.offset_width() as f32,
            self.canvas.offset_height() as f32,
        )
    }

    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width.max(1));
        self.canvas.set_height(height.max(1));
    }

    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ctx
            .clear_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    fn quadratic_curve_to(&mut self, control: Vec2, to: Vec2) {
        self.ctx
            .quadratic_curve_to(control.x as f64, control.y as f64, to.x as f64, to.y as f64);
    }

    fn line_to(&mut self, p: Vec2) {
        self.ctx.line_to(p.x as f64, p.y as f64);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn set_fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn draw_image(&mut self, image: &Sprite, at: Vec2, size: Vec2) {
        image.draw(&self.ctx, at, size);
    }
}
