use crate::dom;
use anyhow::anyhow;
use glam::Vec2;
use sky_core::{RetryAction, RetryTimer};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Image loaded once and drawn every frame once decoded.
///
/// A failed load is never surfaced as an error: the draw is skipped and the
/// source is re-requested on the [`RetryTimer`] cadence.
pub struct Sprite {
    image: web::HtmlImageElement,
    src: String,
    retry: Rc<RefCell<RetryTimer>>,
    _on_error: dom::Listener,
}

impl Sprite {
    pub fn load(src: &str, retry_frames: u32) -> anyhow::Result<Self> {
        let image = web::HtmlImageElement::new().map_err(|e| anyhow!("image element: {:?}", e))?;
        let retry = Rc::new(RefCell::new(RetryTimer::new(retry_frames)));
        let retry_on_error = retry.clone();
        let src_on_error = src.to_owned();
        let on_error = dom::listen(&image, "error", move || {
            if retry_on_error.borrow_mut().mark_failed() {
                log::warn!("[sprite] failed to load {}; will retry", src_on_error);
            }
        })?;
        image.set_src(src);
        log::debug!("[sprite] loading {}", src);
        Ok(Self {
            image,
            src: src.to_owned(),
            retry,
            _on_error: on_error,
        })
    }

    /// True when the image can be drawn this frame.
    pub fn poll(&self) -> bool {
        let action = self.retry.borrow_mut().tick();
        match action {
            RetryAction::Draw => self.image.complete(),
            RetryAction::Skip => false,
            RetryAction::Reload => {
                log::debug!("[sprite] re-requesting {}", self.src);
                self.image.set_src(&self.src);
                false
            }
        }
    }

    pub fn draw(&self, ctx: &web::CanvasRenderingContext2d, at: Vec2, size: Vec2) {
        if !self.poll() {
            return;
        }
        if let Err(e) = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.image,
            at.x as f64,
            at.y as f64,
            size.x as f64,
            size.y as f64,
        ) {
            // decoded-but-unusable images land here; treat like a failed load
            log::debug!("[sprite] draw skipped: {:?}", e);
            if self.retry.borrow_mut().mark_failed() {
                log::warn!("[sprite] {} is unusable; will retry", self.src);
            }
        }
    }
}
