#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::frame::{RafScheduler, WebSession};
use crate::sprite::Sprite;
use sky_core::{SceneConfig, Session, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod sprite;

thread_local! {
    // handle for the auto-mounted header; lives for the page's lifetime
    static HEADER: RefCell<Option<HeaderAnimation>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("sky-header starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    match dom::canvas_by_id(&document, constants::HEADER_CANVAS_ID) {
        Some(canvas) => match mount_canvas(canvas, None) {
            Ok(anim) => HEADER.with(|h| *h.borrow_mut() = Some(anim)),
            Err(e) => log::error!("init error: {:?}", e),
        },
        None => log::debug!(
            "[mount] no #{} element; waiting for an explicit mount",
            constants::HEADER_CANVAS_ID
        ),
    }
    Ok(())
}

/// Stop the auto-mounted header animation, if any.
#[wasm_bindgen(js_name = unmountHeader)]
pub fn unmount_header() {
    HEADER.with(|h| {
        if let Some(mut anim) = h.borrow_mut().take() {
            anim.stop();
        }
    });
}

/// Running header animation bound to one canvas.
#[wasm_bindgen]
pub struct HeaderAnimation {
    session: Rc<RefCell<WebSession>>,
    resize_listener: Option<dom::Listener>,
}

#[wasm_bindgen]
impl HeaderAnimation {
    /// Start animating `canvas`. `seed` fixes the wave amplitudes.
    pub fn mount(
        canvas: web::HtmlCanvasElement,
        seed: Option<u64>,
    ) -> Result<HeaderAnimation, JsValue> {
        mount_canvas(canvas, seed).map_err(|e| {
            log::error!("[mount] {:?}", e);
            JsValue::from_str(&e.to_string())
        })
    }

    /// Rebuild geometry for the canvas' current size.
    pub fn resize(&self) {
        self.session.borrow_mut().resize();
    }

    /// Cancel the frame loop and detach the resize listener. Idempotent.
    pub fn stop(&mut self) {
        self.session.borrow_mut().stop();
        if let Some(mut listener) = self.resize_listener.take() {
            listener.remove();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        let session = self.session.borrow();
        session.scheduler().is_active() && session.driver().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.session.borrow().driver().frames() as f64
    }
}

impl Drop for HeaderAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

fn mount_canvas(
    canvas: web::HtmlCanvasElement,
    seed: Option<u64>,
) -> anyhow::Result<HeaderAnimation> {
    let window = dom::window()?;
    let config = SceneConfig {
        seed,
        ..Default::default()
    };

    // a canvas without a 2d context fails here, before any frame is requested
    let session = Session::mount(
        config,
        || CanvasSurface::new(canvas),
        |config| Sprite::load(config.boat_sprite_path, config.sprite_retry_frames),
        RafScheduler::new(),
    )?;
    log::info!(
        "[mount] canvas css={:?} stage={:?}",
        session.surface().css_size(),
        session.driver().stage()
    );

    let session = Rc::new(RefCell::new(session));

    let resize_session = session.clone();
    let resize_listener = dom::listen(&window, "resize", move || {
        resize_session.borrow_mut().resize();
    })?;

    frame::start_loop(session.clone());
    Ok(HeaderAnimation {
        session,
        resize_listener: Some(resize_listener),
    })
}
