use crate::canvas::CanvasSurface;
use sky_core::{FrameOutcome, FrameScheduler, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebSession = Session<CanvasSurface, RafScheduler>;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` scheduler. The frame closure is installed by
/// [`start_loop`] once the session it drives exists.
pub struct RafScheduler {
    tick: Tick,
    pending: Option<i32>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            tick: Rc::new(RefCell::new(None)),
            pending: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.tick.borrow().is_some()
    }
}

impl Default for RafScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        let id = match self.tick.borrow().as_ref() {
            Some(cb) => w.request_animation_frame(cb.as_ref().unchecked_ref()),
            None => return,
        };
        match id {
            Ok(id) => self.pending = Some(id),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure's reference cycle back to the session
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(session: Rc<RefCell<WebSession>>) {
    let tick = session.borrow().scheduler().tick.clone();
    let session_tick = session.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if session_tick.borrow_mut().frame() == FrameOutcome::Halt {
            log::debug!("[frame] loop halted");
        }
    }) as Box<dyn FnMut()>));
    session.borrow_mut().begin();
}
