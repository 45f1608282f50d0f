//! A mounted scene: driver, surface and the host's frame scheduler.
//!
//! Mounting builds the surface and the sprite before anything is scheduled;
//! either failing aborts the mount with no frame requested.

use crate::config::SceneConfig;
use crate::driver::{Driver, FrameOutcome};
use crate::error::SceneError;
use crate::surface::Surface;
use glam::Vec2;

/// Host primitive for "run the frame callback before the next repaint".
pub trait FrameScheduler {
    fn request_frame(&mut self);
    /// Drop any pending request; no further frames run until requested again.
    fn cancel(&mut self);
}

pub struct Session<S: Surface, F> {
    driver: Driver<S::Image>,
    surface: S,
    scheduler: F,
}

impl<S: Surface, F: FrameScheduler> Session<S, F> {
    pub fn mount<E>(
        config: SceneConfig,
        make_surface: impl FnOnce() -> Result<S, E>,
        load_sprite: impl FnOnce(&SceneConfig) -> Result<S::Image, E>,
        scheduler: F,
    ) -> Result<Self, E>
    where
        E: From<SceneError>,
    {
        let mut surface = make_surface()?;
        let sprite = load_sprite(&config)?;
        let driver = Driver::mount(config, &mut surface, sprite)?;
        Ok(Self {
            driver,
            surface,
            scheduler,
        })
    }

    /// Request the first frame.
    pub fn begin(&mut self) {
        if self.driver.is_running() {
            self.scheduler.request_frame();
        }
    }

    /// Frame callback body: draw, then reschedule while running.
    pub fn frame(&mut self) -> FrameOutcome {
        let outcome = self.driver.animate(&mut self.surface);
        if outcome == FrameOutcome::Continue {
            self.scheduler.request_frame();
        }
        outcome
    }

    pub fn resize(&mut self) -> Vec2 {
        self.driver.resize(&mut self.surface)
    }

    pub fn stop(&mut self) {
        self.driver.stop();
        self.scheduler.cancel();
    }

    pub fn driver(&self) -> &Driver<S::Image> {
        &self.driver
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }
}
