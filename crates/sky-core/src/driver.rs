//! Scene lifecycle and per-frame composition.
//!
//! The driver owns the wave stack, the boat sprite and the logical stage size.
//! It never schedules frames itself: the host calls [`Driver::animate`] from
//! its display-refresh callback and keeps rescheduling while the returned
//! [`FrameOutcome`] is `Continue`.

use crate::boat::BoatSprite;
use crate::config::SceneConfig;
use crate::error::{Result, SceneError};
use crate::surface::Surface;
use crate::wave_stack::WaveStack;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Halt,
}

pub struct Driver<I> {
    config: SceneConfig,
    waves: WaveStack,
    boat: BoatSprite<I>,
    rng: StdRng,
    stage: Vec2,
    state: DriverState,
    frames: u64,
}

impl<I> Driver<I> {
    /// Build the scene for `surface`. The wave point count is derived from the
    /// surface's current on-screen width.
    pub fn new<S>(config: SceneConfig, surface: &S, sprite: I) -> Result<Self>
    where
        S: Surface<Image = I> + ?Sized,
    {
        let waves = WaveStack::new(&config, surface.css_size().x)?;
        let boat = BoatSprite::new(sprite, config.boat);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            waves,
            boat,
            rng,
            stage: Vec2::ZERO,
            state: DriverState::Uninitialized,
            frames: 0,
        })
    }

    /// `new` followed by `start`.
    pub fn mount<S>(config: SceneConfig, surface: &mut S, sprite: I) -> Result<Self>
    where
        S: Surface<Image = I> + ?Sized,
    {
        let mut driver = Self::new(config, &*surface, sprite)?;
        driver.start(surface)?;
        Ok(driver)
    }

    /// Size the scene to the surface and enter `Running`.
    pub fn start<S>(&mut self, surface: &mut S) -> Result<()>
    where
        S: Surface<Image = I> + ?Sized,
    {
        match self.state {
            DriverState::Running => return Err(SceneError::AlreadyStarted),
            DriverState::Stopped => return Err(SceneError::Stopped),
            DriverState::Uninitialized => {}
        }
        self.resize(surface);
        self.state = DriverState::Running;
        log::info!(
            "[driver] running stage={}x{} layers={}",
            self.stage.x,
            self.stage.y,
            self.waves.len()
        );
        Ok(())
    }

    /// Recompute the logical stage from the surface's on-screen size, resize
    /// the backing buffer and rebuild all geometry. Ignored once stopped.
    pub fn resize<S>(&mut self, surface: &mut S) -> Vec2
    where
        S: Surface<Image = I> + ?Sized,
    {
        if self.state == DriverState::Stopped {
            return self.stage;
        }
        let css = surface.css_size().max(Vec2::ZERO);
        self.stage = css * self.config.pixel_ratio;
        surface.set_pixel_size(self.stage.x.round() as u32, self.stage.y.round() as u32);

        self.waves.resize(self.stage.x, self.stage.y, &mut self.rng);
        let boat_stage = self.stage * self.config.boat_stage_scale;
        self.boat.resize(boat_stage.x, boat_stage.y);
        log::debug!("[resize] stage={}x{}", self.stage.x, self.stage.y);
        self.stage
    }

    /// Render one frame: clear, boat, then waves on top.
    pub fn animate<S>(&mut self, surface: &mut S) -> FrameOutcome
    where
        S: Surface<Image = I> + ?Sized,
    {
        if self.state != DriverState::Running {
            return FrameOutcome::Halt;
        }
        surface.clear_rect(Vec2::ZERO, self.stage);
        self.boat.draw(surface);
        self.waves.draw(surface);
        self.frames += 1;
        FrameOutcome::Continue
    }

    pub fn stop(&mut self) {
        if self.state != DriverState::Stopped {
            log::info!("[driver] stopped after {} frames", self.frames);
            self.state = DriverState::Stopped;
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn stage(&self) -> Vec2 {
        self.stage
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn waves(&self) -> &WaveStack {
        &self.waves
    }

    pub fn boat(&self) -> &BoatSprite<I> {
        &self.boat
    }
}
