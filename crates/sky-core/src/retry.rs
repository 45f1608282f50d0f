//! Frame-counted retry for assets that failed to load.

/// What the host should do with the asset this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryAction {
    /// Not failed; draw if the host reports the asset ready.
    Draw,
    /// Failed and waiting; skip the draw.
    Skip,
    /// Waited long enough; request the asset again and skip this frame.
    Reload,
}

#[derive(Clone, Debug)]
pub struct RetryTimer {
    period: u32,
    failed: bool,
    frames_since_failure: u32,
    warned: bool,
}

impl RetryTimer {
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            failed: false,
            frames_since_failure: 0,
            warned: false,
        }
    }

    /// Record a failed load. Returns `true` only for the first failure over
    /// the timer's lifetime, so callers warn once.
    pub fn mark_failed(&mut self) -> bool {
        if !self.failed {
            self.failed = true;
            self.frames_since_failure = 0;
        }
        !std::mem::replace(&mut self.warned, true)
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn frames_since_failure(&self) -> u32 {
        self.frames_since_failure
    }

    /// Called once per frame before drawing.
    pub fn tick(&mut self) -> RetryAction {
        if !self.failed {
            return RetryAction::Draw;
        }
        let n = self.frames_since_failure + 1;
        if n >= self.period {
            self.frames_since_failure = 0;
            self.failed = false;
            RetryAction::Reload
        } else {
            self.frames_since_failure = n;
            RetryAction::Skip
        }
    }
}
