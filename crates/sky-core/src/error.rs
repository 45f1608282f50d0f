use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("wave layer needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("wave palette is empty")]
    EmptyPalette,
    #[error("animation already started")]
    AlreadyStarted,
    #[error("animation was stopped")]
    Stopped,
}

pub type Result<T, E = SceneError> = std::result::Result<T, E>;
