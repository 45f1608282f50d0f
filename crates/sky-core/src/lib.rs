//! Wave/boat header scene, independent of any drawing backend.

pub mod boat;
pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod point;
pub mod retry;
pub mod session;
pub mod surface;
pub mod wave;
pub mod wave_stack;

pub use boat::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use driver::*;
pub use error::SceneError;
pub use point::*;
pub use retry::*;
pub use session::*;
pub use surface::*;
pub use wave::*;
pub use wave_stack::*;
