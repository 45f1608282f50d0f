// Web front-end constants. Scene tuning lives in `sky_core::constants`.

// DOM element the header animation auto-mounts on
pub const HEADER_CANVAS_ID: &str = "sky-canvas";

// Console logging verbosity
pub const LOG_LEVEL: log::Level = log::Level::Info;
