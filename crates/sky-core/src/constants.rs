use crate::color::Rgba;

// Scene tuning constants shared by the core model and the web front-end.

// Oscillation
pub const PHASE_STEP: f32 = 0.1; // radians advanced per frame by every point

// Wave layers
pub const WAVE_BASELINE_OFFSET: f32 = 60.0; // distance from the stage bottom to the wave rest line
pub const WAVE_MAX_AMPLITUDE: f32 = 20.0; // per-point amplitude is drawn from [0, max)
pub const WAVE_POINT_DENSITY: f32 = 0.03; // points per on-screen pixel of canvas width
pub const WAVE_MIN_POINTS: usize = 2; // fewer points leave the spacing undefined

// Lightest/farthest first; later layers overlap earlier ones
pub const DEFAULT_WAVE_COLORS: [Rgba; 5] = [
    Rgba::new(0, 230, 230, 0.2),
    Rgba::new(0, 199, 235, 0.2),
    Rgba::new(0, 146, 199, 0.2),
    Rgba::new(0, 87, 158, 0.2),
    Rgba::new(0, 72, 130, 0.2),
];

// Boat sprite geometry, relative to the boat's own viewport
pub const BOAT_HEIGHT_RATIO: f32 = 0.9; // sprite height / viewport height
pub const BOAT_ASPECT: f32 = 0.7; // sprite width / sprite height
pub const BOAT_ANCHOR_X: f32 = 100.0;
pub const BOAT_ANCHOR_Y_INSET: f32 = 30.0; // anchor y = 2 * height - inset
pub const BOAT_BOB_AMPLITUDE: f32 = 5.0;
pub const BOAT_FILL: Rgba = Rgba::new(0x00, 0x0F, 0xFF, 1.0);
pub const BOAT_SPRITE_PATH: &str = "/icon/boat.svg";
pub const SPRITE_RETRY_FRAMES: u32 = 120; // frames before a failed sprite load is requested again

// Stage
pub const PIXEL_RATIO: f32 = 2.0; // fixed backing-store scale, not a devicePixelRatio query
pub const BOAT_STAGE_SCALE: f32 = 0.3; // boat viewport relative to the full stage
