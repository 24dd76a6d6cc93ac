// Shared tuning constants for the bubble field, used by both frontends.

use std::f32::consts::PI;

// Field layout
pub const DEFAULT_PARTICLE_COUNT: usize = 50;
pub const FIELD_HALF_EXTENT: f32 = 50.0; // home positions drawn in [-50, 50] on x/y

// Camera
pub const CAMERA_Z: f32 = 50.0;
pub const CAMERA_FOVY_RADIANS: f32 = 75.0 * PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Cursor signal
pub const MOVE_DECAY_TICKS: u32 = 6; // ~100ms at 60Hz

// Scatter
pub const SCATTER_RADIUS: f32 = 50.0; // proximity falloff radius around the cursor
pub const SCATTER_SPEED_MIN: f32 = 0.1;
pub const SCATTER_SPEED_MAX: f32 = 0.2;

// Return
pub const RETURN_RATE: f32 = 0.02; // fraction of remaining distance per tick
pub const RETURN_IDLE_MIN: u32 = 20;
pub const RETURN_IDLE_MAX: u32 = 200; // exclusive
pub const HOME_EPSILON: f32 = 1e-3; // within this distance a particle counts as home

// Wander
pub const WANDER_IDLE_MIN: u32 = 200;
pub const WANDER_RETARGET_TICKS: u32 = 500;
pub const WANDER_OFFSET_MAX: f32 = 50.0; // per-axis offset around home
pub const WANDER_SPEED: f32 = 0.004; // units per tick

// Settle
pub const SETTLE_IDLE_MIN: u32 = 10; // exclusive
pub const SETTLE_RATE: f32 = 0.004;

// Color
pub const COLOR_SATURATION: f32 = 0.8;
pub const LIGHTNESS_FALLOFF_SPAN: f32 = 0.25; // lightness reaches 0 at this fraction of viewport width

// Rendering
pub const BUBBLE_SCALE: f32 = 2.0; // sprite diameter in world units
