pub mod camera;
pub mod color;
pub mod constants;
pub mod cursor;
pub mod field;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::{Camera, Viewport};
pub use constants::*;
pub use cursor::CursorSignal;
pub use field::{FieldError, FieldParams, Mode, ParticleField};
