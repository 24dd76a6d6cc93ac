//! Camera and viewport math shared by the animator and the frontends.
//!
//! The camera is a fixed right-handed perspective looking down -Z from
//! `(0, 0, CAMERA_Z)`; only the aspect ratio changes at runtime, on
//! viewport resize.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::{CAMERA_FOVY_RADIANS, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera used by the bubble field: fixed eye on the Z axis, aspect
    /// from the current viewport.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(f32::EPSILON),
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(f32::EPSILON);
    }

    /// Project a world-space point to normalized device coordinates.
    ///
    /// Returns `None` for points at or behind the eye plane, where the
    /// perspective divide is undefined.
    pub fn world_to_ndc(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

/// Viewport dimensions in device pixels. Dimensions are clamped to at
/// least one pixel so the NDC transforms never divide by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// NDC (y up) to pixel coordinates (y down, origin top-left).
    pub fn ndc_to_px(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) / 2.0 * self.width,
            (1.0 - ndc.y) / 2.0 * self.height,
        )
    }

    /// Pixel coordinates to NDC, clamped to [-1, 1] per axis.
    pub fn px_to_ndc(&self, px: Vec2) -> Vec2 {
        let x = (px.x / self.width) * 2.0 - 1.0;
        let y = -((px.y / self.height) * 2.0 - 1.0);
        Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
    }
}
