//! The particle field animator.
//!
//! `ParticleField` owns the whole animation state: parallel per-particle
//! arrays, the cursor signal, the camera and the viewport. Frontends
//! feed it pointer/resize events, call `tick()` once per display
//! refresh, and read back positions and colors for rendering.
//!
//! Per-particle behavior is an explicit mode recomputed every tick from
//! the idle timer, with strict precedence Scatter > Return > Wander >
//! Settle > Hold.

use glam::{Vec2, Vec3};
use rand::prelude::*;

use crate::camera::{Camera, Viewport};
use crate::color;
use crate::constants::*;
use crate::cursor::CursorSignal;

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("particle count must be nonzero")]
    EmptyField,
}

/// Behavioral mode of a single particle for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Cursor is moving: apply the precomputed scatter velocity.
    Scatter,
    /// Recently idle: decay back toward the home position.
    Return,
    /// Long idle: drift toward a periodically regenerated wander target.
    Wander,
    /// Short idle gap before the return window: drift toward the cursor.
    Settle,
    /// No motion this tick.
    Hold,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub particle_count: usize,
    pub seed: u64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: 42,
        }
    }
}

pub struct ParticleField {
    // Parallel arrays, all of particle_count length, never reordered.
    positions: Vec<Vec3>,
    homes: Vec<Vec3>,
    scatter_velocities: Vec<Vec3>,
    wander_targets: Vec<Vec3>,
    lightness: Vec<f32>,

    hue_degrees: f32,
    cursor: CursorSignal,
    camera: Camera,
    viewport: Viewport,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, viewport: Viewport) -> Result<Self, FieldError> {
        if params.particle_count == 0 {
            return Err(FieldError::EmptyField);
        }
        let mut rng = StdRng::seed_from_u64(params.seed);
        let homes: Vec<Vec3> = (0..params.particle_count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT),
                    rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT),
                    0.0,
                )
            })
            .collect();
        log::debug!(
            "field created: {} particles, seed {}",
            params.particle_count,
            params.seed
        );
        Ok(Self::build(homes, rng, viewport))
    }

    /// Build a field from explicit home positions. Wander targets and
    /// scatter speeds still derive from `seed`.
    pub fn from_homes(homes: Vec<Vec3>, seed: u64, viewport: Viewport) -> Result<Self, FieldError> {
        if homes.is_empty() {
            return Err(FieldError::EmptyField);
        }
        Ok(Self::build(homes, StdRng::seed_from_u64(seed), viewport))
    }

    fn build(homes: Vec<Vec3>, mut rng: StdRng, viewport: Viewport) -> Self {
        let count = homes.len();
        let wander_targets = homes.iter().map(|h| wander_target(*h, &mut rng)).collect();
        Self {
            positions: homes.clone(),
            scatter_velocities: vec![Vec3::ZERO; count],
            wander_targets,
            lightness: vec![0.0; count],
            homes,
            hue_degrees: 0.0,
            cursor: CursorSignal::new(),
            camera: Camera::new(viewport.aspect()),
            viewport,
            rng,
        }
    }

    /// Pointer event in normalized device coordinates. Resets the idle
    /// timer and recomputes every particle's scatter velocity.
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        self.cursor.pointer_moved(ndc);
        let cursor = self.cursor.ndc();
        for i in 0..self.positions.len() {
            let target = cursor_world_target(cursor, self.positions[i].z);
            let delta = target - self.positions[i];
            let distance = delta.length();
            let falloff = (1.0 - distance / SCATTER_RADIUS).max(0.0);
            // Zero distance has no direction; leave the particle alone.
            let direction = if distance > f32::EPSILON {
                -(delta / distance)
            } else {
                Vec3::ZERO
            };
            let speed = self.rng.gen_range(SCATTER_SPEED_MIN..SCATTER_SPEED_MAX);
            self.scatter_velocities[i] = direction * speed * falloff;
        }
    }

    /// Viewport resize: camera projection only, particle state untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect(self.viewport.aspect());
    }

    /// Advance the whole field by one display tick.
    pub fn tick(&mut self) {
        self.cursor.advance();

        let idle = self.cursor.idle_ticks();
        if idle > 0 && idle % WANDER_RETARGET_TICKS == 0 {
            self.retarget_wander();
        }

        for i in 0..self.positions.len() {
            match self.mode_of(i) {
                Mode::Scatter => {
                    self.positions[i] += self.scatter_velocities[i];
                }
                Mode::Return => {
                    let step = (self.homes[i] - self.positions[i]) * RETURN_RATE;
                    self.positions[i] += step;
                }
                Mode::Wander => {
                    let delta = self.wander_targets[i] - self.positions[i];
                    let distance = delta.length();
                    // Hold within one step of the target; no snapping.
                    if distance > WANDER_SPEED {
                        self.positions[i] += delta / distance * WANDER_SPEED;
                    }
                }
                Mode::Settle => {
                    let target = cursor_world_target(self.cursor.ndc(), self.positions[i].z);
                    let step = (target - self.positions[i]) * SETTLE_RATE;
                    self.positions[i] += step;
                }
                Mode::Hold => {}
            }
        }

        self.update_colors();
    }

    /// Mode selection for one particle, gated purely by the cursor
    /// signal and the particle's distance to home.
    pub fn mode_of(&self, index: usize) -> Mode {
        let idle = self.cursor.idle_ticks();
        if self.cursor.is_moving() {
            Mode::Scatter
        } else if (RETURN_IDLE_MIN..RETURN_IDLE_MAX).contains(&idle) && !self.at_home(index) {
            Mode::Return
        } else if idle >= WANDER_IDLE_MIN {
            Mode::Wander
        } else if idle > SETTLE_IDLE_MIN && idle < RETURN_IDLE_MIN && self.cursor.seen() {
            Mode::Settle
        } else {
            Mode::Hold
        }
    }

    fn at_home(&self, index: usize) -> bool {
        self.positions[index].distance(self.homes[index]) <= HOME_EPSILON
    }

    fn retarget_wander(&mut self) {
        for (target, home) in self.wander_targets.iter_mut().zip(&self.homes) {
            *target = wander_target(*home, &mut self.rng);
        }
        log::trace!(
            "wander targets regenerated at idle tick {}",
            self.cursor.idle_ticks()
        );
    }

    fn update_colors(&mut self) {
        let cursor_ndc = self.cursor.ndc();
        self.hue_degrees = color::cursor_hue_degrees(cursor_ndc);
        let cursor_px = self.viewport.ndc_to_px(cursor_ndc);
        for i in 0..self.positions.len() {
            self.lightness[i] = match self.camera.world_to_ndc(self.positions[i]) {
                Some(ndc) => {
                    let px = self.viewport.ndc_to_px(ndc);
                    color::lightness_for_distance(px.distance(cursor_px), self.viewport.width)
                }
                // Behind the eye plane: not visible, render dark.
                None => 0.0,
            };
        }
    }

    /// Shared hue plus per-particle lightness, fixed saturation.
    pub fn rgb(&self, index: usize) -> [f32; 3] {
        color::hsl_to_rgb(self.hue_degrees, COLOR_SATURATION, self.lightness[index])
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn homes(&self) -> &[Vec3] {
        &self.homes
    }

    pub fn scatter_velocities(&self) -> &[Vec3] {
        &self.scatter_velocities
    }

    pub fn wander_targets(&self) -> &[Vec3] {
        &self.wander_targets
    }

    pub fn lightness(&self) -> &[f32] {
        &self.lightness
    }

    pub fn hue_degrees(&self) -> f32 {
        self.hue_degrees
    }

    pub fn idle_ticks(&self) -> u32 {
        self.cursor.idle_ticks()
    }

    pub fn cursor(&self) -> &CursorSignal {
        &self.cursor
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// World-space point the cursor maps to at a particle's depth. The
/// cursor lives on the z = 0 home plane, so scatter and settle see a
/// purely lateral offset.
fn cursor_world_target(ndc: Vec2, particle_z: f32) -> Vec3 {
    Vec3::new(
        ndc.x * FIELD_HALF_EXTENT,
        ndc.y * FIELD_HALF_EXTENT,
        particle_z,
    )
}

fn wander_target(home: Vec3, rng: &mut StdRng) -> Vec3 {
    home + Vec3::new(
        rng.gen_range(-WANDER_OFFSET_MAX..WANDER_OFFSET_MAX),
        rng.gen_range(-WANDER_OFFSET_MAX..WANDER_OFFSET_MAX),
        rng.gen_range(-WANDER_OFFSET_MAX..WANDER_OFFSET_MAX),
    )
}
