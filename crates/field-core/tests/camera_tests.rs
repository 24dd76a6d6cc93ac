// Tests for camera projection and viewport coordinate transforms.

use field_core::constants::CAMERA_Z;
use field_core::{Camera, Viewport};
use glam::{Vec2, Vec3};

#[test]
fn world_origin_projects_to_the_viewport_center() {
    let viewport = Viewport::new(800.0, 600.0);
    let camera = Camera::new(viewport.aspect());
    let ndc = camera.world_to_ndc(Vec3::ZERO).expect("in front of camera");
    assert!(ndc.length() < 1e-6);
    let px = viewport.ndc_to_px(ndc);
    assert!((px - Vec2::new(400.0, 300.0)).length() < 1e-3);
}

#[test]
fn points_behind_the_eye_do_not_project() {
    let camera = Camera::new(4.0 / 3.0);
    // The eye sits at z = CAMERA_Z looking toward -Z.
    assert!(camera.world_to_ndc(Vec3::new(0.0, 0.0, CAMERA_Z + 10.0)).is_none());
    assert!(camera.world_to_ndc(Vec3::new(0.0, 0.0, CAMERA_Z)).is_none());
    assert!(camera.world_to_ndc(Vec3::ZERO).is_some());
}

#[test]
fn projection_is_symmetric_around_the_axis() {
    let camera = Camera::new(16.0 / 9.0);
    let right = camera.world_to_ndc(Vec3::new(10.0, 0.0, 0.0)).unwrap();
    let left = camera.world_to_ndc(Vec3::new(-10.0, 0.0, 0.0)).unwrap();
    assert!((right.x + left.x).abs() < 1e-5);
    assert!(right.x > 0.0);
}

#[test]
fn set_aspect_changes_horizontal_projection_only() {
    let mut camera = Camera::new(1.0);
    let before = camera.world_to_ndc(Vec3::new(10.0, 10.0, 0.0)).unwrap();
    camera.set_aspect(2.0);
    let after = camera.world_to_ndc(Vec3::new(10.0, 10.0, 0.0)).unwrap();
    assert!((after.x - before.x / 2.0).abs() < 1e-5);
    assert!((after.y - before.y).abs() < 1e-6);
}

#[test]
fn viewport_transforms_round_trip() {
    let viewport = Viewport::new(1280.0, 720.0);
    let corners = [
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.25, -0.75),
    ];
    for ndc in corners {
        let px = viewport.ndc_to_px(ndc);
        let back = viewport.px_to_ndc(px);
        assert!((back - ndc).length() < 1e-5, "round trip failed for {ndc}");
    }
    // Top-left pixel is NDC (-1, 1) with y up.
    assert_eq!(viewport.px_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
}

#[test]
fn viewport_clamps_out_of_bounds_pixels() {
    let viewport = Viewport::new(100.0, 100.0);
    let ndc = viewport.px_to_ndc(Vec2::new(500.0, -40.0));
    assert_eq!(ndc, Vec2::new(1.0, 1.0));
}

#[test]
fn degenerate_viewport_dimensions_are_clamped() {
    let viewport = Viewport::new(0.0, -5.0);
    assert_eq!(viewport.width, 1.0);
    assert_eq!(viewport.height, 1.0);
    assert!(viewport.aspect().is_finite());
}
