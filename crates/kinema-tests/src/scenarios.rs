//! Transform scenarios a rendering or simulation front end relies on.

use approx::assert_abs_diff_eq;
use kinema_math::{FRAC_PI_2, FRAC_PI_4, Mat3, Mat4, PI, Vec3, Vec4};

fn assert_near(a: Vec3, b: Vec3, eps: f32) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
    assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
    assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
}

#[test]
fn translation_moves_points() {
    let p = Mat4::translation(5.0, 3.0, -2.0).mul_point(Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(p, Vec3::new(6.0, 4.0, -1.0));
}

#[test]
fn translation_ignores_directions() {
    let d = Mat4::translation(5.0, 3.0, -2.0).mul_direction(Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(d, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn scale_applies_to_points_and_directions() {
    let s = Mat4::scale_xyz(2.0, 2.0, 2.0);
    assert_eq!(s.mul_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(2.0, 2.0, 2.0));
    assert_eq!(s.mul_direction(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(2.0, 2.0, 2.0));
}

#[test]
fn rotation_2d_quarter_turn() {
    let v = Mat3::rotation_2d(PI / 2.0).mul_vec(Vec3::new(1.0, 0.0, 1.0));
    assert_near(v, Vec3::new(0.0, 1.0, 1.0), 1e-3);
}

#[test]
fn homogeneous_2d_chain() {
    // rotate a point 90 degrees about (1, 1)
    let pivot = Mat3::translation_2d(1.0, 1.0);
    let back = Mat3::translation_2d(-1.0, -1.0);
    let m = pivot * Mat3::rotation_2d(FRAC_PI_2) * back;
    let p = m.mul_vec(Vec3::new(2.0, 1.0, 1.0));
    assert_near(p, Vec3::new(1.0, 2.0, 1.0), 1e-5);
}

#[test]
fn perspective_keeps_points_in_front_visible() {
    let p = Mat4::perspective(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
    let clip = p.mul_vec4(Vec4::new(0.0, 0.0, -1.0, 1.0));
    assert!(clip.z != 0.0);
    assert!(clip.w > 0.0);

    // Points farther away land deeper in NDC
    let near = p.mul_point(Vec3::new(0.0, 0.0, -1.0)).z;
    let far = p.mul_point(Vec3::new(0.0, 0.0, -50.0)).z;
    assert!(near < far);
    assert!((-1.0..=1.0).contains(&near));
    assert!((-1.0..=1.0).contains(&far));
}

#[test]
fn perspective_edge_of_frustum_maps_to_ndc_edge() {
    let fovy = FRAC_PI_2;
    let p = Mat4::perspective(fovy, 1.0, 0.1, 100.0);
    // At z = -1 the half-height of a 90 degree frustum is 1
    let top = p.mul_point(Vec3::new(0.0, 1.0, -1.0));
    assert_abs_diff_eq!(top.y, 1.0, epsilon = 1e-5);
    let right = p.mul_point(Vec3::new(2.0, 0.0, -2.0));
    assert_abs_diff_eq!(right.x, 1.0, epsilon = 1e-5);
}

#[test]
fn orthographic_maps_box_corners() {
    let o = Mat4::orthographic(0.0, 800.0, 0.0, 600.0, -1.0, 1.0);
    assert_near(o.mul_point(Vec3::new(0.0, 0.0, 0.0)), Vec3::new(-1.0, -1.0, 0.0), 1e-5);
    assert_near(o.mul_point(Vec3::new(800.0, 600.0, 0.0)), Vec3::new(1.0, 1.0, 0.0), 1e-5);
    assert_eq!(o.mul_vec4(Vec4::new(400.0, 300.0, 0.5, 1.0)).w, 1.0);
}

#[test]
fn look_at_moves_eye_to_origin() {
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let target = Vec3::ZERO;
    let view = Mat4::look_at(eye, target, Vec3::new(0.0, 1.0, 0.0));
    assert_near(view.mul_point(eye), Vec3::ZERO, 1e-5);
    assert!(view.mul_point(target).z < 0.0);
}

#[test]
fn look_at_from_the_side() {
    let eye = Vec3::new(10.0, 0.0, 0.0);
    let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
    // target straight ahead, world up stays up, world -Z is to the right
    assert_near(view.mul_point(Vec3::ZERO), Vec3::new(0.0, 0.0, -10.0), 1e-5);
    assert_near(view.mul_direction(Vec3::UP), Vec3::UP, 1e-5);
    assert_near(view.mul_direction(Vec3::FORWARD), Vec3::RIGHT, 1e-5);
}

#[test]
fn look_at_parallel_up_degenerates() {
    let view = Mat4::look_at(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, Vec3::UP);
    assert_eq!(view.mul_direction(Vec3::X), Vec3::new(0.0, 0.0, 0.0));
    let err = Mat4::try_look_at(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, Vec3::UP).unwrap_err();
    assert!(err.to_string().contains("parallel"));
}

#[test]
fn model_view_projection_chain() {
    let model = Mat4::translation(0.0, 0.0, -3.0) * Mat4::rotation_y(FRAC_PI_2);
    let view = Mat4::look_at(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::UP);
    let proj = Mat4::perspective(FRAC_PI_4, 1.0, 0.1, 100.0);
    let mvp = proj * view * model;

    // Object origin sits 5 units in front of the camera, on axis
    let ndc = mvp.mul_point(Vec3::ZERO);
    assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-5);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);

    let clip = mvp.mul_vec4(Vec3::ZERO.extend(1.0));
    assert_abs_diff_eq!(clip.w, 5.0, epsilon = 1e-4);
}
