//! Cross-checks against glam.
//!
//! glam shares the column-major, column-vector, right-handed GL conventions,
//! so every builder and product must agree element for element.

use crate::{SAMPLE_ANGLES, sample_mat3s, sample_mat4s, sample_vectors};
use approx::assert_abs_diff_eq;
use kinema_math::glam::{GlamMat3, GlamMat4, GlamVec2, GlamVec3};
use kinema_math::{Mat3, Mat4, Vec3};

fn assert_mat4_matches(ours: Mat4, theirs: GlamMat4, eps: f32) {
    assert!(
        ours.abs_diff_eq(&Mat4::from_glam(theirs), eps),
        "ours:   {:?}\nglam:   {:?}",
        ours.data,
        theirs.to_cols_array()
    );
}

fn assert_mat3_matches(ours: Mat3, theirs: GlamMat3, eps: f32) {
    assert!(
        ours.abs_diff_eq(&Mat3::from_glam(theirs), eps),
        "ours:   {:?}\nglam:   {:?}",
        ours.data,
        theirs.to_cols_array()
    );
}

#[test]
fn storage_layout_matches() {
    let m = Mat4::translation(1.0, 2.0, 3.0);
    assert_eq!(m.to_glam(), GlamMat4::from_translation(GlamVec3::new(1.0, 2.0, 3.0)));
    assert_eq!(m.data[12..15], [1.0, 2.0, 3.0]);
}

#[test]
fn rotations_match() {
    for &a in &SAMPLE_ANGLES {
        assert_mat3_matches(Mat3::rotation_x(a), GlamMat3::from_rotation_x(a), 1e-6);
        assert_mat3_matches(Mat3::rotation_y(a), GlamMat3::from_rotation_y(a), 1e-6);
        assert_mat3_matches(Mat3::rotation_z(a), GlamMat3::from_rotation_z(a), 1e-6);
        assert_mat3_matches(Mat3::rotation_2d(a), GlamMat3::from_angle(a), 1e-6);

        assert_mat4_matches(Mat4::rotation_x(a), GlamMat4::from_rotation_x(a), 1e-6);
        assert_mat4_matches(Mat4::rotation_y(a), GlamMat4::from_rotation_y(a), 1e-6);
        assert_mat4_matches(Mat4::rotation_z(a), GlamMat4::from_rotation_z(a), 1e-6);
    }
}

#[test]
fn affine_2d_builders_match() {
    assert_mat3_matches(
        Mat3::translation_2d(3.0, -7.0),
        GlamMat3::from_translation(GlamVec2::new(3.0, -7.0)),
        0.0,
    );
    assert_mat3_matches(
        Mat3::scale_2d(2.0, 0.5),
        GlamMat3::from_scale(GlamVec2::new(2.0, 0.5)),
        0.0,
    );
}

#[test]
fn products_match() {
    let m3 = sample_mat3s();
    for w in m3.windows(2) {
        let expected = w[0].to_glam() * w[1].to_glam();
        assert_mat3_matches(w[0] * w[1], expected, 1e-4);
    }

    let m4 = sample_mat4s();
    for w in m4.windows(2) {
        let expected = w[0].to_glam() * w[1].to_glam();
        assert_mat4_matches(w[0] * w[1], expected, 1e-4);
    }

    for m in &m4 {
        for v in sample_vectors() {
            let ours = m.mul_vec4(v.extend(1.0));
            let theirs = m.to_glam() * v.extend(1.0).to_glam();
            assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-3);
            assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-3);
            assert_abs_diff_eq!(ours.z, theirs.z, epsilon = 1e-3);
            assert_abs_diff_eq!(ours.w, theirs.w, epsilon = 1e-3);

            // glam divides unconditionally
            if ours.w.abs() < 1e-3 {
                continue;
            }
            let p = m.mul_point(v);
            let gp = m.to_glam().project_point3(v.to_glam());
            assert_abs_diff_eq!(p.x, gp.x, epsilon = 1e-3);
            assert_abs_diff_eq!(p.y, gp.y, epsilon = 1e-3);
            assert_abs_diff_eq!(p.z, gp.z, epsilon = 1e-3);
        }
    }
}

#[test]
fn determinants_match() {
    for m in sample_mat3s() {
        let expected = m.to_glam().determinant();
        assert_abs_diff_eq!(m.determinant(), expected, epsilon = 1e-3 * expected.abs().max(1.0));
    }
    for m in sample_mat4s() {
        let expected = m.to_glam().determinant();
        assert_abs_diff_eq!(m.determinant(), expected, epsilon = 1e-3 * expected.abs().max(1.0));
    }
}

#[test]
fn inverses_match() {
    for m in sample_mat3s() {
        let ours = m.inverse().unwrap();
        assert_mat3_matches(ours, m.to_glam().inverse(), 1e-3);
    }
    for m in sample_mat4s() {
        let ours = m.inverse().unwrap();
        assert_mat4_matches(ours, m.to_glam().inverse(), 1e-3);
    }
}

#[test]
fn perspective_matches_gl() {
    for &(fovy, aspect, near, far) in &[
        (kinema_math::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0),
        (1.0, 1.0, 1.0, 10.0),
        (2.5, 0.5, 0.01, 1000.0),
    ] {
        assert_mat4_matches(
            Mat4::perspective(fovy, aspect, near, far),
            GlamMat4::perspective_rh_gl(fovy, aspect, near, far),
            1e-5,
        );
    }
}

#[test]
fn orthographic_matches_gl() {
    for &(l, r, b, t, n, f) in &[
        (-4.0, 4.0, -3.0, 3.0, 0.1, 50.0),
        (0.0, 800.0, 0.0, 600.0, -1.0, 1.0),
        (-1.0, 3.0, 2.0, 5.0, 1.0, 2.0),
    ] {
        assert_mat4_matches(
            Mat4::orthographic(l, r, b, t, n, f),
            GlamMat4::orthographic_rh_gl(l, r, b, t, n, f),
            1e-6,
        );
    }
}

#[test]
fn look_at_matches_rh() {
    let cases = [
        (Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UP),
        (Vec3::new(3.0, 2.0, 5.0), Vec3::new(0.0, 0.3, 0.0), Vec3::UP),
        (Vec3::new(-1.0, 4.0, -2.0), Vec3::new(2.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0)),
    ];
    for (eye, target, up) in cases {
        assert_mat4_matches(
            Mat4::look_at(eye, target, up),
            GlamMat4::look_at_rh(eye.to_glam(), target.to_glam(), up.to_glam()),
            1e-5,
        );
    }
}

#[test]
fn vector_ops_match() {
    for a in sample_vectors() {
        for b in sample_vectors() {
            let c = a.cross(b).to_glam();
            let gc = a.to_glam().cross(b.to_glam());
            assert_abs_diff_eq!(c.x, gc.x, epsilon = 1e-4);
            assert_abs_diff_eq!(c.y, gc.y, epsilon = 1e-4);
            assert_abs_diff_eq!(c.z, gc.z, epsilon = 1e-4);
            assert_abs_diff_eq!(a.dot(b), a.to_glam().dot(b.to_glam()), epsilon = 1e-4);
        }
        let n = a.normalize();
        let gn = a.to_glam().normalize();
        assert_abs_diff_eq!(n.x, gn.x, epsilon = 1e-5);
        assert_abs_diff_eq!(n.y, gn.y, epsilon = 1e-5);
        assert_abs_diff_eq!(n.z, gn.z, epsilon = 1e-5);
    }
}

#[test]
fn matrices_serialize_column_major() {
    #[rustfmt::skip]
    let m = Mat3::new(
        1.0, 2.0, 3.0,
        4.0, 5.0, 6.0,
        7.0, 8.0, 9.0,
    );
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"data":[1.0,4.0,7.0,2.0,5.0,8.0,3.0,6.0,9.0]}"#);

    let back: Mat3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);

    let v: Vec3 = serde_json::from_str(r#"{"x":1.0,"y":-2.0,"z":0.5}"#).unwrap();
    assert_eq!(v, Vec3::new(1.0, -2.0, 0.5));
}
