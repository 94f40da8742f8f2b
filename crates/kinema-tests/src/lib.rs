//! Integration tests for kinema crates.
//!
//! Exercises the public API of `kinema-math` end to end: algebraic
//! properties over a fixed family of transforms, the documented transform
//! scenarios, and cross-checks against `glam` as an independent reference.

use kinema_math::{Mat3, Mat4, Vec3};

#[cfg(test)]
mod properties;
#[cfg(test)]
mod reference;
#[cfg(test)]
mod scenarios;

/// Angles (radians) used to build sample rotations.
pub const SAMPLE_ANGLES: [f32; 5] = [0.0, 0.3, -1.1, 2.0, 3.0];

/// Sample vectors, none of them near zero length.
pub fn sample_vectors() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.3, -2.0, 5.0),
        Vec3::new(-4.0, 1.5, 0.25),
        Vec3::new(10.0, 10.0, -10.0),
        Vec3::new(0.01, 0.02, -0.03),
    ]
}

/// Invertible 3x3 matrices built from rotations and scales.
pub fn sample_mat3s() -> Vec<Mat3> {
    #[rustfmt::skip]
    let mut out = vec![
        Mat3::IDENTITY,
        Mat3::new(
            1.0, 2.0, 3.0,
            0.0, 1.0, 4.0,
            5.0, 6.0, 0.0,
        ),
        Mat3::translation_2d(3.0, -7.0) * Mat3::scale_2d(2.0, 0.5),
    ];
    for &a in &SAMPLE_ANGLES {
        out.push(Mat3::rotation_x(a) * Mat3::scale_xyz(1.0, 2.0, 3.0));
        out.push(Mat3::rotation_y(a) * Mat3::rotation_z(a * 0.5));
        out.push(Mat3::rotation_2d(a) * Mat3::scale(0.5));
    }
    out
}

/// Invertible 4x4 matrices: affine transforms plus a dense general matrix.
pub fn sample_mat4s() -> Vec<Mat4> {
    #[rustfmt::skip]
    let mut out = vec![
        Mat4::IDENTITY,
        Mat4::new(
            2.0, 0.0, 1.0, 3.0,
            1.0, 3.0, 0.0, -1.0,
            0.0, 1.0, 4.0, 2.0,
            1.0, 0.0, 0.0, 1.0,
        ),
        Mat4::perspective(1.0, 1.5, 0.1, 100.0),
        Mat4::orthographic(-4.0, 4.0, -3.0, 3.0, 0.1, 50.0),
    ];
    for (i, &a) in SAMPLE_ANGLES.iter().enumerate() {
        let t = i as f32;
        out.push(
            Mat4::translation(t, -2.0 * t, 0.5)
                * Mat4::rotation_x(a)
                * Mat4::rotation_y(-a)
                * Mat4::scale_xyz(1.0 + t, 2.0, 0.5),
        );
        out.push(Mat4::look_at(
            Vec3::new(3.0 + t, 2.0, 5.0 - t),
            Vec3::new(0.0, a, 0.0),
            Vec3::UP,
        ));
    }
    out
}
