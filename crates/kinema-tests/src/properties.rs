//! Algebraic properties that must hold for every sample value.

use crate::{sample_mat3s, sample_mat4s, sample_vectors};
use approx::assert_abs_diff_eq;
use kinema_math::{Mat3, Mat4, Vec2, Vec3, Vec4};

#[test]
fn normalize_yields_unit_length() {
    for v in sample_vectors() {
        assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-3);

        let v2 = Vec2::new(v.x, v.y);
        if v2.length_squared() >= f32::EPSILON {
            assert_abs_diff_eq!(v2.normalize().length(), 1.0, epsilon = 1e-3);
        }

        let v4 = v.extend(v.z - v.x);
        assert_abs_diff_eq!(v4.normalize().length(), 1.0, epsilon = 1e-3);
    }
}

#[test]
fn normalize_zero_is_zero() {
    assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
}

#[test]
fn divide_by_zero_is_zero() {
    for v in sample_vectors() {
        assert_eq!(v / 0.0, Vec3::ZERO);
        assert_eq!(v.extend(1.0) / 0.0, Vec4::ZERO);
        assert_eq!(Vec2::new(v.x, v.y) / 0.0, Vec2::ZERO);
    }
}

#[test]
fn axes_are_orthogonal() {
    assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
    assert_eq!(Vec2::X.dot(Vec2::Y), 0.0);
    assert_eq!(Vec4::Z.dot(Vec4::W), 0.0);
}

#[test]
fn cross_is_orthogonal_to_both_operands() {
    let vs = sample_vectors();
    for a in &vs {
        for b in &vs {
            let c = a.cross(*b);
            let scale = a.length() * b.length();
            assert_abs_diff_eq!(c.dot(*a) / scale, 0.0, epsilon = 1e-4);
            assert_abs_diff_eq!(c.dot(*b) / scale, 0.0, epsilon = 1e-4);
        }
    }
}

#[test]
fn identity_is_neutral() {
    for m in sample_mat3s() {
        assert_eq!(m.mul_mat(&Mat3::IDENTITY), m);
    }
    for m in sample_mat4s() {
        assert_eq!(m.mul_mat(&Mat4::IDENTITY), m);
    }
    for v in sample_vectors() {
        assert_eq!(Mat3::IDENTITY.mul_vec(v), v);
        assert_eq!(Mat4::IDENTITY.mul_vec4(v.extend(2.0)), v.extend(2.0));
        assert_eq!(Mat4::IDENTITY.mul_point(v), v);
    }
}

#[test]
fn matrix_times_inverse_is_identity() {
    for m in sample_mat3s() {
        let inv = m.inverse().expect("sample mat3 must be invertible");
        assert!(
            m.mul_mat(&inv).abs_diff_eq(&Mat3::IDENTITY, 1e-4),
            "M * M^-1 != I for {:?}",
            m
        );
    }
    for m in sample_mat4s() {
        let inv = m.inverse().expect("sample mat4 must be invertible");
        assert!(
            m.mul_mat(&inv).abs_diff_eq(&Mat4::IDENTITY, 1e-4),
            "M * M^-1 != I for {:?}",
            m
        );
    }
}

#[test]
fn determinant_of_identity_and_zero() {
    assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat3::ZERO.determinant(), 0.0);
    assert_eq!(Mat4::ZERO.determinant(), 0.0);
}

#[test]
fn determinant_is_multiplicative() {
    let m3 = sample_mat3s();
    for a in &m3 {
        for b in &m3 {
            let lhs = a.mul_mat(b).determinant();
            let rhs = a.determinant() * b.determinant();
            assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-2 * rhs.abs().max(1.0));
        }
    }
}

#[test]
fn determinant_of_inverse_is_reciprocal() {
    for m in sample_mat4s() {
        let det = m.determinant();
        let inv_det = m.inverse().unwrap().determinant();
        assert_abs_diff_eq!(det * inv_det, 1.0, epsilon = 1e-3);
    }
}

#[test]
fn transpose_is_an_involution() {
    for m in sample_mat3s() {
        assert_eq!(m.transpose().transpose(), m);
        assert_abs_diff_eq!(m.transpose().determinant(), m.determinant(), epsilon = 1e-3);
    }
    for m in sample_mat4s() {
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn singular_matrices_have_no_inverse() {
    // Rank-deficient: third column is the sum of the first two
    let m3 = Mat3::from_columns(Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0));
    assert!(m3.inverse().is_none());
    assert!(m3.try_inverse().unwrap_err().is_singular());

    let m4 = Mat4::scale_xyz(1.0, 0.0, 1.0);
    assert!(m4.inverse().is_none());
    assert!(m4.try_inverse().is_err());

    // Tiny but non-zero determinant is still below the threshold
    assert!(Mat4::scale(0.009).inverse().is_none());
}

#[test]
fn singular_errors_carry_the_determinant() {
    match Mat4::ZERO.try_inverse() {
        Err(kinema_core::Error::SingularMatrix { determinant }) => assert_eq!(determinant, 0.0),
        other => panic!("expected SingularMatrix, got {:?}", other),
    }

    let flat = Mat3::scale_xyz(1.0, 1.0, 0.0);
    let err: kinema_core::Error = flat.try_inverse().unwrap_err();
    assert!(err.is_singular());
    assert!(!err.is_bounds_error());
}

#[test]
fn composition_is_associative_on_points() {
    let ms = sample_mat4s();
    let p = Vec3::new(0.5, -1.0, 2.0);
    for w in ms.windows(2) {
        let (a, b) = (w[0], w[1]);
        let composed = a.mul_mat(&b).mul_vec4(p.extend(1.0));
        let chained = a.mul_vec4(b.mul_vec4(p.extend(1.0)));
        assert_abs_diff_eq!(composed.x, chained.x, epsilon = 1e-3);
        assert_abs_diff_eq!(composed.y, chained.y, epsilon = 1e-3);
        assert_abs_diff_eq!(composed.z, chained.z, epsilon = 1e-3);
        assert_abs_diff_eq!(composed.w, chained.w, epsilon = 1e-3);
    }
}
