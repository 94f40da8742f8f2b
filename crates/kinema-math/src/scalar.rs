//! Scalar utilities and angle constants.
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::{approximately, clamp, lerp, DEG_TO_RAD, PI};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
//! assert!(approximately(180.0 * DEG_TO_RAD, PI, 1e-6));
//! ```

/// Archimedes' constant (π).
pub const PI: f32 = std::f32::consts::PI;

/// Full turn in radians (2π).
pub const TAU: f32 = std::f32::consts::TAU;

/// π/2.
pub const FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2;

/// π/4.
pub const FRAC_PI_4: f32 = std::f32::consts::FRAC_PI_4;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Determinant magnitude below which a matrix is treated as singular.
pub const EPSILON: f32 = 1e-6;

/// Length below which [`Vec3`](crate::Vec3) and [`Vec4`](crate::Vec4)
/// normalization returns the zero vector.
pub const NORMALIZE_EPSILON: f32 = 1e-4;

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use kinema_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t`.
/// A zero-width range yields `0.0`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < 1e-10 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Clamps a value to the range [min, max].
///
/// # Example
///
/// ```rust
/// use kinema_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Returns true iff `|a - b| < epsilon`.
///
/// The comparison is strict: a difference exactly equal to `epsilon` is
/// not approximately equal.
#[inline]
pub fn approximately(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}
