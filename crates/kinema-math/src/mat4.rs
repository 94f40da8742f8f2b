//! 4x4 matrix type for affine transforms and projections.
//!
//! [`Mat4`] carries 3D points and directions through homogeneous
//! coordinates:
//!
//! - [`Mat4::mul_point`] lifts to `w = 1`, transforms, then divides by `w`
//! - [`Mat4::mul_direction`] lifts to `w = 0`, so translation never applies
//! - [`Mat4::mul_vec4`] is the raw 4x4 product (clip space, before the divide)
//!
//! # Convention
//!
//! Column-major storage (`data[col * 4 + row]`), column vectors,
//! right-handed coordinates with the camera looking down `-Z`. The
//! translation of an affine matrix sits in `data[12..15]`.
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::{Mat4, Vec3, FRAC_PI_4};
//!
//! let view = Mat4::look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::UP);
//! let proj = Mat4::perspective(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
//! let view_proj = proj * view;
//!
//! let ndc = view_proj.mul_point(Vec3::ZERO);
//! assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
//! ```

use crate::scalar::EPSILON;
use crate::{Vec3, Vec4};
use kinema_core::{Error, Result};
use std::ops::{Add, Index, Mul, Sub};
use tracing::{debug, trace};

/// A 4x4 matrix of f32 values.
///
/// Stored in column-major order: element `(row, col)` lives at
/// `data[col * 4 + row]`.
///
/// # Example
///
/// ```rust
/// use kinema_math::{Mat4, Vec3};
///
/// let m = Mat4::scale_xyz(2.0, 2.0, 2.0);
/// assert_eq!(m.mul_point(Vec3::ONE), Vec3::splat(2.0));
/// assert_eq!(m.mul_direction(Vec3::ONE), Vec3::splat(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in column-major order.
    pub data: [f32; 16],
}

/// Closed-form 3x3 determinant, elements in row-major order.
#[allow(clippy::too_many_arguments)]
#[inline]
fn det3(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32, i: f32) -> f32 {
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { data: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0, 1.0);

    /// Creates a matrix from elements in row-major textual order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            data: [
                m00, m10, m20, m30,
                m01, m11, m21, m31,
                m02, m12, m22, m32,
                m03, m13, m23, m33,
            ],
        }
    }

    /// Creates a matrix from row arrays.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_rows(r: [[f32; 4]; 4]) -> Self {
        Self::new(
            r[0][0], r[0][1], r[0][2], r[0][3],
            r[1][0], r[1][1], r[1][2], r[1][3],
            r[2][0], r[2][1], r[2][2], r[2][3],
            r[3][0], r[3][1], r[3][2], r[3][3],
        )
    }

    /// Creates a matrix from column arrays.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_cols(c: [[f32; 4]; 4]) -> Self {
        Self {
            data: [
                c[0][0], c[0][1], c[0][2], c[0][3],
                c[1][0], c[1][1], c[1][2], c[1][3],
                c[2][0], c[2][1], c[2][2], c[2][3],
                c[3][0], c[3][1], c[3][2], c[3][3],
            ],
        }
    }

    /// Creates a matrix from four column vectors.
    #[inline]
    pub const fn from_columns(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()])
    }

    /// Creates a matrix from a flat column-major array.
    #[inline]
    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the flat column-major array.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.data
    }

    /// Column-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Creates a diagonal matrix.
    #[inline]
    #[rustfmt::skip]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32, d3: f32) -> Self {
        Self::new(
            d0, 0.0, 0.0, 0.0,
            0.0, d1, 0.0, 0.0,
            0.0, 0.0, d2, 0.0,
            0.0, 0.0, 0.0, d3,
        )
    }

    /// Returns element `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..4`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < 4 && col < 4,
            "Mat4 index ({}, {}) out of bounds",
            row,
            col
        );
        self.data[col * 4 + row]
    }

    /// Sets element `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..4`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(
            row < 4 && col < 4,
            "Mat4 index ({}, {}) out of bounds",
            row,
            col
        );
        self.data[col * 4 + row] = value;
    }

    /// Returns element `(row, col)`, or [`Error::IndexOutOfRange`].
    pub fn try_get(&self, row: usize, col: usize) -> Result<f32> {
        if row >= 4 || col >= 4 {
            return Err(Error::index_out_of_range(row, col, 4));
        }
        Ok(self.data[col * 4 + row])
    }

    /// Sets element `(row, col)`, or returns [`Error::IndexOutOfRange`].
    pub fn try_set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        if row >= 4 || col >= 4 {
            return Err(Error::index_out_of_range(row, col, 4));
        }
        self.data[col * 4 + row] = value;
        Ok(())
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.get(i, 0), self.get(i, 1), self.get(i, 2), self.get(i, 3))
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.get(0, i), self.get(1, i), self.get(2, i), self.get(3, i))
    }

    /// Multiplies every element by a scalar.
    #[inline]
    pub fn mul_scalar(&self, s: f32) -> Self {
        Self {
            data: self.data.map(|x| x * s),
        }
    }

    /// Matrix product `self * other`.
    ///
    /// Composes transforms right to left: `(a * b).mul_point(p)` applies `b`
    /// first.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[k * 4 + row] * other.data[col * 4 + k];
                }
                result.data[col * 4 + row] = sum;
            }
        }
        result
    }

    /// Full 4x4 product with a homogeneous column vector.
    #[inline]
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let m = &self.data;
        Vec4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }

    /// Transforms a 3D point.
    ///
    /// The point is lifted to `w = 1`. If the resulting `w` is non-zero,
    /// x/y/z are divided by it (perspective divide); otherwise they are
    /// returned unchanged.
    #[inline]
    pub fn mul_point(&self, p: Vec3) -> Vec3 {
        let h = self.mul_vec4(p.extend(1.0));
        if h.w != 0.0 {
            Vec3::new(h.x / h.w, h.y / h.w, h.z / h.w)
        } else {
            h.truncate()
        }
    }

    /// Transforms a 3D direction (`w = 0`): translation has no effect and no
    /// divide is performed.
    #[inline]
    pub fn mul_direction(&self, d: Vec3) -> Vec3 {
        self.mul_vec4(d.extend(0.0)).truncate()
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            data: std::array::from_fn(|i| {
                let (col, row) = (i / 4, i % 4);
                self.data[row * 4 + col]
            }),
        }
    }

    /// Determinant of the 3x3 submatrix left after deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> f32 {
        let mut sub = [0.0f32; 9];
        let mut n = 0;
        for r in (0..4).filter(|&r| r != row) {
            for c in (0..4).filter(|&c| c != col) {
                sub[n] = self.data[c * 4 + r];
                n += 1;
            }
        }
        let [a, b, c, d, e, f, g, h, i] = sub;
        det3(a, b, c, d, e, f, g, h, i)
    }

    /// Signed minor: `(-1)^(row + col) * minor(row, col)`.
    #[inline]
    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let m = self.minor(row, col);
        if (row + col) % 2 == 0 { m } else { -m }
    }

    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        (0..4)
            .map(|col| self.data[col * 4] * self.cofactor(0, col))
            .sum()
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (`|det| < 1e-6`). Otherwise
    /// every element is the matching adjugate entry (the cofactor of the
    /// transposed position) scaled by `1/det`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinema_math::{Mat4, Vec3};
    ///
    /// let m = Mat4::translation(1.0, 2.0, 3.0);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.mul_point(Vec3::new(1.0, 2.0, 3.0)), Vec3::ZERO);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            trace!(det, "mat4 inverse: singular matrix");
            return None;
        }

        let inv_det = 1.0 / det;
        let mut result = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                // adj[row][col] = cofactor[col][row]
                result.data[col * 4 + row] = self.cofactor(col, row) * inv_det;
            }
        }
        Some(result)
    }

    /// Computes the inverse, or returns [`Error::SingularMatrix`].
    pub fn try_inverse(&self) -> Result<Self> {
        self.inverse()
            .ok_or_else(|| Error::singular(self.determinant()))
    }

    /// Translation matrix.
    #[inline]
    #[rustfmt::skip]
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::new(
            1.0, 0.0, 0.0, x,
            0.0, 1.0, 0.0, y,
            0.0, 0.0, 1.0, z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Translation matrix from a vector.
    #[inline]
    pub const fn translation_vec(t: Vec3) -> Self {
        Self::translation(t.x, t.y, t.z)
    }

    /// Rotation about the X axis (right-handed).
    #[inline]
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c, -s, 0.0,
            0.0, s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Y axis (right-handed).
    #[inline]
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            c, 0.0, s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Z axis (right-handed).
    #[inline]
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            c, -s, 0.0, 0.0,
            s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Uniform scale (w row left at 1).
    #[inline]
    pub const fn scale(factor: f32) -> Self {
        Self::diagonal(factor, factor, factor, 1.0)
    }

    /// Non-uniform scale.
    #[inline]
    pub const fn scale_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::diagonal(x, y, z, 1.0)
    }

    /// Right-handed perspective projection with OpenGL depth range.
    ///
    /// # Arguments
    ///
    /// * `fovy` - Vertical field of view in radians
    /// * `aspect` - Width / height
    /// * `near`, `far` - Positive distances to the clip planes
    ///
    /// The last row is `(0, 0, -1, 0)`, so the clip-space `w` equals the
    /// negated view-space `z` and [`mul_point`](Self::mul_point) performs
    /// the perspective divide. Points on the near plane map to `z = -1`,
    /// points on the far plane to `z = 1`.
    #[rustfmt::skip]
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy * 0.5).tan();
        let range_inv = 1.0 / (near - far);
        Self::new(
            f / aspect, 0.0, 0.0, 0.0,
            0.0, f, 0.0, 0.0,
            0.0, 0.0, (near + far) * range_inv, 2.0 * near * far * range_inv,
            0.0, 0.0, -1.0, 0.0,
        )
    }

    /// Right-handed orthographic projection with OpenGL depth range.
    ///
    /// Maps the view box `[left, right] x [bottom, top]` and the depth range
    /// `z = -near .. -far` linearly onto `[-1, 1]^3`. `w` stays 1.
    #[rustfmt::skip]
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let fnr = 1.0 / (far - near);
        Self::new(
            2.0 * rl, 0.0, 0.0, -(right + left) * rl,
            0.0, 2.0 * tb, 0.0, -(top + bottom) * tb,
            0.0, 0.0, -2.0 * fnr, -(far + near) * fnr,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Right-handed view matrix.
    ///
    /// Moves `eye` to the origin and orients the camera so `target` lies on
    /// the negative Z axis:
    ///
    /// ```text
    /// forward = normalize(target - eye)
    /// right   = normalize(forward x up)
    /// up'     = right x forward
    ///
    /// | right.x    right.y    right.z    -dot(right, eye)   |
    /// | up'.x      up'.y      up'.z      -dot(up', eye)     |
    /// | -forward.x -forward.y -forward.z  dot(forward, eye) |
    /// | 0          0          0           1                 |
    /// ```
    ///
    /// If `up` is parallel to the view direction (or `eye == target`) the
    /// basis collapses to zero vectors and the result is degenerate. Use
    /// [`try_look_at`](Self::try_look_at) to detect that case.
    #[rustfmt::skip]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        if right == Vec3::ZERO {
            debug!(?eye, ?target, "look_at: degenerate view basis");
        }

        Self::new(
            right.x, right.y, right.z, -right.dot(eye),
            up.x, up.y, up.z, -up.dot(eye),
            -forward.x, -forward.y, -forward.z, forward.dot(eye),
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Like [`look_at`](Self::look_at), but fails with
    /// [`Error::DegenerateBasis`] instead of producing a zero basis.
    pub fn try_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        let forward = (target - eye)
            .try_normalize()
            .ok_or_else(|| Error::degenerate_basis("eye coincides with target"))?;
        forward
            .cross(up)
            .try_normalize()
            .ok_or_else(|| Error::degenerate_basis("up is parallel to the view direction"))?;
        Ok(Self::look_at(eye, target, up))
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    /// Element-wise comparison with an absolute tolerance.
    #[inline]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Converts to glam Mat4 (also column-major).
    #[cfg(feature = "glam")]
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.data)
    }

    /// Creates from glam Mat4.
    #[cfg(feature = "glam")]
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            data: std::array::from_fn(|i| self.data[i] + rhs.data[i]),
        }
    }
}

impl Sub for Mat4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            data: std::array::from_fn(|i| self.data[i] - rhs.data[i]),
        }
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat4 * f32
impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.mul_scalar(rhs)
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < 4 && col < 4,
            "Mat4 index ({}, {}) out of bounds",
            row,
            col
        );
        &self.data[col * 4 + row]
    }
}

#[cfg(feature = "glam")]
impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

#[cfg(feature = "glam")]
impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}
