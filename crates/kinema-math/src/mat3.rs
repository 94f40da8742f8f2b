//! 3x3 matrix type.
//!
//! [`Mat3`] serves two roles: a 3D linear map (rotation, scale) and a 2D
//! homogeneous transform acting on `Vec3` values whose `z = 1` marks a point.
//!
//! # Convention
//!
//! Matrices are stored in **column-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//!
//! data = [m00, m10, m20, m01, m11, m21, m02, m12, m22]
//! ```
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::{Mat3, Vec3, FRAC_PI_2};
//!
//! let m = Mat3::translation_2d(2.0, 3.0) * Mat3::rotation_2d(FRAC_PI_2);
//! let p = m * Vec3::new(1.0, 0.0, 1.0);
//! assert!((p - Vec3::new(2.0, 4.0, 1.0)).length() < 1e-5);
//! ```

use crate::scalar::EPSILON;
use crate::Vec3;
use kinema_core::{Error, Result};
use std::ops::{Add, Index, Mul, Sub};
use tracing::trace;

/// A 3x3 matrix of f32 values.
///
/// Stored in column-major order: element `(row, col)` lives at
/// `data[col * 3 + row]`. Use [`Mat3::new`] or [`Mat3::from_rows`] to write
/// a matrix the way it reads on paper.
///
/// # Example
///
/// ```rust
/// use kinema_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in column-major order.
    pub data: [f32; 9],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { data: [0.0; 9] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// Creates a matrix from elements in row-major textual order.
    ///
    /// ```rust
    /// use kinema_math::Mat3;
    ///
    /// let m = Mat3::new(
    ///     1.0, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// );
    /// assert_eq!(m.get(0, 1), 2.0);
    /// assert_eq!(m.data[1], 4.0); // column-major
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self {
            data: [m00, m10, m20, m01, m11, m21, m02, m12, m22],
        }
    }

    /// Creates a matrix from row arrays.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self::new(
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        )
    }

    /// Creates a matrix from column arrays.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self {
            data: [
                cols[0][0], cols[0][1], cols[0][2],
                cols[1][0], cols[1][1], cols[1][2],
                cols[2][0], cols[2][1], cols[2][2],
            ],
        }
    }

    /// Creates a matrix from three column vectors.
    #[inline]
    pub const fn from_columns(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a matrix from a flat column-major array.
    #[inline]
    pub const fn from_cols_array(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Returns the flat column-major array.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 9] {
        self.data
    }

    /// Column-major view of the elements, e.g. for GPU uploads.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Creates a diagonal matrix.
    #[inline]
    #[rustfmt::skip]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::new(
            d0, 0.0, 0.0,
            0.0, d1, 0.0,
            0.0, 0.0, d2,
        )
    }

    /// Returns element `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`. See [`try_get`](Self::try_get)
    /// for a checked variant.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < 3 && col < 3,
            "Mat3 index ({}, {}) out of bounds",
            row,
            col
        );
        self.data[col * 3 + row]
    }

    /// Sets element `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(
            row < 3 && col < 3,
            "Mat3 index ({}, {}) out of bounds",
            row,
            col
        );
        self.data[col * 3 + row] = value;
    }

    /// Returns element `(row, col)`, or [`Error::IndexOutOfRange`].
    pub fn try_get(&self, row: usize, col: usize) -> Result<f32> {
        if row >= 3 || col >= 3 {
            return Err(Error::index_out_of_range(row, col, 3));
        }
        Ok(self.data[col * 3 + row])
    }

    /// Sets element `(row, col)`, or returns [`Error::IndexOutOfRange`].
    pub fn try_set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        if row >= 3 || col >= 3 {
            return Err(Error::index_out_of_range(row, col, 3));
        }
        self.data[col * 3 + row] = value;
        Ok(())
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.get(i, 0), self.get(i, 1), self.get(i, 2))
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.get(0, i), self.get(1, i), self.get(2, i))
    }

    /// Multiplies every element by a scalar.
    #[inline]
    pub fn mul_scalar(&self, s: f32) -> Self {
        Self {
            data: self.data.map(|x| x * s),
        }
    }

    /// Matrix product `self * other`.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.data[k * 3 + row] * other.data[col * 3 + k];
                }
                result.data[col * 3 + row] = sum;
            }
        }
        result
    }

    /// Transforms a column vector: `self * v`.
    #[inline]
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        let m = &self.data;
        Vec3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let m = &self.data;
        Self {
            data: [m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]],
        }
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// With elements named `a..i` in row-major order:
    /// `a(ei - fh) - b(di - fg) + c(dh - eg)`.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [a, d, g, b, e, h, c, f, i] = self.data;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (`|det| < 1e-6`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinema_math::Mat3;
    ///
    /// let m = Mat3::scale(2.0);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Mat3::scale(0.5));
    /// assert!(Mat3::ZERO.inverse().is_none());
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            trace!(det, "mat3 inverse: singular matrix");
            return None;
        }

        let [a, d, g, b, e, h, c, f, i] = self.data;
        let inv_det = 1.0 / det;

        // Adjugate (transposed cofactors), scaled by 1/det
        Some(Self::new(
            (e * i - f * h) * inv_det,
            (c * h - b * i) * inv_det,
            (b * f - c * e) * inv_det,
            (f * g - d * i) * inv_det,
            (a * i - c * g) * inv_det,
            (c * d - a * f) * inv_det,
            (d * h - e * g) * inv_det,
            (b * g - a * h) * inv_det,
            (a * e - b * d) * inv_det,
        ))
    }

    /// Computes the inverse, or returns [`Error::SingularMatrix`].
    pub fn try_inverse(&self) -> Result<Self> {
        self.inverse()
            .ok_or_else(|| Error::singular(self.determinant()))
    }

    /// Rotation about the implicit Z axis, for 2D homogeneous transforms.
    ///
    /// Positive angles rotate counter-clockwise.
    #[inline]
    #[rustfmt::skip]
    pub fn rotation_2d(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Non-uniform 2D scale (z row left at 1).
    #[inline]
    pub const fn scale_2d(sx: f32, sy: f32) -> Self {
        Self::diagonal(sx, sy, 1.0)
    }

    /// 2D translation in the third column.
    ///
    /// Moves points (`z = 1`) and leaves directions (`z = 0`) unchanged.
    #[inline]
    #[rustfmt::skip]
    pub const fn translation_2d(x: f32, y: f32) -> Self {
        Self::new(
            1.0, 0.0, x,
            0.0, 1.0, y,
            0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the X axis (right-handed).
    #[inline]
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            1.0, 0.0, 0.0,
            0.0, c, -s,
            0.0, s, c,
        )
    }

    /// Rotation about the Y axis (right-handed).
    #[inline]
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            c, 0.0, s,
            0.0, 1.0, 0.0,
            -s, 0.0, c,
        )
    }

    /// Rotation about the Z axis (right-handed).
    #[inline]
    pub fn rotation_z(angle: f32) -> Self {
        Self::rotation_2d(angle)
    }

    /// Uniform 3D scale.
    #[inline]
    pub const fn scale(factor: f32) -> Self {
        Self::diagonal(factor, factor, factor)
    }

    /// Non-uniform 3D scale.
    #[inline]
    pub const fn scale_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::diagonal(x, y, z)
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

    /// Converts to glam Mat3 (also column-major).
    #[cfg(feature = "glam")]
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols_array(&self.data)
    }

    /// Creates from glam Mat3.
    #[cfg(feature = "glam")]
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            data: std::array::from_fn(|i| self.data[i] + rhs.data[i]),
        }
    }
}

impl Sub for Mat3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            data: std::array::from_fn(|i| self.data[i] - rhs.data[i]),
        }
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat3 * f32
impl Mul<f32> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.mul_scalar(rhs)
    }
}

/// `m[(row, col)]`, panicking when out of range.
impl Index<(usize, usize)> for Mat3 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < 3 && col < 3,
            "Mat3 index ({}, {}) out of bounds",
            row,
            col
        );
        &self.data[col * 3 + row]
    }
}

#[cfg(feature = "glam")]
impl From<glam::Mat3> for Mat3 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_glam(m)
    }
}

#[cfg(feature = "glam")]
impl From<Mat3> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3) -> glam::Mat3 {
        m.to_glam()
    }
}
