//! # kinema-math
//!
//! Single-precision linear algebra for rigid-body and rendering pipelines.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - value-type vectors
//! - [`Mat3`] - 3x3 matrices (3D linear maps, 2D homogeneous transforms)
//! - [`Mat4`] - 4x4 matrices (affine transforms, projections, view matrices)
//! - Scalar utilities ([`lerp`], [`clamp`], [`approximately`], angle constants)
//!
//! # Design
//!
//! Every type is `Copy` and every operation returns a new value. Matrices
//! store their elements in **column-major** order (`data[col * N + row]`)
//! and treat vectors as **columns**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Constructors that take individual elements accept them in row-major
//! *textual* order, so source code reads like the matrix it builds.
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::{Mat4, Vec3};
//!
//! let model = Mat4::translation(5.0, 3.0, -2.0);
//! let p = model.mul_point(Vec3::new(1.0, 1.0, 1.0));
//! assert_eq!(p, Vec3::new(6.0, 4.0, -1.0));
//!
//! // Directions ignore translation
//! let d = model.mul_direction(Vec3::new(1.0, 1.0, 1.0));
//! assert_eq!(d, Vec3::ONE);
//! ```
//!
//! # Degenerate Inputs
//!
//! Dividing a vector by exactly zero and normalizing a (near) zero-length
//! vector both yield the zero vector instead of NaN/Inf. Inverting a matrix
//! with `|det| < 1e-6` yields `None` (or [`Error::SingularMatrix`] from the
//! `try_` variants).
//!
//! # Feature Flags
//!
//! - `glam` (default) - Conversions to and from [`glam`] types
//! - `serde` - `Serialize`/`Deserialize` for all vector and matrix types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod mat4;
mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use mat3::*;
pub use mat4::*;
pub use scalar::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

pub use kinema_core::{Error, Result};

/// Re-export glam types for direct use
#[cfg(feature = "glam")]
pub mod glam {
    pub use ::glam::{
        Mat3 as GlamMat3, Mat4 as GlamMat4, Vec2 as GlamVec2, Vec3 as GlamVec3, Vec4 as GlamVec4,
    };
}

/// Prelude module for convenient imports.
///
/// ```
/// use kinema_math::prelude::*;
///
/// let m = Mat3::rotation_z(FRAC_PI_2);
/// assert!(m.determinant() > 0.0);
/// ```
pub mod prelude {
    pub use crate::scalar::{
        DEG_TO_RAD, FRAC_PI_2, FRAC_PI_4, PI, RAD_TO_DEG, TAU, approximately, clamp, lerp,
    };
    pub use crate::{Mat3, Mat4, Vec2, Vec3, Vec4};
    pub use kinema_core::{Error, Result};
}
