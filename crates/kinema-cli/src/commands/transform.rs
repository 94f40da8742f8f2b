//! Transform command
//!
//! Composes `T * Rz * Ry * Rx * S` and applies it to each input, so scale
//! happens first and translation last.

use super::{Matrix, format_matrix, format_vec3};
use crate::TransformArgs;
use anyhow::Result;
use kinema_math::{Mat4, Vec3, deg_to_rad};
use tracing::{debug, info, trace};

/// Builds the composed model matrix from the command arguments.
pub fn compose(args: &TransformArgs) -> Mat4 {
    let t = args.translate.map_or(Mat4::IDENTITY, Mat4::translation_vec);
    let s = args
        .scale
        .map_or(Mat4::IDENTITY, |s| Mat4::scale_xyz(s.x, s.y, s.z));

    t * Mat4::rotation_z(deg_to_rad(args.rotate_z))
        * Mat4::rotation_y(deg_to_rad(args.rotate_y))
        * Mat4::rotation_x(deg_to_rad(args.rotate_x))
        * s
}

/// Applies the matrix as a point or direction transform.
pub fn apply(m: &Mat4, v: Vec3, direction: bool) -> Vec3 {
    if direction {
        m.mul_direction(v)
    } else {
        m.mul_point(v)
    }
}

pub fn run(args: TransformArgs, precision: usize) -> Result<()> {
    trace!(
        points = args.points.len(),
        direction = args.direction,
        "transform::run"
    );

    let m = compose(&args);
    info!(det = m.determinant(), "Composed transform");

    if args.show_matrix {
        println!("{}", format_matrix(&Matrix::M4(m), precision));
        println!();
    }

    for &p in &args.points {
        let out = apply(&m, p, args.direction);
        debug!(?p, ?out, "transformed");
        println!(
            "{} -> {}",
            format_vec3(p, precision),
            format_vec3(out, precision)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> TransformArgs {
        TransformArgs {
            points: vec![Vec3::ONE],
            translate: None,
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotate_z: 0.0,
            scale: None,
            direction: false,
            show_matrix: false,
        }
    }

    #[test]
    fn test_compose_identity() {
        assert_eq!(compose(&args()), Mat4::IDENTITY);
    }

    #[test]
    fn test_compose_order() {
        let mut a = args();
        a.translate = Some(Vec3::new(5.0, 3.0, -2.0));
        a.scale = Some(Vec3::splat(2.0));
        let m = compose(&a);
        // scale first, then translate
        assert_eq!(apply(&m, Vec3::ONE, false), Vec3::new(7.0, 5.0, 0.0));
        assert_eq!(apply(&m, Vec3::ONE, true), Vec3::splat(2.0));
    }
}
