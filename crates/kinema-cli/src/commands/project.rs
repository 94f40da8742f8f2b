//! Project command - view space to normalized device coordinates

use super::format_vec3;
use crate::ProjectArgs;
use anyhow::{Result, bail};
use kinema_math::{Mat4, deg_to_rad};
use tracing::{debug, info};

pub fn run(args: ProjectArgs, precision: usize) -> Result<()> {
    if args.near <= 0.0 || args.far <= args.near {
        bail!(
            "Invalid clip range: near={} far={} (need 0 < near < far)",
            args.near,
            args.far
        );
    }

    let proj = match args.ortho {
        Some(half_h) => {
            let half_w = half_h * args.aspect;
            info!(half_w, half_h, "Orthographic projection");
            Mat4::orthographic(-half_w, half_w, -half_h, half_h, args.near, args.far)
        }
        None => {
            info!(fovy = args.fovy, aspect = args.aspect, "Perspective projection");
            Mat4::perspective(deg_to_rad(args.fovy), args.aspect, args.near, args.far)
        }
    };

    for &point in &args.points {
        let clip = proj.mul_vec4(point.extend(1.0));
        let ndc = proj.mul_point(point);
        debug!(?point, w = clip.w, "projected");
        println!(
            "{} -> {}  w={:.prec$}",
            format_vec3(point, precision),
            format_vec3(ndc, precision),
            clip.w,
            prec = precision
        );
    }

    Ok(())
}
