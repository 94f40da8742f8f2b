//! Look-at command - view matrix and world-to-view mapping

use super::{Matrix, format_matrix, format_vec3};
use crate::LookAtArgs;
use anyhow::{Context, Result};
use kinema_math::Mat4;
use tracing::{debug, warn};

pub fn run(args: LookAtArgs, precision: usize) -> Result<()> {
    let view = if args.strict {
        Mat4::try_look_at(args.eye, args.target, args.up).context("Cannot build view matrix")?
    } else {
        let view = Mat4::look_at(args.eye, args.target, args.up);
        if view.inverse().is_none() {
            warn!("view matrix is degenerate (up parallel to view direction?)");
        }
        view
    };

    println!("{}", format_matrix(&Matrix::M4(view), precision));

    if !args.points.is_empty() {
        println!();
    }
    for &p in &args.points {
        let v = view.mul_point(p);
        debug!(?p, ?v, "to view space");
        println!("{} -> {}", format_vec3(p, precision), format_vec3(v, precision));
    }

    Ok(())
}
