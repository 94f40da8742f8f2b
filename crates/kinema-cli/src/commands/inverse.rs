//! Inverse command
//!
//! Prints the inverse matrix, or fails with the singular-matrix error so the
//! exit status reflects it.

use super::{Matrix, format_matrix, parse_matrix};
use crate::InverseArgs;
use anyhow::{Context, Result};
use tracing::{debug, trace};

pub fn run(args: InverseArgs, precision: usize) -> Result<()> {
    trace!(matrix = %args.matrix, "inverse::run");

    let m = parse_matrix(&args.matrix).context("Failed to read matrix")?;
    let inv = match m {
        Matrix::M3(m) => Matrix::M3(m.try_inverse().context("Cannot invert 3x3 matrix")?),
        Matrix::M4(m) => Matrix::M4(m.try_inverse().context("Cannot invert 4x4 matrix")?),
    };

    debug!("inverse computed");
    println!("{}", format_matrix(&inv, precision));
    Ok(())
}
