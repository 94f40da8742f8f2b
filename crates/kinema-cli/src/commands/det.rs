//! Det command - determinant of a 3x3 or 4x4 matrix

use super::{Matrix, parse_matrix};
use crate::DetArgs;
use anyhow::{Context, Result};
use tracing::debug;

pub fn run(args: DetArgs, precision: usize) -> Result<()> {
    let m = parse_matrix(&args.matrix).context("Failed to read matrix")?;
    let det = match m {
        Matrix::M3(m) => m.determinant(),
        Matrix::M4(m) => m.determinant(),
    };
    debug!(det, "determinant");
    println!("{:.p$}", det, p = precision);
    Ok(())
}
