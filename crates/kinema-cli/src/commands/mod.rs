//! CLI command implementations

pub mod det;
pub mod inverse;
pub mod look_at;
pub mod project;
pub mod transform;

use kinema_core::Error;
use kinema_math::{Mat3, Mat4, Vec3};

/// A matrix argument of either supported size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Matrix {
    /// 9 values
    M3(Mat3),
    /// 16 values
    M4(Mat4),
}

/// Parse comma-separated floats like "1,2.5,-3"
pub fn parse_floats(s: &str) -> Result<Vec<f32>, Error> {
    s.split(',')
        .map(|p| {
            let p = p.trim();
            p.parse::<f32>()
                .map_err(|_| Error::parse(format!("invalid number '{}' in '{}'", p, s)))
        })
        .collect()
}

/// Parse "x,y,z" into a Vec3
pub fn parse_vec3(s: &str) -> Result<Vec3, Error> {
    match parse_floats(s)?.as_slice() {
        &[x, y, z] => Ok(Vec3::new(x, y, z)),
        other => Err(Error::parse(format!(
            "expected 3 values (x,y,z), got {} in '{}'",
            other.len(),
            s
        ))),
    }
}

/// Parse a row-major matrix of 9 or 16 values
pub fn parse_matrix(s: &str) -> Result<Matrix, Error> {
    let values = parse_floats(s)?;
    match values.len() {
        9 => {
            let mut rows = [[0.0; 3]; 3];
            for (i, v) in values.into_iter().enumerate() {
                rows[i / 3][i % 3] = v;
            }
            Ok(Matrix::M3(Mat3::from_rows(rows)))
        }
        16 => {
            let mut rows = [[0.0; 4]; 4];
            for (i, v) in values.into_iter().enumerate() {
                rows[i / 4][i % 4] = v;
            }
            Ok(Matrix::M4(Mat4::from_rows(rows)))
        }
        n => Err(Error::parse(format!(
            "expected 9 or 16 matrix values, got {}",
            n
        ))),
    }
}

/// Format a Vec3 as "(x, y, z)"
pub fn format_vec3(v: Vec3, precision: usize) -> String {
    format!(
        "({:.p$}, {:.p$}, {:.p$})",
        v.x,
        v.y,
        v.z,
        p = precision
    )
}

/// Format a matrix row by row, one row per line
pub fn format_matrix(m: &Matrix, precision: usize) -> String {
    let rows: Vec<Vec<f32>> = match m {
        Matrix::M3(m) => (0..3).map(|r| m.row(r).to_array().to_vec()).collect(),
        Matrix::M4(m) => (0..4).map(|r| m.row(r).to_array().to_vec()).collect(),
    };
    let width = precision + 5;
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|v| format!("{:>w$.p$}", v, w = width, p = precision))
                .collect();
            format!("[{} ]", cells.join(""))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
