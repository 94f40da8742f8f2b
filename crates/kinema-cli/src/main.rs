//! kinema - linear algebra calculator
//!
//! Evaluates determinants, inverses and transform chains from the shell.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use kinema_math::Vec3;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::parse_vec3;

#[derive(Parser)]
#[command(name = "kinema")]
#[command(author, version, about = "Vector and matrix calculator")]
#[command(long_about = "
Evaluate single-precision matrix and vector operations.
Matrices are given row by row as comma-separated floats (9 or 16 values).

Examples:
  kinema det 1,2,3,0,1,4,5,6,0
  kinema inverse 2,0,0,0,0,2,0,0,0,0,2,0,1,2,3,1
  kinema transform --translate 5,3,-2 1,1,1
  kinema transform --rotate-z 90 --direction 1,0,0
  kinema project --fovy 45 --aspect 1.777 0,0,-1
  kinema look-at --eye 0,0,5 --target 0,0,0 0,0,0
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decimal places in printed results
    #[arg(short, long, global = true, default_value = "4")]
    precision: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the determinant of a 3x3 or 4x4 matrix
    Det(DetArgs),

    /// Print the inverse of a 3x3 or 4x4 matrix
    #[command(visible_alias = "inv")]
    Inverse(InverseArgs),

    /// Apply translate/rotate/scale to points or directions
    #[command(visible_alias = "t")]
    Transform(TransformArgs),

    /// Perspective-project view-space points
    Project(ProjectArgs),

    /// Build a view matrix and map points into view space
    #[command(name = "look-at")]
    LookAt(LookAtArgs),
}

#[derive(Args)]
struct DetArgs {
    /// Row-major matrix elements (9 or 16 comma-separated values)
    #[arg(allow_hyphen_values = true)]
    matrix: String,
}

#[derive(Args)]
struct InverseArgs {
    /// Row-major matrix elements (9 or 16 comma-separated values)
    #[arg(allow_hyphen_values = true)]
    matrix: String,
}

#[derive(Args)]
struct TransformArgs {
    /// Points (or directions) as x,y,z
    #[arg(required = true, allow_hyphen_values = true, value_parser = parse_vec3)]
    points: Vec<Vec3>,

    /// Translation x,y,z
    #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3)]
    translate: Option<Vec3>,

    /// Rotation about X in degrees
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    rotate_x: f32,

    /// Rotation about Y in degrees
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    rotate_y: f32,

    /// Rotation about Z in degrees
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    rotate_z: f32,

    /// Scale x,y,z
    #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3)]
    scale: Option<Vec3>,

    /// Treat inputs as directions (w = 0, translation ignored)
    #[arg(short, long)]
    direction: bool,

    /// Also print the composed matrix
    #[arg(short, long)]
    show_matrix: bool,
}

#[derive(Args)]
struct ProjectArgs {
    /// View-space points as x,y,z
    #[arg(required = true, allow_hyphen_values = true, value_parser = parse_vec3)]
    points: Vec<Vec3>,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "60")]
    fovy: f32,

    /// Aspect ratio (width / height)
    #[arg(long, default_value = "1.7777778")]
    aspect: f32,

    /// Near clip distance
    #[arg(long, default_value = "0.1")]
    near: f32,

    /// Far clip distance
    #[arg(long, default_value = "100")]
    far: f32,

    /// Use an orthographic box of this half-height instead of a perspective frustum
    #[arg(long)]
    ortho: Option<f32>,
}

#[derive(Args)]
struct LookAtArgs {
    /// World-space points to map into view space
    #[arg(allow_hyphen_values = true, value_parser = parse_vec3)]
    points: Vec<Vec3>,

    /// Camera position
    #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3)]
    eye: Vec3,

    /// Point the camera looks at
    #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3, default_value = "0,0,0")]
    target: Vec3,

    /// Up hint
    #[arg(long, allow_hyphen_values = true, value_parser = parse_vec3, default_value = "0,1,0")]
    up: Vec3,

    /// Fail instead of printing a degenerate matrix when up is parallel to the view direction
    #[arg(long)]
    strict: bool,
}

/// Installs the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let precision = cli.precision;
    match cli.command {
        Commands::Det(args) => commands::det::run(args, precision),
        Commands::Inverse(args) => commands::inverse::run(args, precision),
        Commands::Transform(args) => commands::transform::run(args, precision),
        Commands::Project(args) => commands::project::run(args, precision),
        Commands::LookAt(args) => commands::look_at::run(args, precision),
    }
}
