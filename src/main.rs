//! Driver CLI for the stars library.
//!
//! Three surfaces: `table` prints the turning-angle table for one order,
//! `draw` renders a single {p/q} star (SVG document or JSON command trace),
//! and `gallery` sweeps a range of orders, writing one SVG file per variant.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stars::canvas::{Point, Recorder};
use stars::consts::{DEFAULT_ORDER_RANGE, DEFAULT_POINTING_ANGLE, DEFAULT_RADIUS};
use stars::star::Star;
use stars::svg::SvgCanvas;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("empty order range: --min-p {min} exceeds --max-p {max}")]
    EmptyOrderRange { min: u32, max: u32 },
    #[error(transparent)]
    Star(#[from] stars::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode command trace: {0}")]
    Trace(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "polygram", about = "Star polygon {p/q} turtle renderer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the turning-angle table for one polygon order.
    Table {
        /// Polygon order (number of vertices).
        p: u32,
    },
    /// Render a single {p/q} star.
    Draw(DrawArgs),
    /// Render every {p/q} variant across a range of orders.
    Gallery(GalleryArgs),
}

#[derive(Args, Debug)]
struct DrawArgs {
    /// Polygon order (number of vertices).
    p: u32,

    /// Step: connect every q-th vertex.
    q: u32,

    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    radius: f64,

    #[arg(long, default_value_t = 0.0)]
    center_x: f64,

    #[arg(long, default_value_t = 0.0)]
    center_y: f64,

    /// Heading from the center to the first vertex, degrees CCW from +x.
    #[arg(long, default_value_t = DEFAULT_POINTING_ANGLE)]
    pointing_angle: f64,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// Standalone SVG document.
    Svg,
    /// JSON lines, one draw command per line.
    Trace,
}

#[derive(Args, Debug)]
struct GalleryArgs {
    #[arg(long, default_value_t = DEFAULT_ORDER_RANGE.0)]
    min_p: u32,

    #[arg(long, default_value_t = DEFAULT_ORDER_RANGE.1)]
    max_p: u32,

    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    radius: f64,

    /// Directory for the rendered SVG files, created if missing.
    #[arg(long, env = "POLYGRAM_OUT_DIR", default_value = "gallery")]
    out_dir: PathBuf,

    /// Pause between variants in milliseconds, for paced viewing of the
    /// output directory as it fills.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Table { p } => run_table(p),
        Command::Draw(args) => run_draw(&args),
        Command::Gallery(args) => run_gallery(&args),
    }
}

fn run_table(p: u32) -> Result<(), CliError> {
    let table = stars::geom::turning_angles(p)?;
    if table.is_empty() {
        println!("no star ratios exist for order {p}");
        return Ok(());
    }
    for (q, theta) in &table {
        println!("{{{p}/{q}}}  turning angle {theta:.3}°");
    }
    Ok(())
}

fn run_draw(args: &DrawArgs) -> Result<(), CliError> {
    let star = Star::new(args.p, args.radius)?;
    let center = Point::new(args.center_x, args.center_y);
    debug!(p = args.p, q = args.q, radius = args.radius, "drawing star");

    let content = match args.format {
        Format::Svg => {
            let mut canvas = SvgCanvas::for_radius(args.radius);
            star.draw(&mut canvas, args.q, center, args.pointing_angle)?;
            canvas.document()
        }
        Format::Trace => {
            let mut recorder = Recorder::new();
            star.draw(&mut recorder, args.q, center, args.pointing_angle)?;
            let mut lines = String::new();
            for command in recorder.commands() {
                lines.push_str(&serde_json::to_string(command)?);
                lines.push('\n');
            }
            lines
        }
    };
    emit(args.out.as_deref(), &content)
}

fn run_gallery(args: &GalleryArgs) -> Result<(), CliError> {
    if args.min_p > args.max_p {
        return Err(CliError::EmptyOrderRange { min: args.min_p, max: args.max_p });
    }
    fs::create_dir_all(&args.out_dir).map_err(|source| CliError::Io {
        path: args.out_dir.clone(),
        source,
    })?;

    let mut rendered = 0u32;
    for p in args.min_p..=args.max_p {
        let star = Star::new(p, args.radius)?;
        for q in star.steps() {
            let mut canvas = SvgCanvas::for_radius(args.radius);
            star.draw(&mut canvas, q, Point::origin(), DEFAULT_POINTING_ANGLE)?;

            let path = args.out_dir.join(format!("star-{p}-{q}.svg"));
            fs::write(&path, canvas.document()).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            rendered += 1;
            info!(p, q, path = %path.display(), "rendered");

            if args.delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(args.delay_ms));
            }
        }
    }
    info!(rendered, "gallery complete");
    Ok(())
}

fn emit(out: Option<&Path>, content: &str) -> Result<(), CliError> {
    match out {
        Some(path) => fs::write(path, content).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
