//! Crust CLI - alpha-shape surface extraction tool.
//!
//! Usage: crust <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `crust --help` for available commands.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use crust::complex::{AlphaComplex, FacetClass, TetComplex};
use crust::error::CrustError;
use crust::extract::{extract_surface_with_progress, Progress, SurfaceMesh};
use crust::io::{off, tet, xyz};
use crust::nalgebra::Point3;

#[derive(Parser)]
#[command(name = "crust")]
#[command(author, version, about = "Alpha-shape surface extraction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outer boundary surface of a classified complex
    Extract {
        /// Input classified-complex file (.tet)
        input: PathBuf,

        /// Output mesh file (defaults to the input with a .off extension)
        output: Option<PathBuf>,

        /// Suppress progress and statistics output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Display file statistics
    Info {
        /// Input file (.tet, .off or .xyz)
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Extract { input, output, quiet } => {
            cmd_extract(&input, output, quiet)?;
        }

        Commands::Info { input } => {
            cmd_info(&input)?;
        }
    }

    Ok(())
}

fn cmd_extract(input: &Path, output: Option<PathBuf>, quiet: bool) -> Result<(), Box<dyn Error>> {
    let complex = tet::load(input)?;

    let unbounded = complex.cells().filter(|c| c.is_unbounded()).count();
    if !quiet {
        println!(
            "Loaded: {} vertices, {} cells ({} unbounded)",
            complex.num_vertices(),
            complex.num_cells() - unbounded,
            unbounded
        );
    }

    let progress = if quiet {
        Progress::none()
    } else {
        Progress::new(|current, total, message| eprintln!("[{}/{}] {}", current, total, message))
    };

    let start = Instant::now();
    let mesh = extract_surface_with_progress(&complex, &progress);
    let elapsed = start.elapsed();

    let output = output.unwrap_or_else(|| input.with_extension("off"));
    off::save(&mesh, &output)?;

    if !quiet {
        println!(
            "Saved: {} ({} vertices, {} triangles, {:.2?})",
            output.display(),
            mesh.num_vertices(),
            mesh.num_triangles(),
            elapsed
        );
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn Error>> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("(none)")
        .to_lowercase();

    match extension.as_str() {
        "tet" => info_complex(input, &tet::load(input)?),
        "off" => info_mesh(input, &off::load(input)?),
        "xyz" => info_points(input, &xyz::load(input)?),
        _ => Err(CrustError::UnsupportedFormat { extension }.into()),
    }
}

fn info_complex(input: &Path, complex: &TetComplex) -> Result<(), Box<dyn Error>> {
    let unbounded = complex.cells().filter(|c| c.is_unbounded()).count();

    println!("File: {}", input.display());
    println!("Vertices: {}", complex.num_vertices());
    println!("Cells: {} finite, {} unbounded", complex.num_cells() - unbounded, unbounded);

    // Count each geometric facet once, from its lower-id incident cell.
    let mut exterior = 0usize;
    let mut regular = 0usize;
    let mut interior = 0usize;
    for (c, cell) in complex.cells().enumerate() {
        for i in 0..4 {
            if cell.neighbors[i].index() < c {
                continue;
            }
            match cell.classes[i] {
                FacetClass::Exterior => exterior += 1,
                FacetClass::Regular => regular += 1,
                FacetClass::Interior => interior += 1,
            }
        }
    }
    println!("Facets: {} exterior, {} regular, {} interior", exterior, regular, interior);

    Ok(())
}

fn info_mesh(input: &Path, mesh: &SurfaceMesh) -> Result<(), Box<dyn Error>> {
    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Triangles: {}", mesh.num_triangles());

    if let Some((min, max)) = mesh.bounding_box() {
        print_bounds(min, max);
    }

    Ok(())
}

fn info_points(input: &Path, points: &[Point3<f64>]) -> Result<(), Box<dyn Error>> {
    println!("File: {}", input.display());
    println!("Points: {}", points.len());

    if let Some(&first) = points.first() {
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            for k in 0..3 {
                min[k] = min[k].min(p[k]);
                max[k] = max[k].max(p[k]);
            }
        }
        print_bounds(min, max);
    }

    Ok(())
}

fn print_bounds(min: Point3<f64>, max: Point3<f64>) {
    println!(
        "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
        min.x, min.y, min.z, max.x, max.y, max.z
    );
    let diag = max - min;
    println!("Dimensions: {:.3} x {:.3} x {:.3}", diag.x, diag.y, diag.z);
}
