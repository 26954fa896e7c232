// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `noc` command-line front end.
//!
//! # Usage
//!
//! ```bash
//! # H-tree from a blueprint, with path metrics
//! noc htree 012
//!
//! # Repeating xyz blueprint of 9 levels, exported as JSON
//! noc --export cuboid.json cuboid 9
//!
//! # 3x3x2 mesh and the distance between elements 0 and 17
//! noc mesh 3 3 2 --distance 0 17
//!
//! # Where stacking wiring layers pays off
//! noc improvement --tiles 1000000 --max-layers 800
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

use clap::{Parser, Subcommand};
use noc_topology::htree::HTreeConfig;
use noc_topology::metric::layering::{DEFAULT_MAX_LAYERS, DEFAULT_TILES};
use noc_topology::metric::{improvement_sweep, optimal_layers};
use noc_topology::{Blueprint, LayoutSpec, MeshDimensions, NetworkKind, Noc, NocConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noc")]
#[command(about = "Generate and measure 3D H-tree and mesh network-on-chip topologies", long_about = None)]
struct Cli {
    /// JSON geometry configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write a JSON snapshot of the generated topology
    #[arg(short, long, global = true)]
    export: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// H-tree from an axis blueprint (0/x, 1/y, 2/z)
    Htree {
        #[arg(default_value = "012")]
        blueprint: String,

        /// Shrink every horizontal step by 1/sqrt(2)
        #[arg(long)]
        pixel: bool,
    },

    /// H-tree from the repeating xyz blueprint
    Cuboid {
        /// Number of levels (1..=21)
        #[arg(default_value = "9")]
        levels: usize,

        /// Shrink every horizontal step by 1/sqrt(2)
        #[arg(long)]
        pixel: bool,
    },

    /// Regular mesh of memory elements
    Mesh {
        #[arg(default_value = "3")]
        x: usize,
        #[arg(default_value = "3")]
        y: usize,
        #[arg(default_value = "2")]
        z: usize,

        /// Report the distance between two element indices
        #[arg(long, num_args = 2, value_names = ["A", "B"])]
        distance: Option<Vec<usize>>,
    },

    /// Layer-count improvement model
    Improvement {
        #[arg(long, default_value_t = DEFAULT_TILES)]
        tiles: f64,

        #[arg(long, default_value_t = DEFAULT_MAX_LAYERS)]
        max_layers: f64,

        /// Grid points per axis
        #[arg(long, default_value = "200")]
        steps: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => NocConfig::load(path)?,
        None => NocConfig::default(),
    };

    match cli.command {
        Commands::Htree { blueprint, pixel } => {
            let blueprint = Blueprint::normalize(&blueprint)?;
            run_htree(&mut config, blueprint, pixel, cli.export)?;
        }
        Commands::Cuboid { levels, pixel } => {
            let blueprint = Blueprint::cuboid(levels)?;
            run_htree(&mut config, blueprint, pixel, cli.export)?;
        }
        Commands::Mesh { x, y, z, distance } => {
            run_mesh(&config, MeshDimensions::new(x, y, z), distance, cli.export)?;
        }
        Commands::Improvement {
            tiles,
            max_layers,
            steps,
        } => {
            run_improvement(tiles, max_layers, steps)?;
        }
    }

    Ok(())
}

fn run_htree(
    config: &mut NocConfig,
    blueprint: Blueprint,
    pixel: bool,
    export: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if pixel {
        config.htree.scaling = HTreeConfig::pixel().scaling;
    }
    let mut noc = Noc::with_config(NetworkKind::HTree, config);
    noc.generate(&LayoutSpec::HTree(blueprint))?;
    print_stats(&noc)?;

    let report = noc.path_metrics()?.report();
    println!("\n=== Path Metrics ===");
    println!("Wire length:            {:.3} µm", report.wire_length);
    println!("Added delay:            {:.3} µm", report.added_delay);
    println!("Total length:           {:.3} µm", report.total_length);
    println!("Average segment length: {:.3} µm", report.average_segment_length);

    export_snapshot(&noc, export)
}

fn run_mesh(
    config: &NocConfig,
    dimensions: MeshDimensions,
    distance: Option<Vec<usize>>,
    export: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut noc = Noc::with_config(NetworkKind::Mesh, config);
    noc.generate(&LayoutSpec::Mesh(dimensions))?;
    print_stats(&noc)?;

    if let Some(&[a, b]) = distance.as_deref() {
        let d = noc.distance(a, b)?;
        println!("\n=== Distance {} -> {} ===", a, b);
        println!("Horizontal: {:.3} µm", d.horizontal);
        println!("Vertical:   {:.3} µm", d.vertical);
        println!("Total:      {:.3} µm", d.total());
        println!(
            "Search energy: {:.3} / {:.3}",
            noc.search_energy(a)?,
            noc.search_energy(b)?
        );
    }

    export_snapshot(&noc, export)
}

fn run_improvement(
    tiles: f64,
    max_layers: f64,
    steps: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let sweep = improvement_sweep(tiles..=tiles, 1.0..=max_layers, steps)?;
    let improving = sweep.improving().count();
    println!("=== Layering Improvement ({} tiles) ===", tiles);
    println!("Optimal layers (tiles^1/3): {:.2}", optimal_layers(tiles));
    println!(
        "Best sampled:               {:.2} layers, {:.1}%",
        sweep.best.layers,
        sweep.best.improvement * 100.0
    );
    println!(
        "Improving samples:          {} of {}",
        improving,
        sweep.points.len()
    );
    Ok(())
}

fn print_stats(noc: &Noc) -> Result<(), Box<dyn std::error::Error>> {
    let stats = noc.stats()?;
    let topology = noc.topology()?;
    println!("=== NOC Stats ({}) ===", noc.layout()?);
    println!("Lines:      {}", stats.lines());
    println!("Junctions:  {}", stats.junctions());
    println!("Nodes:      {}", stats.nodes());
    println!("Layers:     {}", topology.max_layer());
    println!("Wire total: {:.3} µm", topology.total_wire_length());
    Ok(())
}

fn export_snapshot(noc: &Noc, export: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = export {
        noc.export_json(&path)?;
        println!("\nSnapshot written to {}", path.display());
    }
    Ok(())
}
