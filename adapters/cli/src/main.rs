#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that classifies a world document for inspection.
//!
//! Loads an already-fetched world document from disk, runs one
//! classification pass against a tile viewport, and either prints the
//! per-layer entry counts or emits the whole display-ready overlay as JSON
//! for an external renderer to consume.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use overworld_core::{OverlayStats, RegionId, ZoomLevel};
use overworld_document::WorldDocument;
use overworld_system_classifier::{Classifier, Config};
use overworld_viewport::TileViewport;
use tracing_subscriber::EnvFilter;

/// Command-line arguments accepted by the `overworld` binary.
#[derive(Debug, Parser)]
#[command(name = "overworld", about = "Classify a world document into map overlay layers")]
struct Args {
    /// Path to the world document JSON file.
    input: PathBuf,

    /// Maximum zoom level of the target tile viewport.
    #[arg(long, default_value_t = 7)]
    max_zoom: u8,

    /// Emit the classified overlay as JSON instead of layer statistics.
    #[arg(long)]
    json: bool,

    /// Region id to exclude from classification; repeatable. Overrides the
    /// default exclusion list when given.
    #[arg(long = "exclude-region", value_name = "ID")]
    exclude_regions: Vec<String>,
}

/// Entry point for the Overworld command-line interface.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let document = WorldDocument::from_path(&args.input).with_context(|| {
        format!(
            "failed to load world document from {}",
            args.input.display()
        )
    })?;

    let config = if args.exclude_regions.is_empty() {
        Config::default()
    } else {
        Config::new(args.exclude_regions.into_iter().map(RegionId::new).collect())
    };

    let viewport = TileViewport::new(ZoomLevel::new(args.max_zoom));
    let overlay = Classifier::new(config).classify(&document, &viewport);

    if args.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &overlay)
            .context("failed to write overlay JSON")?;
        println!();
    } else {
        print_stats(overlay.stats());
    }

    Ok(())
}

/// Prints per-layer entry counts in the layer toggle order.
fn print_stats(stats: OverlayStats) {
    println!("tasks ({})", stats.tasks);
    println!("poi ({})", stats.landmarks);
    println!("skills ({})", stats.skill_points);
    println!("waypoints ({})", stats.waypoints);
    println!("vistas ({})", stats.vistas);
    println!("map labels ({})", stats.map_labels);
    println!("sectors ({})", stats.sectors);
}
