//! chunk_obj - export raw voxel chunk dumps to one Wavefront OBJ model
//!
//! Reads every `<x>.<z>.chunk` file in a directory, meshes them in
//! coordinate order and appends each chunk's geometry to the output.

mod input;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chunk_mesher::{ExportStats, Exporter, MeshConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "chunk_obj")]
#[command(about = "Export raw voxel chunk dumps to a Wavefront OBJ model")]
#[command(version)]
struct Cli {
    /// Directory containing <x>.<z>.chunk files
    input: PathBuf,

    /// Output .obj file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Mesher configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit one quad per block face instead of merging wall runs
    #[arg(long)]
    no_greedy: bool,

    /// Use neighbouring chunk edges to hide faces on shared borders
    #[arg(long)]
    cache_sides: bool,

    /// Always treat stone as solid
    #[arg(long)]
    stone_solid: bool,

    /// Skip blocks below this height
    #[arg(long)]
    y_min: Option<usize>,

    /// Material library referenced from the output
    #[arg(long)]
    mtllib: Option<String>,
}

impl Cli {
    /// Load the config file (if any) and apply flag overrides.
    fn mesh_config(&self) -> Result<MeshConfig> {
        let mut config = match &self.config {
            Some(path) => MeshConfig::load(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => MeshConfig::default(),
        };

        if self.no_greedy {
            config.greedy = false;
        }
        if self.cache_sides {
            config.cache_sides = true;
        }
        if self.stone_solid {
            config.stone_always_solid = true;
        }
        if let Some(y_min) = self.y_min {
            config.y_min = y_min;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout may carry the model.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.mesh_config()?;

    let stats = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {:?}", path))?;
            tracing::info!("Exporting {:?} -> {:?}", cli.input, path);
            export_dir(&cli.input, config, BufWriter::new(file), cli.mtllib.as_deref())?
        }
        None => {
            let stdout = io::stdout().lock();
            export_dir(&cli.input, config, BufWriter::new(stdout), cli.mtllib.as_deref())?
        }
    };

    tracing::info!(
        "Done! {} chunks ({} empty), {} vertices, {} faces ({:.1} faces/chunk)",
        stats.chunks,
        stats.empty_chunks,
        stats.vertices,
        stats.faces,
        stats.faces_per_chunk()
    );
    Ok(())
}

/// Mesh every chunk in `dir` into `out`.
fn export_dir<W: Write>(
    dir: &Path,
    config: MeshConfig,
    out: W,
    mtllib: Option<&str>,
) -> Result<ExportStats> {
    let chunks = input::discover_chunks(dir)?;
    if chunks.is_empty() {
        tracing::warn!("No chunk files found in {:?}", dir);
    }

    let mut exporter = Exporter::new(out, config);
    exporter.write_header(mtllib).context("Failed to write header")?;

    for (coord, path) in &chunks {
        let raw = input::load_chunk(path)?;
        exporter
            .process_chunk(*coord, &raw)
            .with_context(|| format!("Failed to export chunk {}", coord))?;
    }

    let (_, stats) = exporter.finish().context("Failed to flush output")?;
    Ok(stats)
}
