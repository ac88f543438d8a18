//! classgraph CLI - render PlantUML class diagrams from a source tree.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use classgraph::config::Config;
use classgraph::model::TypeNode;
use classgraph::{build_graph, diagram, scan};

#[derive(Parser)]
#[command(name = "classgraph")]
#[command(about = "Extract a class model from a source tree and draw it as PlantUML", long_about = None)]
struct Cli {
    /// Source folder to scan
    #[arg(short, long)]
    src: PathBuf,

    /// Destination folder for the generated diagram
    #[arg(short, long, default_value = ".")]
    dest: PathBuf,

    /// Name of the generated diagram file
    #[arg(short, long, default_value = "classes")]
    name: String,

    /// Focus class (full name); draws only its connected neighborhood
    #[arg(short, long)]
    class: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::default(),
    };

    let report = scan::extract_all_with(&cli.src, &config.scan);
    if report.registry.is_empty() {
        tracing::warn!(src = %cli.src.display(), "no types found, the diagram will be empty");
    }

    let nodes: Vec<&TypeNode> = match &cli.class {
        Some(focus) => {
            let graph = build_graph(&report.registry);
            graph
                .connected_component(focus)
                .with_context(|| format!("cannot draw the neighborhood of {focus}"))?
        }
        None => report.registry.iter().collect(),
    };

    let path = diagram::render(&cli.dest, &cli.name, &config.diagram.file_extension, nodes)
        .context("failed to write the diagram")?;

    println!("✓ Diagram written to {}", path.display());
    println!(
        "  {} types extracted, {} files skipped",
        report.registry.len(),
        report.failures.len()
    );
    Ok(())
}
