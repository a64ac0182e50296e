use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use iptf_map_core::{Config, FileStorage, GraphBuilder, Storage};

#[derive(Parser)]
#[command(name = "iptf-map")]
#[command(about = "Builds the privacy pattern map graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build graph.json from the content tree
    Build,
    /// Print the default configuration
    Config,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build => build()?,
        Commands::Config => print!("{}", Config::default_config_string()),
    }

    Ok(())
}

fn build() -> color_eyre::Result<()> {
    let config = Config::load().wrap_err("Failed to load configuration")?;

    // Nothing is written unless the whole build succeeds.
    let graph = GraphBuilder::new(config.content.clone())
        .build(&config.content.root)
        .wrap_err("Graph build failed")?;

    let storage = FileStorage::with_config(&config.output);
    storage
        .save_graph(&graph)
        .wrap_err("Failed to write graph artifact")?;

    println!(
        "Graph built: {} nodes, {} edges",
        graph.meta.node_count, graph.meta.edge_count
    );
    println!("Written to: {}", storage.path().display());

    Ok(())
}
