use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "stylebook")]
#[command(
    about = "Stylebook CLI - compare design-token styles and get recommendations",
    long_about = None
)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Browsing-history scope (user or session)
    #[arg(long, global = true)]
    scope: Option<String>,

    /// Directory of the key-value store
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CatalogArgs {
    /// JSON file with the style catalog
    #[arg(long)]
    styles: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Diff two token tree files
    Diff {
        left: PathBuf,
        right: PathBuf,
        /// Hide tokens that are the same on both sides
        #[arg(long)]
        changes_only: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compare two catalog styles (token diff and similarity)
    Compare {
        left: String,
        right: String,
        #[command(flatten)]
        catalog: CatalogArgs,
        #[arg(long)]
        json: bool,
    },
    /// Similarity score of two catalog styles
    Score {
        a: String,
        b: String,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Recommend styles based on browsing history
    Recommend {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Number of recommendations (config default when omitted)
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// View a style and record it in the browsing history
    View {
        id: String,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Show or clear the browsing history
    History {
        #[arg(long)]
        clear: bool,
    },
    /// Export a style's tokens as JSON
    Export {
        id: String,
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Export dotted paths instead of the tree
        #[arg(long)]
        flattened: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("STYLEBOOK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let context = commands::context::ContextOptions {
        config: cli.config,
        scope: cli.scope,
        data_dir: cli.data_dir,
    };

    match cli.command {
        Commands::Diff {
            left,
            right,
            changes_only,
            json,
        } => commands::diff::run(&left, &right, changes_only, json)?,
        Commands::Compare {
            left,
            right,
            catalog,
            json,
        } => commands::catalog::compare(&catalog.styles, &left, &right, json)?,
        Commands::Score { a, b, catalog } => commands::catalog::score(&catalog.styles, &a, &b)?,
        Commands::Recommend {
            catalog,
            limit,
            json,
        } => commands::catalog::recommend(&context, &catalog.styles, limit, json)?,
        Commands::View { id, catalog } => commands::catalog::view(&context, &catalog.styles, &id)?,
        Commands::History { clear } => commands::history::run(&context, clear)?,
        Commands::Export {
            id,
            catalog,
            flattened,
        } => commands::catalog::export(&context, &catalog.styles, &id, flattened)?,
    }

    Ok(())
}
