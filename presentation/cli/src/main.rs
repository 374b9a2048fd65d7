use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands {
    pub mod add;
    pub mod export;
    pub mod resolve;
    pub mod scan;
}
mod config {
    pub mod graph_config;
    pub mod lookup_config;
}
mod scanner;
mod setup {
    pub mod dependency_injection;
}
mod view;

use commands::add::AddArgs;
use config::{graph_config, lookup_config::LookupConfig};
use setup::dependency_injection::DependencyContainer;

/// Barcode Catalog Entry Point
///
/// Initializes logging, loads configuration, wires the graph store and
/// remote lookup adapters behind the business use cases, and dispatches
/// one subcommand per invocation.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(version = "0.1.0")]
#[command(about = "Barcode product catalog over a graph store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan barcodes from stdin and resolve each one
    Scan,

    /// Resolve a single barcode
    Resolve {
        /// Barcode to resolve
        barcode: String,
    },

    /// Register a product manually
    Add(AddArgs),

    /// Export the catalog to a CSV file
    Export {
        /// Output file path
        #[arg(short, long, default_value = "catalog.csv")]
        output: String,

        /// Only export products with brand, category, and manufacturer all linked
        #[arg(long)]
        complete_only: bool,
    },
}

// One interactive user, one command per invocation.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse the command line
    let cli = Cli::parse();

    // 4. Load configuration
    let graph_config = graph_config::from_env();
    let lookup_config = LookupConfig::from_env();

    // 5. Wire dependencies
    let container = DependencyContainer::new(graph_config, lookup_config);

    // 6. Dispatch
    match cli.command {
        Commands::Scan => {
            let mut scanner = scanner::LineScanner::stdin();
            commands::scan::run(&container, &mut scanner).await
        }
        Commands::Resolve { barcode } => commands::resolve::run(&container, barcode).await,
        Commands::Add(args) => commands::add::run(&container, args).await,
        Commands::Export {
            output,
            complete_only,
        } => commands::export::run(&container, &output, complete_only).await,
    }
}
