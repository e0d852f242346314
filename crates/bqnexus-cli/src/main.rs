//! bqnexus CLI — filter the question bank and generate study notebooks.

use std::process;

use clap::{Parser, Subcommand};

use bqnexus_report::Format;

mod commands;

use commands::{FilterArgs, SourceArgs};

#[derive(Parser)]
#[command(
    name = "bqnexus",
    version,
    about = "Medical question bank filter and notebook generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, modules, the filtered count, and whether generation is enabled
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: Format,
    },

    /// Print the number of questions matching the filters
    Count {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the modules of a cycle in ordinal order
    Modules {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Generate a notebook from the filtered questions
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: Format,
    },

    /// Check the question bank for data problems
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Create a starter config and sample question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("bqnexus_core=info,bqnexus_sources=info")
            }),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary {
            source,
            filter,
            format,
        } => commands::summary::execute(source, filter, format).await,
        Commands::Count { source, filter } => commands::count::execute(source, filter).await,
        Commands::Modules { source, filter } => commands::modules::execute(source, filter).await,
        Commands::Generate {
            source,
            filter,
            format,
        } => commands::generate::execute(source, filter, format).await,
        Commands::Validate { source } => commands::validate::execute(source).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
