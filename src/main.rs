//! CLI entry point for works-page

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "works-page")]
#[command(version)]
#[command(about = "Renders portfolio works pages from a headless WordPress CMS", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the works page server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Render one works entry to HTML
    #[command(alias = "r")]
    Render {
        /// CMS entry id
        id: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render only the works <main> region
        #[arg(long)]
        fragment: bool,
    },

    /// Print the normalized model of one works entry as JSON
    Show {
        /// CMS entry id
        id: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "works_page=debug,info"
    } else {
        "works_page=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Server { port, ip } => {
            let works = works_page::Works::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            works_page::server::start(&works, &ip, port).await?;
        }

        Commands::Render {
            id,
            output,
            fragment,
        } => {
            let works = works_page::Works::new(&base_dir)?;
            works_page::commands::render::run(&works, &id, output.as_deref(), fragment).await?;
        }

        Commands::Show { id } => {
            let works = works_page::Works::new(&base_dir)?;
            works_page::commands::show::run(&works, &id).await?;
        }

        Commands::Version => {
            println!("works-page version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
