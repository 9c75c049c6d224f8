//! CLI entry point for markpage

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "markpage")]
#[command(version)]
#[command(about = "A minimal static page generator for Markdown essays", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new page
    New {
        /// Title of the new page
        title: String,
    },

    /// Build static pages
    #[command(alias = "b")]
    Build {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site content
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "markpage=debug,info"
    } else {
        "markpage=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            markpage::commands::init::init_site(&target_dir)?;
            println!("Initialized empty site in {:?}", target_dir);
        }

        Commands::New { title } => {
            let site = markpage::Site::new(&base_dir)?;
            tracing::info!("Creating new page with title: {}", title);
            site.new_page(&title)?;
        }

        Commands::Build { watch } => {
            let site = markpage::Site::new(&base_dir)?;
            tracing::info!("Building static pages...");

            markpage::commands::build::run(&site)?;
            println!("Built successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                markpage::commands::build::watch(&site).await?;
            }
        }

        Commands::Serve {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = markpage::Site::new(&base_dir)?;

            // Build first
            tracing::info!("Building static pages...");
            site.build()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            markpage::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = markpage::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = markpage::Site::new(&base_dir)?;
            markpage::commands::list::run(&site)?;
        }

        Commands::Version => {
            println!("markpage version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
