use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use harborline_site::config::SiteConfig;
use harborline_site::content::ContentRegistry;
use harborline_site::sitemap::{render_xml, SitemapBuilder};
use harborline_site::web::AppState;
use harborline_site::{logging, observability, server};

#[derive(Parser)]
#[command(name = "harborline_site")]
#[command(about = "Harborline Ocean Freight marketing site")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site over HTTP
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the sitemap XML to stdout
    Sitemap {
        /// Base URL to build absolute URLs from (overrides SITE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// List the registered services
    Services,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = SiteConfig::load()?;

    match cli.command {
        Commands::Serve { port } => {
            if let Err(e) = observability::init() {
                error!("Metrics initialization failed: {}", e);
            }
            let port = port.unwrap_or(config.port);
            info!(environment = %config.environment, "Starting site");
            let state = AppState::from_config(config)?;
            server::start_server(state, port).await?;
        }
        Commands::Sitemap { base_url } => {
            let base_url = base_url.unwrap_or_else(|| config.base_url.clone());
            let entries = SitemapBuilder::new(&base_url, Utc::now()).build(ContentRegistry::global());
            print!("{}", render_xml(&entries)?);
        }
        Commands::Services => {
            for service in ContentRegistry::global().all() {
                println!("{:<20} {}", service.slug, service.title);
            }
        }
    }

    Ok(())
}
