use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use url::Url;

use cms_client::config::{load_config, ClientConfig};
use cms_client::observability::logging::init_logging;
use cms_client::resources::{AuthApi, ContentApi, LinksApi, NewsApi, NoticesApi, StatsApi};
use cms_client::session::LogOnlyRedirect;
use cms_client::{ApiClient, Session};

#[derive(Parser)]
#[command(name = "cms-cli")]
#[command(about = "Poke the CMS backend through the resilient client", long_about = None)]
struct Cli {
    /// Base URL of the backend (overrides config).
    #[arg(short, long)]
    url: Option<String>,

    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List published news articles
    News,
    /// List site notices
    Notices,
    /// List useful links
    Links,
    /// Fetch a content page by slug
    Content { slug: String },
    /// Show the view-statistics overview (requires login)
    Stats,
    /// Log in and store the token for subsequent commands
    Login { email: String, password: String },
    /// Clear the stored identity
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig {
            base_url: "http://localhost:8080".to_string(),
            login_origin: "http://localhost:8080/login".to_string(),
            ..Default::default()
        },
    };
    if let Some(url) = &cli.url {
        config.base_url = url.clone();
    }
    if config.session.persistence_path.is_none() {
        // Without a durable bin, `login` would be pointless across runs.
        config.session.persistence_path = Some(".cms-session.json".to_string());
    }

    init_logging(&config.observability.log_filter);

    let login_origin = Url::parse(&config.login_origin)?;
    let session = Session::from_config(&config.session, Arc::new(LogOnlyRedirect), login_origin)?;
    let client = ApiClient::authenticated(&config, session)?;

    match cli.command {
        Commands::News => {
            for article in NewsApi::new(client).list().await? {
                println!("#{:<5} {}", article.id, article.title);
            }
        }
        Commands::Notices => {
            for notice in NoticesApi::new(client).list().await? {
                println!("#{:<5} {}", notice.id, notice.title);
            }
        }
        Commands::Links => {
            for link in LinksApi::new(client).list().await? {
                println!("{:<30} {}", link.title, link.url);
            }
        }
        Commands::Content { slug } => {
            let page = ContentApi::new(client).get(&slug).await?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Commands::Stats => {
            let overview = StatsApi::new(client).overview().await?;
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
        Commands::Login { email, password } => {
            let response = AuthApi::new(client).login(&email, &password).await?;
            println!("Logged in as {}", response.user["name"].as_str().unwrap_or(&email));
        }
        Commands::Logout => {
            AuthApi::new(client).logout();
            println!("Logged out");
        }
    }

    Ok(())
}
