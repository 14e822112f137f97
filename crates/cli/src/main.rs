use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use newsticker_http::{AppState, create_router};
use newsticker_service::TickerService;
use newsticker_storage::SqliteStore;

#[derive(Parser)]
#[command(name = "newsticker")]
#[command(about = "Breaking-news ticker service for the StarNews platform", long_about = None)]
struct Cli {
    /// Ticker database path (defaults to the platform data dir).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print the current ticker record.
    Show,
    /// Add one entry at the front of the ticker.
    Add { text: String },
    /// Remove an entry (exact match on the stored form).
    Delete { text: String },
    /// Replace the ticker with a single entry (empty text clears it).
    Set { text: String },
    /// Enable or disable the ticker; flips when --enabled is omitted.
    Toggle {
        #[arg(long)]
        enabled: Option<bool>,
    },
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newsticker")
        .join("ticker.db")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(default_db_path);

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let store = SqliteStore::new(&db_path)?;
    let service = TickerService::new(Arc::new(store));

    match cli.command {
        Commands::Serve { port, host } => {
            let state = Arc::new(AppState { ticker_service: Arc::new(service) });
            let router = create_router(state);
            let addr = format!("{}:{}", host, port);
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Show => match service.current()? {
            Some(state) => println!("{}", serde_json::to_string_pretty(&state)?),
            None => println!("No ticker record yet"),
        },
        Commands::Add { text } => {
            let state = service.add(&text)?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        },
        Commands::Delete { text } => {
            let state = service.delete(&text)?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        },
        Commands::Set { text } => {
            let state = service.set_single(&text)?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        },
        Commands::Toggle { enabled } => {
            let enabled = service.toggle(enabled)?;
            println!("{}", serde_json::json!({ "enabled": enabled }));
        },
    }

    Ok(())
}
