use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bulk_issuance::auth::{generate_jwt, Claims};
use bulk_issuance::config::{self, AppConfig};
use bulk_issuance::database::{DatabaseManager, PgReportFileStore};
use bulk_issuance::state::AppState;

#[derive(Parser)]
#[command(name = "bulk-issuance")]
#[command(about = "Bulk issuance report service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Start the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides API_PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Mint a bearer token signed with JWT_SECRET")]
    Token {
        #[arg(long, help = "User id the token is issued for")]
        user_id: i64,

        #[arg(long, default_value = "developer", help = "User name carried in the claims")]
        user: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = config::config().clone();

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => serve(config, port).await,
        Command::Token { user_id, user } => {
            let claims = Claims::new(user_id, user, config.security.jwt_expiry_hours);
            println!("{}", generate_jwt(&claims, &config.security.jwt_secret)?);
            Ok(())
        }
    }
}

async fn serve(config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    tracing::info!("Starting bulk issuance report service in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is not set; every /v1 request will be rejected");
    }

    let pool = DatabaseManager::connect(&config.database)?;
    let port = port.unwrap_or(config.api.port);
    let app = bulk_issuance::app(AppState::new(PgReportFileStore::new(pool.clone()), config));

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Bulk issuance report service listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("Closed database pool");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
