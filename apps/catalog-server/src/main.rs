mod config;
mod openapi;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::Request, routing::get, ServiceExt};
use clap::{Parser, Subcommand};
use restkit::AuthState;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tower::Layer;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use catalog::config::CatalogConfig;
use catalog::domain::service::Service;
use catalog::infra::storage::migrations::Migrator;
use catalog::infra::storage::sea_orm_repo::{SeaOrmAuthorsRepository, SeaOrmBooksRepository};

use crate::config::AppConfig;

/// Book catalog REST service
#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Book catalog REST service")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_layered(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_logging(&config.log_level, cli.verbose);

    if cli.print_config {
        println!("{config:#?}");
        return Ok(());
    }
    if let Some(Commands::Check) = cli.command {
        tracing::info!("configuration OK");
        return Ok(());
    }

    run(config).await
}

fn init_logging(configured_level: &str, verbose: u8) {
    let level = match verbose {
        0 => configured_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

async fn run(config: AppConfig) -> Result<()> {
    tracing::info!("catalog server starting");

    let db = Database::connect(&config.database.url)
        .await
        .with_context(|| format!("failed to connect to {}", config.database.url))?;
    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;

    // Trailing-slash normalization has to wrap the router (a router layer
    // would run after route matching, too late to affect it).
    let app = NormalizePathLayer::trim_trailing_slash().layer(build_router(
        db,
        config.catalog.clone(),
        config.auth.tokens.clone(),
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "catalog server listening");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

fn build_router(
    db: sea_orm::DatabaseConnection,
    catalog_config: CatalogConfig,
    tokens: std::collections::HashMap<String, String>,
) -> axum::Router {
    let books = Arc::new(SeaOrmBooksRepository::new(db.clone()));
    let authors = Arc::new(SeaOrmAuthorsRepository::new(db));
    let service = Arc::new(Service::new(books, authors, catalog_config));
    let auth = Arc::new(AuthState::new(tokens));

    catalog::api::rest::routes::router(service, auth)
        .route("/healthz", get(healthz))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
