//! HelpHive server binary.
//!
//! Loads configuration, connects to PostgreSQL, and serves the HTTP API
//! until Ctrl-C.

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use helphive::adapters::auth::JwtSessionCodec;
use helphive::adapters::http::{app_router, AppServices, RouterConfig};
use helphive::adapters::postgres::{
    self, DatabaseSetupError, PostgresPostRepository, PostgresVolunteerRequestRepository,
};
use helphive::config::{AppConfig, ConfigError, ValidationError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("database setup failed: {0}")]
    Database(#[from] DatabaseSetupError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_logging(&config);

    let pool = postgres::connect(&config.database).await?;
    if config.database.run_migrations {
        postgres::migrate(&pool, &config.database.migrations_dir).await?;
    }

    let codec = Arc::new(JwtSessionCodec::from_config(&config.auth));
    let services = AppServices {
        posts: Arc::new(PostgresPostRepository::new(pool.clone())),
        requests: Arc::new(PostgresVolunteerRequestRepository::new(pool)),
        session_validator: codec.clone(),
        session_issuer: codec,
    };
    let router = app_router(services, &RouterConfig::from_config(&config));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %addr,
        environment = ?config.server.environment,
        "HelpHive server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HelpHive server stopped");
    Ok(())
}

/// Human-readable output in development, JSON lines in production.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let fmt_layer = if config.is_production() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().compact().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
