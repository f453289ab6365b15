use clap::Parser;
use std::path::Path;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use warehouse_backend::config::{AppConfig, EnvConfig};
use warehouse_backend::startup::{build_router, setup_backend, shutdown_signal};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(name = "warehouse-backend")]
#[command(about = "Warehouse inventory HTTP backend")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Port to listen on (overrides config file and environment)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file and environment)
    #[arg(long)]
    host: Option<String>,
}

fn load_config(args: &Args) -> Result<AppConfig, String> {
    let mut config = if args.config == DEFAULT_CONFIG_PATH && !Path::new(DEFAULT_CONFIG_PATH).exists()
    {
        tracing::info!("no config.yaml found, using defaults");
        AppConfig::default_config()
    } else {
        AppConfig::load_from_file(&args.config)?
    };

    config.apply_env(&EnvConfig::from_env())?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // A missing .env is fine; variables may come from the real environment
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warehouse_backend=info,access_log=info")),
        )
        .init();

    if dotenv_loaded {
        tracing::debug!("loaded environment from .env");
    }

    let app_config =
        load_config(&args).map_err(|e| format!("Failed to load configuration: {}", e))?;

    let backend = setup_backend(&app_config).await.map_err(|e| {
        tracing::error!("Failed to open store: {}", e);
        e
    })?;

    let app = build_router(backend.clone());

    let addr = app_config.bind_address();
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    tracing::info!(
        "Warehouse backend listening on {} ({} storage)",
        addr,
        app_config.database.db_type
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    backend.cleanup().await?;
    tracing::info!("server stopped");

    Ok(())
}
