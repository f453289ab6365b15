use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::backend::{BackendFactory, WarehouseBackend};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::logging::access_log_middleware;
use crate::resource::{product, system, user};

/// Open the store handle and make sure the tables exist
pub async fn setup_backend(config: &AppConfig) -> AppResult<Arc<dyn WarehouseBackend>> {
    let backend_config = config.to_backend_config();
    tracing::info!(
        database = %backend_config.database_type,
        max_connections = backend_config.max_connections,
        "setting up storage backend"
    );

    let backend = BackendFactory::create(&backend_config).await?;
    backend.init_schema().await?;

    Ok(backend)
}

/// Build the application router around a shared store handle
pub fn build_router(backend: Arc<dyn WarehouseBackend>) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/get", get(system::get_probe))
        .route("/post", post(system::post_probe))
        .route("/health", get(system::health))
        // Static segments win over `{id}`, so these never reach the id handlers
        .route("/products/create", post(product::create_product))
        .route(
            "/products/deleteAll",
            delete(product::delete_all_products),
        )
        .route(
            "/products",
            post(product::create_product).get(product::list_products),
        )
        .route(
            "/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route("/users", post(user::create_user).get(user::list_users))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .layer(middleware::from_fn(access_log_middleware))
        .layer(CorsLayer::permissive())
        .with_state(backend)
}

/// Resolves on Ctrl-C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
