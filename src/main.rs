// src/main.rs
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use unity_mall::config::Config;
use unity_mall::state::AppState;
use unity_mall::uploads::UploadStore;
use unity_mall::{database, routes};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("unity_mall=info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env();

    // Create database pool
    let db_pool = match database::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, url = %config.database_url, "Error opening database");
            return;
        }
    };
    tracing::info!(url = %config.database_url, "Connected to database");

    if let Err(e) = database::init_schema(&db_pool).await {
        tracing::error!(error = %e, "Failed to initialize database schema");
        return;
    }

    let uploads = match UploadStore::new(&config.upload_dir).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, dir = %config.upload_dir.display(), "Failed to create upload directory");
            return;
        }
    };

    // Create application state
    let app = routes::create_app(AppState::new(db_pool.clone(), uploads), &config.public_dir);

    let addr = config.socket_addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            return;
        }
    };
    tracing::info!("Unity Mall API running on http://{}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    db_pool.close().await;
    tracing::info!("Database connection closed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
