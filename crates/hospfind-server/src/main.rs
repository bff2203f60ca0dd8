mod api;
mod middleware;

use std::sync::Arc;

use hospfind_locator::DatasetCache;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::AuthState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = hospfind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cache = Arc::new(DatasetCache::new(config.dataset_path.clone()));
    let warm = Arc::clone(&cache);
    let records = tokio::task::spawn_blocking(move || warm.get()).await?;
    if records.is_empty() {
        tracing::warn!(
            path = %config.dataset_path.display(),
            "hospital dataset is empty or unreadable; searches will fail until reloaded"
        );
    } else {
        tracing::info!(records = records.len(), "hospital dataset ready");
    }

    let auth = AuthState::from_env(matches!(
        config.env,
        hospfind_core::Environment::Development
    ))?;
    let state = AppState {
        cache,
        params: hospfind_core::SearchParams::from_app_config(&config),
    };
    let app = build_app(state, auth);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "hospfind-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
