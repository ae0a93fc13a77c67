mod analyze;
mod config;
mod health;

use axum::{
    routing::{get, post},
    Router,
};
use sentir::LexiconAnalyzer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::analyze::AppState;

fn app(state: AppState) -> Router {
    Router::new()
        .route("/analyze/sentiment", post(analyze::analyze_sentiment))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sentir_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    let state = AppState::new(LexiconAnalyzer::new());

    let addr = config.addr();
    tracing::info!("listening on http://{addr}");

    axum::Server::try_bind(&addr)?
        .serve(app(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
