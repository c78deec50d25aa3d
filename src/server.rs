use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::catalog::CouponCatalog;
use crate::engine::DelayConfig;
use crate::gateway::{get_cpns, get_emulated, health, post_orders};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CouponCatalog>,
    pub delay: DelayConfig,
}

impl AppState {
    pub fn new(catalog: impl CouponCatalog + 'static, delay: DelayConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            delay,
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/back/v1/cpn/orders", post(post_orders))
        .route("/api/back/v1/cpns", get(get_cpns))
        .route("/api/back/v1/emulate", get(get_emulated))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: Arc<AppState>, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
