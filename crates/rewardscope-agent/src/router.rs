//! Axum router wiring for the debug surface.
//!
//! Exposes `/healthz` for liveness and `/metrics` rendering the in-process
//! registry.

use axum::{extract::State, routing::get, Router};

use crate::app_state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn metrics(State(app): State<AppState>) -> String {
    app.registry().render()
}
