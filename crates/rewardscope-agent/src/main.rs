//! rewardscope agent binary.
//!
//! - Loads config (strict parsing + validate)
//! - Selects the platform recorder strategy
//! - Serves the debug endpoints (`/healthz`, `/metrics`)

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use rewardscope_agent::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("rewardscope.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .agent
        .listen
        .parse()
        .expect("agent.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "rewardscope-agent starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
