//! Example consumer: a separate Rust project that uses account-service as a dependency
//! and mounts its routes under `/api/v1`.
//!
//! Run from repo root: `cargo run -p example-consumer`

use account_service::{account_routes, common_routes, telemetry, AccountStore, AppState};
use axum::Router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    telemetry::init("account_service=info,example_consumer=info");

    let store = AccountStore::new();
    let state = AppState {
        store: store.clone(),
        public_url: Some("http://127.0.0.1:3000/api/v1".into()),
    };

    let app = Router::new()
        .merge(common_routes())
        .nest("/api/v1", account_routes(state));

    let listener = TcpListener::bind("127.0.0.1:3000").await?;
    let port = listener.local_addr()?.port();
    tracing::info!("Example consumer listening on http://127.0.0.1:{}", port);
    axum::serve(listener, app).await?;
    tracing::info!(accounts = store.len()?, "example consumer stopped");
    Ok(())
}
