//! Professor service entry point: load config, ensure the table exists, serve HTTP.

use professor_service::{app, AppState, Config, PgProfessorStore, ProfessorStore};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("professor_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        host = %config.database.host,
        database = %config.database.name,
        wire_compat = config.api.wire_compat,
        "configuration loaded"
    );

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(config.database.connect_options())
        .await?;

    let store = PgProfessorStore::new(pool);
    store.initialize().await?;

    let state = AppState::new(Arc::new(store), config.api);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("professor service listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
