use tracing_subscriber::{EnvFilter, fmt};

use transfer_labels::shell::config::Config;
use transfer_labels::shell::http::router;
use transfer_labels::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr;
    let app = router(AppState::in_memory(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("transfer labels: http://{}/", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
