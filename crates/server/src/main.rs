use std::net::SocketAddr;

use config::StakingApiConfig;
use parachain_staking_api::{app, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StakingApiConfig::from_env()?;
    logging::init(&config.log)?;

    let state = AppState::new(config).await?;
    let addr: SocketAddr = format!(
        "{}:{}",
        state.config.express.bind_host, state.config.express.port
    )
    .parse()?;

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Log level: {}", state.config.log.level);
    for chain_id in state.services.chain_ids() {
        tracing::info!("Registered staking service for chain '{}'", chain_id);
    }
    if state.services.is_empty() {
        tracing::warn!(
            "No staking services registered; set {} to configure chains",
            config::CHAINS_ENV
        );
    }

    let app = app::create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
