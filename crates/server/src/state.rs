use std::sync::Arc;

use config::{AddressFormat, StakingApiConfig};
use sp_core::crypto::AccountId32;

use crate::middleware::cache::ResponseCache;
use crate::routes::RouteRegistry;
use crate::services::{
    AccountId20, ServiceRegistry, StakingService, SubstrateStakingService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: StakingApiConfig,
    pub services: ServiceRegistry,
    pub route_registry: RouteRegistry,
    pub response_cache: ResponseCache,
}

impl AppState {
    /// Build the state and connect a staking service for every configured
    /// chain. Chains whose node is unreachable are skipped with a warning so
    /// one bad endpoint does not take the whole API down.
    pub async fn new(config: StakingApiConfig) -> anyhow::Result<Self> {
        let mut builder = ServiceRegistry::builder();

        for (chain_id, entry) in config.chains.iter() {
            let service: Result<Arc<dyn StakingService>, subxt_rpcs::Error> =
                match entry.address_format {
                    AddressFormat::Ethereum => {
                        SubstrateStakingService::<AccountId20>::connect(chain_id, entry)
                            .await
                            .map(|s| Arc::new(s) as Arc<dyn StakingService>)
                    }
                    AddressFormat::Substrate => {
                        SubstrateStakingService::<AccountId32>::connect(chain_id, entry)
                            .await
                            .map(|s| Arc::new(s) as Arc<dyn StakingService>)
                    }
                };

            match service {
                Ok(service) => {
                    tracing::info!("Connected to '{}' at {}", chain_id, entry.url);
                    builder = builder.register(service);
                }
                Err(err) => {
                    tracing::warn!(
                        "Skipping chain '{}': failed to connect to {}: {}",
                        chain_id,
                        entry.url,
                        err
                    );
                }
            }
        }

        Ok(Self::with_services(config, builder.build()))
    }

    /// Build the state around an existing registry. Used by tests and by
    /// embedders wiring their own service implementations.
    pub fn with_services(config: StakingApiConfig, services: ServiceRegistry) -> Self {
        Self {
            config,
            services,
            route_registry: RouteRegistry::new(),
            response_cache: ResponseCache::default(),
        }
    }
}
