//! Registry of per-chain staking services.
//!
//! Built once at startup and shared immutably across handlers.

use std::collections::HashMap;
use std::sync::Arc;

use super::StakingService;

#[derive(Default)]
pub struct ServiceRegistryBuilder {
    services: HashMap<String, Arc<dyn StakingService>>,
}

impl ServiceRegistryBuilder {
    pub fn register(mut self, service: Arc<dyn StakingService>) -> Self {
        self.services
            .insert(service.chain_id().to_string(), service);
        self
    }

    pub fn build(self) -> ServiceRegistry {
        ServiceRegistry {
            services: Arc::new(self.services),
        }
    }
}

/// Immutable map of chain identifier to staking service.
#[derive(Clone, Default)]
pub struct ServiceRegistry {
    services: Arc<HashMap<String, Arc<dyn StakingService>>>,
}

impl ServiceRegistry {
    pub fn builder() -> ServiceRegistryBuilder {
        ServiceRegistryBuilder::default()
    }

    /// Resolve the service registered for `chain_id`.
    pub fn lookup(&self, chain_id: &str) -> Option<Arc<dyn StakingService>> {
        self.services.get(chain_id).cloned()
    }

    pub fn chain_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.services.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;
    use crate::types::*;
    use async_trait::async_trait;

    struct FixedService {
        chain_id: String,
    }

    #[async_trait]
    impl StakingService for FixedService {
        fn chain_id(&self) -> &str {
            &self.chain_id
        }

        async fn latest_block_number(&self) -> Result<u64, ServiceError> {
            Ok(100)
        }

        async fn current_round_info(&self) -> Result<RoundInfoResponse, ServiceError> {
            Err(ServiceError::HistoryUnavailable)
        }

        async fn max_nominators_per_collator(&self) -> Result<u32, ServiceError> {
            Ok(300)
        }

        async fn collator_candidate_pool(&self) -> Result<Vec<CollatorBond>, ServiceError> {
            Ok(vec![])
        }

        async fn selected_collators(&self) -> Result<Vec<String>, ServiceError> {
            Ok(vec![])
        }

        async fn collator_state(
            &self,
            _request: CollatorsRequest,
        ) -> Result<Vec<CollatorState>, ServiceError> {
            Ok(vec![])
        }

        async fn max_collators_per_round(&self) -> Result<u32, ServiceError> {
            Ok(64)
        }

        async fn stake_snapshot(
            &self,
            request: StakeSnapshotRequest,
        ) -> Result<StakeSnapshotResponse, ServiceError> {
            Ok(StakeSnapshotResponse {
                round_index: request.round_index,
                total_staked: "0".to_string(),
                collators: vec![],
            })
        }

        async fn collator_produced_blocks(
            &self,
            _request: CollatorProducedBlocksRequest,
        ) -> Result<Vec<ProducedBlocksRecord>, ServiceError> {
            Ok(vec![])
        }
    }

    #[test]
    fn lookup_finds_registered_chain() {
        let registry = ServiceRegistry::builder()
            .register(Arc::new(FixedService {
                chain_id: "moonriver".to_string(),
            }))
            .build();

        assert!(registry.lookup("moonriver").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_misses_unknown_chain() {
        let registry = ServiceRegistry::builder()
            .register(Arc::new(FixedService {
                chain_id: "moonriver".to_string(),
            }))
            .build();

        assert!(registry.lookup("acala").is_none());
    }

    #[test]
    fn chain_ids_are_sorted() {
        let registry = ServiceRegistry::builder()
            .register(Arc::new(FixedService {
                chain_id: "moonriver".to_string(),
            }))
            .register(Arc::new(FixedService {
                chain_id: "calamari".to_string(),
            }))
            .build();

        assert_eq!(registry.chain_ids(), vec!["calamari", "moonriver"]);
    }

    #[tokio::test]
    async fn default_history_methods_report_unavailable() {
        let service = FixedService {
            chain_id: "moonriver".to_string(),
        };

        let result = service
            .collator_reward(CollatorRewardRequest {
                chain_id: "moonriver".to_string(),
                collator: "0xab".to_string(),
                start_round_index: 1,
                end_round_index: 2,
            })
            .await;

        assert!(matches!(result, Err(ServiceError::HistoryUnavailable)));
    }
}
