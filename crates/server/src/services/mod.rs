//! Per-chain staking service abstraction.
//!
//! A [`StakingService`] answers the staking analytics operations for one
//! chain. Services are registered in a [`ServiceRegistry`] keyed by chain
//! identifier; HTTP handlers resolve the service for the request's `chainId`
//! and forward the request to it unchanged.
//!
//! Realtime operations are served straight from a node by
//! [`SubstrateStakingService`]. Reward and action history operations need an
//! event indexer, which is an external backend: the trait ships default
//! bodies returning [`ServiceError::HistoryUnavailable`], and indexer-backed
//! implementations override them.

pub mod account;
pub mod registry;
pub mod storage;
pub mod substrate;

pub use account::{AccountId20, AccountParseError, ChainAccount};
pub use registry::{ServiceRegistry, ServiceRegistryBuilder};
pub use substrate::SubstrateStakingService;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::*;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("RPC request failed: {0}")]
    Rpc(#[from] subxt_rpcs::Error),

    #[error("failed to decode storage value for {0}")]
    Decode(&'static str),

    #[error("storage item {0} not found")]
    StorageMissing(&'static str),

    #[error("malformed block header: missing {0}")]
    HeaderFieldMissing(&'static str),

    #[error("collator candidate not found: {0}")]
    CollatorNotFound(String),

    #[error(transparent)]
    InvalidAccount(#[from] AccountParseError),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("history queries require an indexer backend")]
    HistoryUnavailable,
}

/// Staking analytics capability set of a single chain.
///
/// Requests passed to the history methods are forwarded verbatim from the
/// HTTP layer (the `chainId` they carry is the one the service was resolved
/// by).
#[async_trait]
pub trait StakingService: Send + Sync {
    /// Chain identifier this service is registered under.
    fn chain_id(&self) -> &str;

    /// Number of the best block known to the chain.
    async fn latest_block_number(&self) -> Result<u64, ServiceError>;

    /// Current staking round: index, first block and length.
    async fn current_round_info(&self) -> Result<RoundInfoResponse, ServiceError>;

    /// Maximum number of nominators counted for a single collator.
    async fn max_nominators_per_collator(&self) -> Result<u32, ServiceError>;

    /// All collator candidates and their total backing, in realtime.
    async fn collator_candidate_pool(&self) -> Result<Vec<CollatorBond>, ServiceError>;

    /// Collators selected to author in the current round.
    async fn selected_collators(&self) -> Result<Vec<String>, ServiceError>;

    /// Realtime candidate state for the requested collators, including top
    /// delegations.
    async fn collator_state(
        &self,
        request: CollatorsRequest,
    ) -> Result<Vec<CollatorState>, ServiceError>;

    /// Number of collators selected per round.
    async fn max_collators_per_round(&self) -> Result<u32, ServiceError>;

    /// Stake snapshot taken at the start of the given round.
    async fn stake_snapshot(
        &self,
        request: StakeSnapshotRequest,
    ) -> Result<StakeSnapshotResponse, ServiceError>;

    /// Blocks produced by a collator over a round range.
    async fn collator_produced_blocks(
        &self,
        request: CollatorProducedBlocksRequest,
    ) -> Result<Vec<ProducedBlocksRecord>, ServiceError>;

    async fn nominator_reward(
        &self,
        request: NominatorRewardRequest,
    ) -> Result<NominatorRewardResponse, ServiceError> {
        let _ = request;
        Err(ServiceError::HistoryUnavailable)
    }

    async fn collator_reward(
        &self,
        request: CollatorRewardRequest,
    ) -> Result<CollatorRewardResponse, ServiceError> {
        let _ = request;
        Err(ServiceError::HistoryUnavailable)
    }

    async fn collator_reward_statistic(
        &self,
        request: CollatorRewardStatisticRequest,
    ) -> Result<CollatorRewardStatisticResponse, ServiceError> {
        let _ = request;
        Err(ServiceError::HistoryUnavailable)
    }

    async fn delegator_reward_statistic(
        &self,
        request: DelegatorRewardStatisticRequest,
    ) -> Result<DelegatorRewardStatisticResponse, ServiceError> {
        let _ = request;
        Err(ServiceError::HistoryUnavailable)
    }

    async fn collator_total_reward(
        &self,
        request: CollatorsRequest,
    ) -> Result<Vec<CollatorTotalReward>, ServiceError> {
        let _ = request;
        Err(ServiceError::HistoryUnavailable)
    }

    async fn collator_action_history(
        &self,
        request: CollatorActionHistoryRequest,
    ) -> Result<CollatorActionHistoryResponse, ServiceError> {
        let _ = request;
        Err(ServiceError::HistoryUnavailable)
    }

    async fn collator_reward_history(
        &self,
        request: CollatorRewardHistoryRequest,
    ) -> Result<CollatorRewardHistoryResponse, ServiceError> {
        let _ = request;
        Err(ServiceError::HistoryUnavailable)
    }

    async fn delegator_action_history(
        &self,
        request: DelegatorActionHistoryRequest,
    ) -> Result<DelegatorActionHistoryResponse, ServiceError> {
        let _ = request;
        Err(ServiceError::HistoryUnavailable)
    }

    async fn delegator_reward_history(
        &self,
        request: DelegatorRewardHistoryRequest,
    ) -> Result<DelegatorRewardHistoryResponse, ServiceError> {
        let _ = request;
        Err(ServiceError::HistoryUnavailable)
    }
}
