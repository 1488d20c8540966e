//! Request and response shapes for the `/parachain/staking` routes.
//!
//! Every request carries a `chainId` used to resolve the backing service;
//! the rest of the request is forwarded to that service untouched. Balance
//! amounts are serialized as decimal strings since u128 does not survive a
//! JSON number.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_page_size() -> u32 {
    25
}

// ------------------------------------------------------------------------
// Requests
// ------------------------------------------------------------------------

/// Query parameters shared by the realtime GET routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StakingQueryParams {
    pub chain_id: String,
}

/// Body selecting a set of collators on one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorsRequest {
    pub chain_id: String,
    pub collators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NominatorRewardRequest {
    pub chain_id: String,
    pub nominator: String,
    pub start_round_index: u32,
    pub end_round_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorRewardRequest {
    pub chain_id: String,
    pub collator: String,
    pub start_round_index: u32,
    pub end_round_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorProducedBlocksRequest {
    pub chain_id: String,
    pub collator: String,
    pub start_round_index: u32,
    pub end_round_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StakeSnapshotRequest {
    pub chain_id: String,
    pub round_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorRewardStatisticRequest {
    pub chain_id: String,
    pub collator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorRewardStatisticRequest {
    pub chain_id: String,
    pub delegator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorActionHistoryRequest {
    pub chain_id: String,
    pub collator: String,
    #[serde(default)]
    pub page_index: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorRewardHistoryRequest {
    pub chain_id: String,
    pub collator: String,
    #[serde(default)]
    pub page_index: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorActionHistoryRequest {
    pub chain_id: String,
    pub delegator: String,
    #[serde(default)]
    pub page_index: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorRewardHistoryRequest {
    pub chain_id: String,
    pub delegator: String,
    #[serde(default)]
    pub page_index: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

// ------------------------------------------------------------------------
// Responses
// ------------------------------------------------------------------------

/// Current round of the staking pallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfoResponse {
    /// Round index
    pub current: u32,
    /// First block of the round
    pub first: String,
    /// Round length in blocks
    pub length: u32,
}

/// A collator candidate and its total backing in the candidate pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorBond {
    pub account: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorBond {
    pub account: String,
    pub amount: String,
}

/// Realtime state of a collator candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorState {
    pub account: String,
    pub self_bond: String,
    /// Self bond plus counted top delegations
    pub total_counted: String,
    pub delegation_count: u32,
    pub lowest_top_delegation_amount: String,
    /// "active", "idle" or "leaving(<round>)"
    pub status: String,
    pub top_capacity: String,
    pub bottom_capacity: String,
    pub top_delegations: Vec<DelegatorBond>,
    pub top_delegations_total: String,
}

/// Per-collator entry of a round stake snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorStakeSnapshot {
    pub account: String,
    pub self_bond: String,
    pub nominator_stake: String,
    pub total_stake: String,
    pub delegation_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StakeSnapshotResponse {
    pub round_index: u32,
    pub total_staked: String,
    pub collators: Vec<CollatorStakeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducedBlocksRecord {
    pub round_index: u32,
    /// Raw staking points awarded in the round
    pub points: u32,
    pub produced_blocks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoundRewardRecord {
    pub round_index: u32,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NominatorRoundReward {
    pub round_index: u32,
    /// Collator the reward was earned through
    pub collator: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NominatorRewardResponse {
    pub nominator: String,
    pub start_round_index: u32,
    pub end_round_index: u32,
    pub total_reward: String,
    pub rounds: Vec<NominatorRoundReward>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorRewardResponse {
    pub collator: String,
    pub start_round_index: u32,
    pub end_round_index: u32,
    pub total_reward: String,
    pub rounds: Vec<RoundRewardRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorRewardStatisticResponse {
    pub collator: String,
    pub total_reward: String,
    pub reward_count: u64,
    pub first_round_index: Option<u32>,
    pub latest_round_index: Option<u32>,
    pub average_round_reward: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorRewardStatisticResponse {
    pub delegator: String,
    pub total_reward: String,
    pub reward_count: u64,
    pub latest_round_index: Option<u32>,
    pub average_round_reward: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorTotalReward {
    pub collator: String,
    pub total_reward: String,
}

/// A bond/unbond/leave style action recorded on chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StakingActionRecord {
    pub block_number: String,
    pub extrinsic_index: Option<u32>,
    pub round_index: u32,
    pub action: String,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewardRecord {
    pub round_index: u32,
    pub block_number: String,
    pub amount: String,
    pub timestamp: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorRewardRecord {
    pub round_index: u32,
    pub block_number: String,
    /// Collator the reward was earned through
    pub collator: String,
    pub amount: String,
    pub timestamp: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorActionHistoryResponse {
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
    pub items: Vec<StakingActionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollatorRewardHistoryResponse {
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
    pub items: Vec<RewardRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorActionHistoryResponse {
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
    pub items: Vec<StakingActionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorRewardHistoryResponse {
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
    pub items: Vec<DelegatorRewardRecord>,
}
