use axum::{Json, extract::State};

use super::{StakingApiError, resolve_service};
use crate::extractors::JsonBody;
use crate::state::AppState;
use crate::types::{
    CollatorProducedBlocksRequest, CollatorRewardRequest, CollatorRewardResponse,
    CollatorRewardStatisticRequest, CollatorRewardStatisticResponse, CollatorTotalReward,
    CollatorsRequest, DelegatorRewardStatisticRequest, DelegatorRewardStatisticResponse,
    NominatorRewardRequest, NominatorRewardResponse, ProducedBlocksRecord,
};

/// Handler for POST /parachain/staking/getNominatorReward
#[utoipa::path(
    post,
    path = "/parachain/staking/getNominatorReward",
    tag = "staking-analysis",
    summary = "Nominator rewards over a round range",
    request_body = NominatorRewardRequest,
    responses(
        (status = 200, description = "Per-round rewards of the nominator", body = NominatorRewardResponse),
        (status = 400, description = "Unsupported chain network"),
        (status = 501, description = "No indexer backend configured")
    )
)]
pub async fn get_nominator_reward(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<NominatorRewardRequest>,
) -> Result<Json<NominatorRewardResponse>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.nominator_reward(request).await?))
}

/// Handler for POST /parachain/staking/getCollatorReward
#[utoipa::path(
    post,
    path = "/parachain/staking/getCollatorReward",
    tag = "staking-analysis",
    summary = "Collator rewards over a round range",
    request_body = CollatorRewardRequest,
    responses(
        (status = 200, description = "Per-round rewards of the collator", body = CollatorRewardResponse),
        (status = 400, description = "Unsupported chain network"),
        (status = 501, description = "No indexer backend configured")
    )
)]
pub async fn get_collator_reward(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CollatorRewardRequest>,
) -> Result<Json<CollatorRewardResponse>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.collator_reward(request).await?))
}

/// Handler for POST /parachain/staking/getCollatorRewardStatistic
#[utoipa::path(
    post,
    path = "/parachain/staking/getCollatorRewardStatistic",
    tag = "staking-analysis",
    summary = "Aggregate reward statistic of a collator",
    request_body = CollatorRewardStatisticRequest,
    responses(
        (status = 200, description = "Reward statistic", body = CollatorRewardStatisticResponse),
        (status = 400, description = "Unsupported chain network"),
        (status = 501, description = "No indexer backend configured")
    )
)]
pub async fn get_collator_reward_statistic(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CollatorRewardStatisticRequest>,
) -> Result<Json<CollatorRewardStatisticResponse>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.collator_reward_statistic(request).await?))
}

/// Handler for POST /parachain/staking/getDelegatorRewardStatistic
#[utoipa::path(
    post,
    path = "/parachain/staking/getDelegatorRewardStatistic",
    tag = "staking-analysis",
    summary = "Aggregate reward statistic of a delegator",
    request_body = DelegatorRewardStatisticRequest,
    responses(
        (status = 200, description = "Reward statistic", body = DelegatorRewardStatisticResponse),
        (status = 400, description = "Unsupported chain network"),
        (status = 501, description = "No indexer backend configured")
    )
)]
pub async fn get_delegator_reward_statistic(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<DelegatorRewardStatisticRequest>,
) -> Result<Json<DelegatorRewardStatisticResponse>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.delegator_reward_statistic(request).await?))
}

/// Handler for POST /parachain/staking/getCollatorTotalReward
#[utoipa::path(
    post,
    path = "/parachain/staking/getCollatorTotalReward",
    tag = "staking-analysis",
    summary = "Total rewards of the specified collators",
    request_body = CollatorsRequest,
    responses(
        (status = 200, description = "Total reward per collator", body = [CollatorTotalReward]),
        (status = 400, description = "Unsupported chain network"),
        (status = 501, description = "No indexer backend configured")
    )
)]
pub async fn get_collator_total_reward(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CollatorsRequest>,
) -> Result<Json<Vec<CollatorTotalReward>>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.collator_total_reward(request).await?))
}

/// Handler for POST /parachain/staking/getCollatorProducedBlocks
///
/// Staking points and derived block counts per round of the range.
#[utoipa::path(
    post,
    path = "/parachain/staking/getCollatorProducedBlocks",
    tag = "staking-analysis",
    summary = "Blocks produced by a collator over a round range",
    request_body = CollatorProducedBlocksRequest,
    responses(
        (status = 200, description = "Per-round production counts", body = [ProducedBlocksRecord]),
        (status = 400, description = "Unsupported chain network or invalid round range")
    )
)]
pub async fn get_collator_produced_blocks(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CollatorProducedBlocksRequest>,
) -> Result<Json<Vec<ProducedBlocksRecord>>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.collator_produced_blocks(request).await?))
}
