use axum::{Json, extract::State};

use super::{StakingApiError, resolve_service};
use crate::extractors::JsonBody;
use crate::state::AppState;
use crate::types::{
    CollatorActionHistoryRequest, CollatorActionHistoryResponse, CollatorRewardHistoryRequest,
    CollatorRewardHistoryResponse, DelegatorActionHistoryRequest, DelegatorActionHistoryResponse,
    DelegatorRewardHistoryRequest, DelegatorRewardHistoryResponse,
};

/// Handler for POST /parachain/staking/getCollatorActionHistory
#[utoipa::path(
    post,
    path = "/parachain/staking/getCollatorActionHistory",
    tag = "staking-analysis",
    summary = "Action history of a collator",
    request_body = CollatorActionHistoryRequest,
    responses(
        (status = 200, description = "Paged action records", body = CollatorActionHistoryResponse),
        (status = 400, description = "Unsupported chain network"),
        (status = 501, description = "No indexer backend configured")
    )
)]
pub async fn get_collator_action_history(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CollatorActionHistoryRequest>,
) -> Result<Json<CollatorActionHistoryResponse>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.collator_action_history(request).await?))
}

/// Handler for POST /parachain/staking/getCollatorRewardHistory
#[utoipa::path(
    post,
    path = "/parachain/staking/getCollatorRewardHistory",
    tag = "staking-analysis",
    summary = "Reward history of a collator",
    request_body = CollatorRewardHistoryRequest,
    responses(
        (status = 200, description = "Paged reward records", body = CollatorRewardHistoryResponse),
        (status = 400, description = "Unsupported chain network"),
        (status = 501, description = "No indexer backend configured")
    )
)]
pub async fn get_collator_reward_history(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CollatorRewardHistoryRequest>,
) -> Result<Json<CollatorRewardHistoryResponse>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.collator_reward_history(request).await?))
}

/// Handler for POST /parachain/staking/getDelegatorActionHistory
#[utoipa::path(
    post,
    path = "/parachain/staking/getDelegatorActionHistory",
    tag = "staking-analysis",
    summary = "Action history of a delegator",
    request_body = DelegatorActionHistoryRequest,
    responses(
        (status = 200, description = "Paged action records", body = DelegatorActionHistoryResponse),
        (status = 400, description = "Unsupported chain network"),
        (status = 501, description = "No indexer backend configured")
    )
)]
pub async fn get_delegator_action_history(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<DelegatorActionHistoryRequest>,
) -> Result<Json<DelegatorActionHistoryResponse>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.delegator_action_history(request).await?))
}

/// Handler for POST /parachain/staking/getDelegatorRewardHistory
#[utoipa::path(
    post,
    path = "/parachain/staking/getDelegatorRewardHistory",
    tag = "staking-analysis",
    summary = "Reward history of a delegator",
    request_body = DelegatorRewardHistoryRequest,
    responses(
        (status = 200, description = "Paged reward records", body = DelegatorRewardHistoryResponse),
        (status = 400, description = "Unsupported chain network"),
        (status = 501, description = "No indexer backend configured")
    )
)]
pub async fn get_delegator_reward_history(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<DelegatorRewardHistoryRequest>,
) -> Result<Json<DelegatorRewardHistoryResponse>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.delegator_reward_history(request).await?))
}
