use axum::{Json, extract::State};

use super::{StakingApiError, resolve_service};
use crate::extractors::{JsonBody, JsonQuery};
use crate::state::AppState;
use crate::types::{CollatorBond, CollatorState, CollatorsRequest, StakingQueryParams};

/// Handler for GET /parachain/staking/getMaxNominatorsPerCollator
#[utoipa::path(
    get,
    path = "/parachain/staking/getMaxNominatorsPerCollator",
    tag = "staking-analysis",
    summary = "Max nominators counted per collator",
    params(StakingQueryParams),
    responses(
        (status = 200, description = "Nominator cap per collator", body = u32),
        (status = 400, description = "Unsupported chain network")
    )
)]
pub async fn get_max_nominators_per_collator(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<StakingQueryParams>,
) -> Result<Json<u32>, StakingApiError> {
    let service = resolve_service(&state, &params.chain_id)?;
    Ok(Json(service.max_nominators_per_collator().await?))
}

/// Handler for GET /parachain/staking/getRealtimeCollatorCandidatePool
///
/// All collator candidates and their total backing, read live from the node.
#[utoipa::path(
    get,
    path = "/parachain/staking/getRealtimeCollatorCandidatePool",
    tag = "staking-analysis",
    summary = "Realtime collator candidate pool",
    params(StakingQueryParams),
    responses(
        (status = 200, description = "Candidate pool", body = [CollatorBond]),
        (status = 400, description = "Unsupported chain network")
    )
)]
pub async fn get_realtime_collator_candidate_pool(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<StakingQueryParams>,
) -> Result<Json<Vec<CollatorBond>>, StakingApiError> {
    let service = resolve_service(&state, &params.chain_id)?;
    Ok(Json(service.collator_candidate_pool().await?))
}

/// Handler for GET /parachain/staking/getSelectedCollators4CurrentRound
#[utoipa::path(
    get,
    path = "/parachain/staking/getSelectedCollators4CurrentRound",
    tag = "staking-analysis",
    summary = "Collators selected for the current round",
    params(StakingQueryParams),
    responses(
        (status = 200, description = "Selected collator accounts", body = [String]),
        (status = 400, description = "Unsupported chain network")
    )
)]
pub async fn get_selected_collators(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<StakingQueryParams>,
) -> Result<Json<Vec<String>>, StakingApiError> {
    let service = resolve_service(&state, &params.chain_id)?;
    Ok(Json(service.selected_collators().await?))
}

/// Handler for POST /parachain/staking/getRealtimeCollatorState
///
/// Candidate metadata and top delegations for the requested collators.
#[utoipa::path(
    post,
    path = "/parachain/staking/getRealtimeCollatorState",
    tag = "staking-analysis",
    summary = "Realtime collator and nominator state",
    request_body = CollatorsRequest,
    responses(
        (status = 200, description = "Collator states", body = [CollatorState]),
        (status = 400, description = "Unsupported chain network or invalid account"),
        (status = 404, description = "Collator candidate not found")
    )
)]
pub async fn get_realtime_collator_state(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CollatorsRequest>,
) -> Result<Json<Vec<CollatorState>>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.collator_state(request).await?))
}

/// Handler for GET /parachain/staking/getMaxCollatorsPerRound
#[utoipa::path(
    get,
    path = "/parachain/staking/getMaxCollatorsPerRound",
    tag = "staking-analysis",
    summary = "Collators selected per round",
    params(StakingQueryParams),
    responses(
        (status = 200, description = "Collator cap per round", body = u32),
        (status = 400, description = "Unsupported chain network")
    )
)]
pub async fn get_max_collators_per_round(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<StakingQueryParams>,
) -> Result<Json<u32>, StakingApiError> {
    let service = resolve_service(&state, &params.chain_id)?;
    Ok(Json(service.max_collators_per_round().await?))
}
