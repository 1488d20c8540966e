use axum::{Json, extract::State};

use super::{StakingApiError, resolve_service};
use crate::extractors::JsonQuery;
use crate::state::AppState;
use crate::types::{RoundInfoResponse, StakingQueryParams};

/// Handler for GET /parachain/staking/getLatestBlockNumber
#[utoipa::path(
    get,
    path = "/parachain/staking/getLatestBlockNumber",
    tag = "staking-analysis",
    summary = "Latest block number",
    params(StakingQueryParams),
    responses(
        (status = 200, description = "Best block number known to the chain", body = u64),
        (status = 400, description = "Unsupported chain network")
    )
)]
pub async fn get_latest_block_number(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<StakingQueryParams>,
) -> Result<Json<u64>, StakingApiError> {
    let service = resolve_service(&state, &params.chain_id)?;
    Ok(Json(service.latest_block_number().await?))
}

/// Handler for GET /parachain/staking/getCurrentRoundInfo
///
/// Returns the current round index, its first block and its length.
#[utoipa::path(
    get,
    path = "/parachain/staking/getCurrentRoundInfo",
    tag = "staking-analysis",
    summary = "Current round info",
    params(StakingQueryParams),
    responses(
        (status = 200, description = "Current staking round", body = RoundInfoResponse),
        (status = 400, description = "Unsupported chain network")
    )
)]
pub async fn get_current_round_info(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<StakingQueryParams>,
) -> Result<Json<RoundInfoResponse>, StakingApiError> {
    let service = resolve_service(&state, &params.chain_id)?;
    Ok(Json(service.current_round_info().await?))
}
