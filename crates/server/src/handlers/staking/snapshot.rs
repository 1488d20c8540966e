use axum::{Json, extract::State};

use super::{StakingApiError, resolve_service};
use crate::extractors::JsonBody;
use crate::state::AppState;
use crate::types::{StakeSnapshotRequest, StakeSnapshotResponse};

/// Handler for POST /parachain/staking/atStake
///
/// Stake summary for the given round: collator self bonds, nominator stake
/// and totals, from the snapshot taken at round start.
#[utoipa::path(
    post,
    path = "/parachain/staking/atStake",
    tag = "staking-analysis",
    summary = "Stake snapshot of a round",
    request_body = StakeSnapshotRequest,
    responses(
        (status = 200, description = "Round stake snapshot", body = StakeSnapshotResponse),
        (status = 400, description = "Unsupported chain network")
    )
)]
pub async fn at_stake(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<StakeSnapshotRequest>,
) -> Result<Json<StakeSnapshotResponse>, StakingApiError> {
    let service = resolve_service(&state, &request.chain_id)?;
    Ok(Json(service.stake_snapshot(request).await?))
}
