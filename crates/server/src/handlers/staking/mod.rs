//! Handlers for the `/parachain/staking` routes.
//!
//! Every handler does the same two steps: resolve the staking service
//! registered for the request's `chainId`, then forward the request to the
//! matching service method and return its answer as JSON. Anything beyond
//! that (storage reads, indexing, aggregation) lives in the service layer.

pub mod chain;
pub mod collators;
pub mod error;
pub mod history;
pub mod rewards;
pub mod snapshot;

pub use error::StakingApiError;

use std::sync::Arc;

use crate::services::StakingService;
use crate::state::AppState;

/// Resolve the service backing `chain_id`, or fail the route with the
/// unsupported-chain error before any service call is made.
pub(crate) fn resolve_service(
    state: &AppState,
    chain_id: &str,
) -> Result<Arc<dyn StakingService>, StakingApiError> {
    state
        .services
        .lookup(chain_id)
        .ok_or_else(|| StakingApiError::UnsupportedChain(chain_id.to_string()))
}
