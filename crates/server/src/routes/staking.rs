//! Routes of the staking analytics surface under `/parachain/staking`.
//!
//! The realtime routes answer straight from the backing service; the
//! analytic routes additionally sit behind the 60-second response cache.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::consts::STAKING_PREFIX;
use crate::handlers::staking::{chain, collators, history, rewards, snapshot};
use crate::middleware::cache::{ResponseCache, cache_middleware};
use crate::routes::{RegisterRoute, RouteRegistry};
use crate::state::AppState;

fn staking_path(tail: &str) -> String {
    format!("{STAKING_PREFIX}{tail}")
}

pub fn routes(registry: &RouteRegistry, cache: ResponseCache) -> Router<AppState> {
    let realtime = Router::new()
        .route_registered(
            registry,
            &staking_path("/getLatestBlockNumber"),
            "get",
            get(chain::get_latest_block_number),
        )
        .route_registered(
            registry,
            &staking_path("/getCurrentRoundInfo"),
            "get",
            get(chain::get_current_round_info),
        )
        .route_registered(
            registry,
            &staking_path("/getMaxNominatorsPerCollator"),
            "get",
            get(collators::get_max_nominators_per_collator),
        )
        .route_registered(
            registry,
            &staking_path("/getRealtimeCollatorCandidatePool"),
            "get",
            get(collators::get_realtime_collator_candidate_pool),
        )
        .route_registered(
            registry,
            &staking_path("/getSelectedCollators4CurrentRound"),
            "get",
            get(collators::get_selected_collators),
        )
        .route_registered(
            registry,
            &staking_path("/getRealtimeCollatorState"),
            "post",
            post(collators::get_realtime_collator_state),
        );

    let cached = Router::new()
        .route_registered(
            registry,
            &staking_path("/getMaxCollatorsPerRound"),
            "get",
            get(collators::get_max_collators_per_round),
        )
        .route_registered(
            registry,
            &staking_path("/getNominatorReward"),
            "post",
            post(rewards::get_nominator_reward),
        )
        .route_registered(
            registry,
            &staking_path("/getDelegatorRewardStatistic"),
            "post",
            post(rewards::get_delegator_reward_statistic),
        )
        .route_registered(
            registry,
            &staking_path("/getCollatorRewardStatistic"),
            "post",
            post(rewards::get_collator_reward_statistic),
        )
        .route_registered(
            registry,
            &staking_path("/getCollatorReward"),
            "post",
            post(rewards::get_collator_reward),
        )
        .route_registered(
            registry,
            &staking_path("/getCollatorProducedBlocks"),
            "post",
            post(rewards::get_collator_produced_blocks),
        )
        .route_registered(
            registry,
            &staking_path("/getCollatorTotalReward"),
            "post",
            post(rewards::get_collator_total_reward),
        )
        .route_registered(
            registry,
            &staking_path("/atStake"),
            "post",
            post(snapshot::at_stake),
        )
        .route_registered(
            registry,
            &staking_path("/getCollatorActionHistory"),
            "post",
            post(history::get_collator_action_history),
        )
        .route_registered(
            registry,
            &staking_path("/getCollatorRewardHistory"),
            "post",
            post(history::get_collator_reward_history),
        )
        .route_registered(
            registry,
            &staking_path("/getDelegatorActionHistory"),
            "post",
            post(history::get_delegator_action_history),
        )
        .route_registered(
            registry,
            &staking_path("/getDelegatorRewardHistory"),
            "post",
            post(history::get_delegator_reward_history),
        )
        .layer(from_fn_with_state(cache, cache_middleware));

    realtime.merge(cached)
}
