use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Parachain Staking API",
        version = "0.1.0",
        description = "REST API for parachain staking analytics: collator and nominator rewards, block production, round and stake snapshots.",
        license(name = "GPL-3.0-or-later")
    ),
    servers(
        (url = "http://localhost:8080", description = "Localhost")
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "version", description = "API version"),
        (name = "staking-analysis", description = "Parachain staking analytics, dispatched per chain"),
    ),
    paths(
        // Health & System
        crate::handlers::health::get_health::get_health,
        crate::handlers::version::get_version::get_version,
        // Realtime staking
        crate::handlers::staking::chain::get_latest_block_number,
        crate::handlers::staking::chain::get_current_round_info,
        crate::handlers::staking::collators::get_max_nominators_per_collator,
        crate::handlers::staking::collators::get_realtime_collator_candidate_pool,
        crate::handlers::staking::collators::get_selected_collators,
        crate::handlers::staking::collators::get_realtime_collator_state,
        crate::handlers::staking::collators::get_max_collators_per_round,
        // Rewards & production
        crate::handlers::staking::rewards::get_nominator_reward,
        crate::handlers::staking::rewards::get_collator_reward,
        crate::handlers::staking::rewards::get_collator_reward_statistic,
        crate::handlers::staking::rewards::get_delegator_reward_statistic,
        crate::handlers::staking::rewards::get_collator_total_reward,
        crate::handlers::staking::rewards::get_collator_produced_blocks,
        // Snapshots & histories
        crate::handlers::staking::snapshot::at_stake,
        crate::handlers::staking::history::get_collator_action_history,
        crate::handlers::staking::history::get_collator_reward_history,
        crate::handlers::staking::history::get_delegator_action_history,
        crate::handlers::staking::history::get_delegator_reward_history,
    )
)]
pub struct ApiDoc;
