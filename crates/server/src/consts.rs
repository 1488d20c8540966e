use std::time::Duration;

/// Time-to-live for cached analytic route responses.
pub const ROUTE_CACHE_TTL: Duration = Duration::from_secs(60);

/// Largest accepted request body, in bytes.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Route prefix all staking routes are nested under.
pub const STAKING_PREFIX: &str = "/parachain/staking";
