pub mod health;
pub mod metrics;
pub mod staking;
pub mod version;
