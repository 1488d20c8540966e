//! View models for the staking analytics surface.

pub mod staking;

pub use staking::*;
