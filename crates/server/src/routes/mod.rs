pub mod docs;
pub mod health;
pub mod metrics;
pub mod registry;
pub mod root;
pub mod staking;
pub mod version;

pub use registry::{RegisterRoute, RouteRegistry};
