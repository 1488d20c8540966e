pub mod middleware;
pub mod registry;

pub use middleware::metrics_middleware;
pub use registry::{gather_metrics, init};
