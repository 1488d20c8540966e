pub mod cache;

pub use cache::{cache_middleware, ResponseCache};
