pub mod health;
pub mod query;

pub use health::health_check;
pub use query::query_config;
