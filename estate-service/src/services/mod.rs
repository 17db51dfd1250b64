pub mod database;
pub mod metrics;

pub use database::{is_duplicate_key_error, MongoDb};
pub use metrics::{get_metrics, init_metrics};
