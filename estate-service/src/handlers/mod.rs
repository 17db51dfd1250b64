pub mod app_state;
pub mod health;
pub mod metrics;
pub mod properties;
pub mod support;

pub use health::{health_check, readiness_check};
