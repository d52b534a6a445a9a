//! Logging and tracing setup

mod subscriber;

pub use subscriber::{TelemetryError, env_filter, init_tracing};
