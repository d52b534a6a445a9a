//! Application layer - Use cases and orchestration
//!
//! Contains the screen controllers, the location request flow and the port
//! definitions the controllers talk to. Network adapters, the map SDK and the
//! device location provider live behind those ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
