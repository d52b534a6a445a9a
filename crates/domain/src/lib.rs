//! Domain layer for Placemark
//!
//! Contains the place records shared by the search and map screens, the
//! address formatting rule and domain errors. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
