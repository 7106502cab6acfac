//! Domain layer for Wayfinder
//!
//! Contains the core value objects shared by the integration crates and the
//! CLI. This layer has no knowledge of any remote service.

pub mod value_objects;

pub use value_objects::*;
