//! Geocoding and directions integration for Wayfinder
//!
//! Resolves free-text place names to WGS84 coordinates and computes routed
//! paths between them using the [OpenRouteService](https://openrouteservice.org)
//! geocode search and directions APIs.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern: [`LocationResolver`] defines the
//! geocode and route operations, implemented by [`OrsClient`]. Coordinates
//! cross the crate boundary in (latitude, longitude) order; the provider's
//! (longitude, latitude) order is flipped in exactly one place.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_routing::{LocationResolver, OrsClient, RoutingConfig, TravelMode};
//!
//! let config = RoutingConfig {
//!     api_key: std::env::var("ORS_API_KEY")?,
//!     ..RoutingConfig::default()
//! };
//! let client = OrsClient::new(&config)?;
//!
//! let route = client.route("Toronto, ON", "Ottawa, ON", TravelMode::Car).await?;
//! println!("{}", route.summary()); // Distance by Car: 352km
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{LocationResolver, OrsClient};
pub use config::RoutingConfig;
pub use error::RoutingError;
pub use models::{Route, TravelMode, UnknownTravelMode};
