//! EcoSky CLI - command line access to the flight path engine.
//!
//! The `ecosky` binary prints sampled paths, route metrics and flight details
//! reports for coordinates given on the command line or in a JSON route file.

pub mod config;
pub mod input;

pub use config::Config;
pub use input::{load_route_set, parse_point, parse_route_set};
