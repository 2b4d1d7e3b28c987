//! Heliocentric position engine and ASCII map renderer for the major planets.
//!
//! The library derives each planet's position on a target date from its
//! orbital elements (a first-order solution to Kepler's equation), then
//! projects the configuration onto fixed-size character grids. Keeping this
//! logic in a library crate lets the CLI and tests share it; the HTTP data
//! provider lives in its own crate and hands the core plain records.

pub mod body;
pub mod calendar;
pub mod catalog;
pub mod kepler;
pub mod render;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
