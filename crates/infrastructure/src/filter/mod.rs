//! Post-resolution filter entry point.
//!
//! The host hands every resolved reply to [`GeoBlockFilter::post_filter`],
//! which parses it, inspects the answers and reports a verdict.

mod geoblock_filter;
mod stats;

pub use geoblock_filter::GeoBlockFilter;
pub use stats::{FilterStats, FilterStatsSnapshot};
