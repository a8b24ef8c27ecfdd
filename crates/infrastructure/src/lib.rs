//! Geoblock Infrastructure Layer
pub mod blacklist;
pub mod dns;
pub mod filter;
pub mod geoip;

pub use blacklist::BlacklistFileLoader;
pub use filter::{FilterStats, FilterStatsSnapshot, GeoBlockFilter};
pub use geoip::MaxMindCountryLookup;
