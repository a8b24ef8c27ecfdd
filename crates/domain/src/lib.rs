//! Geoblock Domain Layer
pub mod answer;
pub mod blacklist;
pub mod config;
pub mod errors;
pub mod verdict;

pub use answer::AnswerType;
pub use blacklist::CountryBlacklist;
pub use config::{CliOverrides, Config, ConfigError, FilterConfig, LoggingConfig};
pub use errors::DomainError;
pub use verdict::{FilterVerdict, HostResult};
