use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Failed to read blacklist {0}: {1}")]
    BlacklistRead(String, String),

    #[error("Blacklist {0} contains no country codes")]
    EmptyBlacklist(String),

    #[error("Failed to open GeoIP database {0}: {1}")]
    GeoDatabase(String, String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to render answer address: {0}")]
    AddressRender(String),

    #[error("Missing required switch --{0}")]
    MissingSwitch(&'static str),

    #[error("Unknown switch: {0}")]
    UnknownSwitch(String),
}
