use geoblock_application::ports::CountryLookup;
use geoblock_domain::DomainError;
use maxminddb::{geoip2, Reader};
use std::net::IpAddr;
use std::path::Path;
use tracing::{error, info};

/// Country lookup backed by a MaxMind GeoIP2/GeoLite2 database.
///
/// The whole database is read into memory when opened. Lookups take `&self`
/// and need no locking.
pub struct MaxMindCountryLookup {
    reader: Reader<Vec<u8>>,
}

impl MaxMindCountryLookup {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let reader = Reader::open_readfile(path).map_err(|e| {
            error!(path = %source, error = %e, "Failed to open GeoIP database");
            DomainError::GeoDatabase(source.clone(), e.to_string())
        })?;

        info!(
            path = %source,
            database_type = %reader.metadata.database_type,
            "GeoIP database loaded"
        );

        Ok(Self { reader })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, DomainError> {
        let reader = Reader::from_source(bytes)
            .map_err(|e| DomainError::GeoDatabase("<memory>".to_string(), e.to_string()))?;
        Ok(Self { reader })
    }

    fn lookup_ip(&self, ip: IpAddr) -> Option<String> {
        let record: geoip2::Country = self.reader.lookup(ip).ok()?;
        record
            .country
            .and_then(|c| c.iso_code)
            .or_else(|| record.registered_country.and_then(|c| c.iso_code))
            .map(str::to_string)
    }
}

impl CountryLookup for MaxMindCountryLookup {
    fn country_of(&self, address: &str) -> Option<String> {
        let ip: IpAddr = address.parse().ok()?;
        self.lookup_ip(ip)
    }
}
