use super::stats::{FilterStats, FilterStatsSnapshot};
use crate::blacklist::BlacklistFileLoader;
use crate::dns::ResponseParser;
use crate::geoip::MaxMindCountryLookup;
use geoblock_application::ports::CountryLookup;
use geoblock_application::use_cases::FilterAnswersUseCase;
use geoblock_domain::{CountryBlacklist, DomainError, FilterConfig, FilterVerdict};
use std::sync::Arc;
use tracing::{debug, info};

const LONG_DESCRIPTION: &str = "\
Returns a REFUSED response when a reply contains an IP address
hosted in a country listed in a blacklist file.

Recognized switches are:
--blacklist=<file>
--geoipdb=<file>

A blacklist file lists one country code per line.
Blank lines and lines starting with # are ignored.
For example:

CA
UK

The geoipdb file is the full path to a GeoIP2 or GeoLite2
country database (.mmdb).";

/// A loaded geoblock filter.
///
/// Built once from the two switches and then shared by every call. Dropping
/// it releases the blacklist and closes the GeoIP database.
pub struct GeoBlockFilter {
    use_case: FilterAnswersUseCase,
    stats: FilterStats,
}

impl GeoBlockFilter {
    pub const DESCRIPTION: &'static str = "Block queries resolving to a set of countries";

    pub fn long_description() -> &'static str {
        LONG_DESCRIPTION
    }

    pub fn new(blacklist: CountryBlacklist, lookup: Arc<dyn CountryLookup>) -> Self {
        Self {
            use_case: FilterAnswersUseCase::new(Arc::new(blacklist), lookup),
            stats: FilterStats::new(),
        }
    }

    /// Load the blacklist and open the GeoIP database.
    ///
    /// Both switches are required; nothing is kept if either input fails.
    pub fn init(config: &FilterConfig) -> Result<Self, DomainError> {
        let blacklist_path = config.blacklist_path()?;
        let geoipdb_path = config.geoipdb_path()?;

        let blacklist = BlacklistFileLoader::load(blacklist_path)?;
        let lookup = MaxMindCountryLookup::open(geoipdb_path)?;

        info!(
            countries = blacklist.len(),
            geoipdb = %geoipdb_path,
            "Geoblock filter initialized"
        );

        Ok(Self::new(blacklist, Arc::new(lookup)))
    }

    /// Initialize from host-style plugin arguments.
    pub fn from_switches<I, S>(args: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = FilterConfig::from_switches(args)?;
        Self::init(&config)
    }

    /// Inspect one resolved reply in place.
    ///
    /// A malformed reply yields `ParseError` and is left untouched. On
    /// `Refuse` only the header response code has been rewritten.
    pub fn post_filter(&self, wire: &mut [u8]) -> FilterVerdict {
        let len = wire.len();

        let verdict = match ResponseParser::parse(wire) {
            Ok(mut response) => self.use_case.execute(&mut response),
            Err(e) => {
                debug!(error = %e, len, "Reply not inspected");
                FilterVerdict::ParseError
            }
        };

        self.stats.record(verdict);
        debug!(verdict = %verdict, len, "Post-filter finished");
        verdict
    }

    pub fn blacklist(&self) -> &CountryBlacklist {
        self.use_case.blacklist()
    }

    pub fn stats(&self) -> FilterStatsSnapshot {
        self.stats.snapshot()
    }
}

impl Drop for GeoBlockFilter {
    fn drop(&mut self) {
        let stats = self.stats.snapshot();
        debug!(
            inspected = stats.inspected,
            refused = stats.refused,
            "Geoblock filter released"
        );
    }
}
