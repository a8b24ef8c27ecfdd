use geoblock_application::ports::CountryLookup;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fixed address-to-country table standing in for a GeoIP database.
#[derive(Clone, Default)]
pub struct StaticCountryLookup {
    countries: Arc<HashMap<String, String>>,
    calls: Arc<AtomicUsize>,
}

impl StaticCountryLookup {
    pub fn new(entries: Vec<(&str, &str)>) -> Self {
        let countries = entries
            .into_iter()
            .map(|(addr, country)| (addr.to_string(), country.to_string()))
            .collect();
        Self {
            countries: Arc::new(countries),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CountryLookup for StaticCountryLookup {
    fn country_of(&self, address: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.countries.get(address).cloned()
    }
}
