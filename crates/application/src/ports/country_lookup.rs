use std::sync::Arc;

/// Maps an IP address to the ISO country code of the network hosting it.
///
/// `None` means the database has no country for the address. Callers treat
/// that as "no match", never as a failure. Implementations are queried
/// concurrently through a shared reference.
pub trait CountryLookup: Send + Sync {
    fn country_of(&self, address: &str) -> Option<String>;
}

impl<T: CountryLookup + ?Sized> CountryLookup for Arc<T> {
    fn country_of(&self, address: &str) -> Option<String> {
        (**self).country_of(address)
    }
}
