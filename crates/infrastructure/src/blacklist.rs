use geoblock_domain::{CountryBlacklist, DomainError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{error, info};

/// Loads the country blacklist from a text file, one code per line.
pub struct BlacklistFileLoader;

impl BlacklistFileLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<CountryBlacklist, DomainError> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let file = File::open(path).map_err(|e| {
            error!(path = %source, error = %e, "Failed to open blacklist");
            DomainError::BlacklistRead(source.clone(), e.to_string())
        })?;

        let blacklist = CountryBlacklist::from_reader(BufReader::new(file), &source)?;

        info!(
            path = %source,
            entries = blacklist.len(),
            "Country blacklist loaded"
        );

        Ok(blacklist)
    }
}
