use crate::errors::DomainError;
use std::io::BufRead;

/// Country codes that cause a reply to be refused.
///
/// Entries keep the spelling they had in the source file; matching is
/// ASCII case-insensitive, so `ca` in the file blocks a lookup returning `CA`.
/// A blacklist is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryBlacklist {
    entries: Vec<String>,
}

impl CountryBlacklist {
    pub fn new(entries: Vec<String>) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::EmptyBlacklist("<inline>".to_string()));
        }
        Ok(Self { entries })
    }

    /// Parse a line-oriented blacklist.
    ///
    /// Blank lines and lines starting with `#` are skipped. A read error
    /// anywhere in the stream discards everything collected so far.
    pub fn from_reader<R: BufRead>(reader: R, source: &str) -> Result<Self, DomainError> {
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line =
                line.map_err(|e| DomainError::BlacklistRead(source.to_string(), e.to_string()))?;
            let line = line.trim_end_matches(['\n', '\r']).trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            entries.push(line.to_string());
        }

        if entries.is_empty() {
            return Err(DomainError::EmptyBlacklist(source.to_string()));
        }

        Ok(Self { entries })
    }

    /// Returns the first entry equal to `country`, ignoring ASCII case.
    pub fn find(&self, country: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.eq_ignore_ascii_case(country))
            .map(String::as_str)
    }

    pub fn contains(&self, country: &str) -> bool {
        self.find(country).is_some()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
