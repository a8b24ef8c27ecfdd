use geoblock_application::ports::{AnswerRecord, CountryLookup, ResponseMessage};
use geoblock_domain::{AnswerType, DomainError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_REFUSED: u8 = 5;

/// Country table keyed by address text, recording every query it serves.
#[derive(Clone, Default)]
pub struct MockCountryLookup {
    countries: Arc<HashMap<String, String>>,
    calls: Arc<AtomicUsize>,
    queried: Arc<Mutex<Vec<String>>>,
}

impl MockCountryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_countries(entries: Vec<(&str, &str)>) -> Self {
        let countries = entries
            .into_iter()
            .map(|(addr, country)| (addr.to_string(), country.to_string()))
            .collect();
        Self {
            countries: Arc::new(countries),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

impl CountryLookup for MockCountryLookup {
    fn country_of(&self, address: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queried.lock().unwrap().push(address.to_string());
        self.countries.get(address).cloned()
    }
}

#[derive(Debug, Clone)]
pub struct MockAnswer {
    answer_type: AnswerType,
    address: Result<String, DomainError>,
}

impl MockAnswer {
    pub fn a(address: &str) -> Self {
        Self {
            answer_type: AnswerType::A,
            address: Ok(address.to_string()),
        }
    }

    pub fn aaaa(address: &str) -> Self {
        Self {
            answer_type: AnswerType::AAAA,
            address: Ok(address.to_string()),
        }
    }

    pub fn cname() -> Self {
        Self {
            answer_type: AnswerType::Other(5),
            address: Err(DomainError::AddressRender("CNAME has no address".to_string())),
        }
    }

    pub fn txt() -> Self {
        Self {
            answer_type: AnswerType::Other(16),
            address: Err(DomainError::AddressRender("TXT has no address".to_string())),
        }
    }

    /// An A record whose data cannot be rendered.
    pub fn broken_a() -> Self {
        Self {
            answer_type: AnswerType::A,
            address: Err(DomainError::AddressRender("empty rdata".to_string())),
        }
    }
}

impl AnswerRecord for MockAnswer {
    fn answer_type(&self) -> AnswerType {
        self.answer_type
    }

    fn address_text(&self) -> Result<String, DomainError> {
        self.address.clone()
    }
}

#[derive(Debug, Clone)]
pub struct MockMessage {
    answers: Vec<MockAnswer>,
    rcode: u8,
}

impl MockMessage {
    pub fn new(answers: Vec<MockAnswer>) -> Self {
        Self {
            answers,
            rcode: RCODE_NOERROR,
        }
    }
}

impl ResponseMessage for MockMessage {
    type Answer = MockAnswer;

    fn answers(&self) -> &[MockAnswer] {
        &self.answers
    }

    fn response_code(&self) -> u8 {
        self.rcode
    }

    fn set_refused(&mut self) {
        self.rcode = RCODE_REFUSED;
    }
}
