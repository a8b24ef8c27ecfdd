use crate::ports::{AnswerRecord, CountryLookup, ResponseMessage};
use geoblock_domain::{CountryBlacklist, DomainError, FilterVerdict};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// The answer that caused a reply to be refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedAnswer {
    pub index: usize,
    pub address: String,
    pub country: String,
}

/// Refuses replies whose answers resolve to a blacklisted country.
///
/// Holds the per-filter context: the blacklist and the country lookup.
/// Both are read-only after construction and shared across calls.
pub struct FilterAnswersUseCase {
    blacklist: Arc<CountryBlacklist>,
    lookup: Arc<dyn CountryLookup>,
}

impl FilterAnswersUseCase {
    pub fn new(blacklist: Arc<CountryBlacklist>, lookup: Arc<dyn CountryLookup>) -> Self {
        Self { blacklist, lookup }
    }

    pub fn blacklist(&self) -> &CountryBlacklist {
        &self.blacklist
    }

    /// Evaluate a parsed reply.
    ///
    /// Scanning stops at the first answer whose country is blacklisted; later
    /// answers are never looked up. On a match the reply's response code is
    /// set to REFUSED and nothing else in it changes.
    pub fn execute<M: ResponseMessage>(&self, message: &mut M) -> FilterVerdict {
        if self.blacklist.is_empty() {
            return FilterVerdict::Pass;
        }

        match self.find_blocked_answer(message) {
            Ok(Some(blocked)) => {
                message.set_refused();
                warn!(
                    index = blocked.index,
                    address = %blocked.address,
                    country = %blocked.country,
                    "Answer resolves to blacklisted country, reply refused"
                );
                FilterVerdict::Refuse
            }
            Ok(None) => {
                debug!(answers = message.answers().len(), "No blacklisted answer");
                FilterVerdict::Pass
            }
            Err(e) => {
                error!(error = %e, "Aborting answer inspection");
                FilterVerdict::FatalError
            }
        }
    }

    /// Walk the answer section in wire order and return the first blacklisted hit.
    pub fn find_blocked_answer<M: ResponseMessage>(
        &self,
        message: &M,
    ) -> Result<Option<BlockedAnswer>, DomainError> {
        for (index, answer) in message.answers().iter().enumerate() {
            let answer_type = answer.answer_type();
            if !answer_type.is_address() {
                continue;
            }

            let address = answer.address_text()?;

            let Some(country) = self.lookup.country_of(&address) else {
                debug!(address = %address, "No country for address");
                continue;
            };

            if self.blacklist.contains(&country) {
                return Ok(Some(BlockedAnswer {
                    index,
                    address,
                    country,
                }));
            }

            debug!(
                address = %address,
                country = %country,
                record_type = %answer_type,
                "Answer country allowed"
            );
        }

        Ok(None)
    }
}
