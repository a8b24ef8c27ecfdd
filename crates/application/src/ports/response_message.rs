use geoblock_domain::{AnswerType, DomainError};

/// One record of a reply's answer section.
pub trait AnswerRecord {
    fn answer_type(&self) -> AnswerType;

    /// Canonical text form of the record's address.
    ///
    /// Only meaningful for `A`/`AAAA` records. An error here means the
    /// parsed record is internally inconsistent.
    fn address_text(&self) -> Result<String, DomainError>;
}

/// Parsed view of a DNS reply whose response code can be rewritten in place.
pub trait ResponseMessage {
    type Answer: AnswerRecord;

    /// Answer records in wire order.
    fn answers(&self) -> &[Self::Answer];

    fn response_code(&self) -> u8;

    /// Overwrite the header response code with REFUSED.
    fn set_refused(&mut self);
}
