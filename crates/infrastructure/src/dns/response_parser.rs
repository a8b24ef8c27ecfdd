use geoblock_application::ports::{AnswerRecord, ResponseMessage};
use geoblock_domain::{AnswerType, DomainError};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// Offset of the header byte holding RA, Z and RCODE.
const RCODE_OFFSET: usize = 3;
const RCODE_MASK: u8 = 0x0F;

/// Answer record decoded by hickory.
#[derive(Debug, Clone)]
pub struct WireAnswer(Record);

impl AnswerRecord for WireAnswer {
    fn answer_type(&self) -> AnswerType {
        AnswerType::from_code(u16::from(self.0.record_type()))
    }

    fn address_text(&self) -> Result<String, DomainError> {
        match self.0.data() {
            RData::A(a) => Ok(a.0.to_string()),
            RData::AAAA(aaaa) => Ok(aaaa.0.to_string()),
            _ => Err(DomainError::AddressRender(format!(
                "{} record for {} carries no address",
                self.0.record_type(),
                self.0.name()
            ))),
        }
    }
}

/// A reply parsed out of a host-owned buffer.
///
/// Answers are decoded copies; the response code is read from and written to
/// the original buffer, so a refusal changes exactly one header nibble.
pub struct ParsedResponse<'a> {
    wire: &'a mut [u8],
    answers: Vec<WireAnswer>,
}

impl ParsedResponse<'_> {
    pub fn id(&self) -> u16 {
        u16::from_be_bytes([self.wire[0], self.wire[1]])
    }
}

impl ResponseMessage for ParsedResponse<'_> {
    type Answer = WireAnswer;

    fn answers(&self) -> &[WireAnswer] {
        &self.answers
    }

    fn response_code(&self) -> u8 {
        self.wire
            .get(RCODE_OFFSET)
            .map_or(0, |byte| byte & RCODE_MASK)
    }

    fn set_refused(&mut self) {
        let refused = (u16::from(ResponseCode::Refused) as u8) & RCODE_MASK;
        if let Some(byte) = self.wire.get_mut(RCODE_OFFSET) {
            *byte = (*byte & !RCODE_MASK) | refused;
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parse a wire-format reply without modifying it.
    pub fn parse(wire: &mut [u8]) -> Result<ParsedResponse<'_>, DomainError> {
        let message = Message::from_vec(wire).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let answers: Vec<WireAnswer> = message.answers().iter().cloned().map(WireAnswer).collect();
        let response = ParsedResponse { wire, answers };

        debug!(
            id = response.id(),
            rcode = Self::rcode_to_status(response.response_code()),
            answers = response.answers.len(),
            "DNS response parsed"
        );

        Ok(response)
    }

    pub fn rcode_to_status(rcode: u8) -> &'static str {
        match rcode & RCODE_MASK {
            0 => "NOERROR",
            1 => "FORMERR",
            2 => "SERVFAIL",
            3 => "NXDOMAIN",
            4 => "NOTIMP",
            5 => "REFUSED",
            _ => "UNKNOWN",
        }
    }
}
