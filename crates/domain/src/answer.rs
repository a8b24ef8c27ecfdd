use std::fmt;

const TYPE_A: u16 = 1;
const TYPE_AAAA: u16 = 28;

/// Record type of an answer, as far as the filter cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerType {
    A,
    AAAA,
    Other(u16),
}

impl AnswerType {
    pub fn from_code(code: u16) -> Self {
        match code {
            TYPE_A => AnswerType::A,
            TYPE_AAAA => AnswerType::AAAA,
            other => AnswerType::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            AnswerType::A => TYPE_A,
            AnswerType::AAAA => TYPE_AAAA,
            AnswerType::Other(code) => *code,
        }
    }

    /// Host-address records are the only ones geolocated.
    pub fn is_address(&self) -> bool {
        matches!(self, AnswerType::A | AnswerType::AAAA)
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerType::A => f.write_str("A"),
            AnswerType::AAAA => f.write_str("AAAA"),
            AnswerType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(AnswerType::from_code(1), AnswerType::A);
        assert_eq!(AnswerType::from_code(28), AnswerType::AAAA);
        assert_eq!(AnswerType::from_code(5), AnswerType::Other(5));
    }

    #[test]
    fn test_only_a_and_aaaa_are_addresses() {
        assert!(AnswerType::A.is_address());
        assert!(AnswerType::AAAA.is_address());
        assert!(!AnswerType::Other(5).is_address());
        assert!(!AnswerType::Other(33).is_address());
    }

    #[test]
    fn test_display() {
        assert_eq!(AnswerType::AAAA.to_string(), "AAAA");
        assert_eq!(AnswerType::Other(16).to_string(), "TYPE16");
        assert_eq!(AnswerType::Other(16).code(), 16);
    }
}
