pub mod response_parser;

pub use response_parser::{ParsedResponse, ResponseParser, WireAnswer};
