mod country_lookup;
mod response_message;

pub use country_lookup::CountryLookup;
pub use response_message::{AnswerRecord, ResponseMessage};
