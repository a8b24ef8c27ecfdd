#![allow(dead_code)]

mod builders;
mod mock_lookup;

pub use builders::ReplyBuilder;
pub use mock_lookup::StaticCountryLookup;
