#![allow(dead_code)]

mod mock_ports;

pub use mock_ports::{MockAnswer, MockCountryLookup, MockMessage, RCODE_NOERROR, RCODE_REFUSED};
