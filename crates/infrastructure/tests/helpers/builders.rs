use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Builds wire-format DNS replies for filter tests.
pub struct ReplyBuilder {
    name: Name,
    query_type: RecordType,
    rcode: ResponseCode,
    answers: Vec<Record>,
}

impl ReplyBuilder {
    pub fn new(domain: &str) -> Self {
        Self {
            name: Name::from_str(&format!("{}.", domain)).unwrap(),
            query_type: RecordType::A,
            rcode: ResponseCode::NoError,
            answers: vec![],
        }
    }

    pub fn query_type(mut self, query_type: RecordType) -> Self {
        self.query_type = query_type;
        self
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn a(mut self, ip: &str) -> Self {
        let ip = Ipv4Addr::from_str(ip).unwrap();
        self.answers
            .push(Record::from_rdata(self.name.clone(), 300, RData::A(A(ip))));
        self
    }

    pub fn aaaa(mut self, ip: &str) -> Self {
        let ip = Ipv6Addr::from_str(ip).unwrap();
        self.answers
            .push(Record::from_rdata(self.name.clone(), 300, RData::AAAA(AAAA(ip))));
        self
    }

    pub fn cname(mut self, target: &str) -> Self {
        let target = Name::from_str(&format!("{}.", target)).unwrap();
        self.answers.push(Record::from_rdata(
            self.name.clone(),
            300,
            RData::CNAME(CNAME(target)),
        ));
        self
    }

    pub fn txt(mut self, text: &str) -> Self {
        self.answers.push(Record::from_rdata(
            self.name.clone(),
            300,
            RData::TXT(TXT::new(vec![text.to_string()])),
        ));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut query = Query::new();
        query.set_name(self.name.clone());
        query.set_query_type(self.query_type);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(0xBEEF, MessageType::Response, OpCode::Query);
        message.set_recursion_desired(true);
        message.set_recursion_available(true);
        message.set_response_code(self.rcode);
        message.add_query(query);
        for answer in self.answers {
            message.add_answer(answer);
        }

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).unwrap();
        buf
    }
}
