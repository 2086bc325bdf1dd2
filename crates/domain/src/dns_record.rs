use std::net::Ipv4Addr;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;

/// TTL attached to every answer, in seconds.
pub const DEFAULT_TTL: u32 = 86_400;

/// A question name paired with the address found for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    pub address: Ipv4Addr,
}

impl ResolvedName {
    pub fn new(name: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// An A/IN resource record ready to be written to the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: String,
    pub ttl: u32,
    pub address: Ipv4Addr,
}

impl AnswerRecord {
    pub fn new(name: impl Into<String>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name: name.into(),
            ttl,
            address,
        }
    }

    pub fn record_type(&self) -> u16 {
        TYPE_A
    }

    pub fn record_class(&self) -> u16 {
        CLASS_IN
    }

    /// RDLENGTH of an A record.
    pub fn rdata_len(&self) -> u16 {
        4
    }
}
