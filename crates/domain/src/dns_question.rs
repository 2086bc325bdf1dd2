use crate::dns_record::{CLASS_IN, TYPE_A};

/// One entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Dot-joined labels without a trailing dot; empty for the root name.
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: u16, qclass: u16) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }

    pub fn a(name: impl Into<String>) -> Self {
        Self::new(name, TYPE_A, CLASS_IN)
    }

    pub fn is_a_in(&self) -> bool {
        self.qtype == TYPE_A && self.qclass == CLASS_IN
    }
}
