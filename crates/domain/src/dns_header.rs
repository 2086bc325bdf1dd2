use std::fmt;

/// Size of the fixed DNS message header in octets.
pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    Unknown(u8),
}

impl ResponseCode {
    pub fn to_u8(self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => code & 0x0F,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logical view of the 12-byte message header.
///
/// The flag word is unpacked into independent fields; packing back to the
/// wire layout lives with the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub id: u16,
    /// `false` for a query, `true` for a response.
    pub is_response: bool,
    /// 4-bit operation code.
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// 3 reserved bits, echoed untouched.
    pub z: u8,
    pub response_code: ResponseCode,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl MessageHeader {
    /// A plain recursive-desired query header with a single question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            is_response: false,
            opcode: 0,
            authoritative: false,
            truncated: false,
            recursion_desired: true,
            recursion_available: false,
            z: 0,
            response_code: ResponseCode::NoError,
            question_count: 1,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
        }
    }

    /// Turns a query header into an authoritative answer header carrying
    /// `answer_count` records.
    ///
    /// ID, opcode, RD, Z and the question count are echoed. Authority and
    /// additional sections are never emitted, so their counts are zeroed.
    pub fn into_answer(mut self, answer_count: u16) -> Self {
        self.is_response = true;
        self.authoritative = true;
        self.truncated = false;
        self.recursion_available = false;
        self.response_code = ResponseCode::NoError;
        self.answer_count = answer_count;
        self.authority_count = 0;
        self.additional_count = 0;
        self
    }

    /// Turns a query header into a header-only error reply.
    pub fn into_error(mut self, code: ResponseCode) -> Self {
        self.is_response = true;
        self.response_code = code;
        self.answer_count = 0;
        self
    }
}
