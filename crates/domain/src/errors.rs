use crate::dns_header::ResponseCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name {name:?}: {reason}")]
    InvalidDomainName { name: String, reason: &'static str },

    #[error("Duplicate domain: {0}")]
    DuplicateDomain(String),
}

/// Failure to turn a datagram into a header plus question list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Message too short: {len} bytes, header needs 12")]
    TooShort { len: usize },

    #[error("Message is a response, not a query")]
    NotAQuery,

    #[error("Message truncated at offset {offset}: {needed} more bytes required")]
    Truncated { offset: usize, needed: usize },

    #[error("Unsupported label length byte {value:#04x} at offset {offset}")]
    UnsupportedLabel { offset: usize, value: u8 },

    #[error("Label at offset {offset} is not valid UTF-8 or contains a dot")]
    InvalidLabelText { offset: usize },

    #[error("Name starting at offset {offset} exceeds 255 octets")]
    NameTooLong { offset: usize },

    #[error("Unsupported question type {qtype} class {qclass}")]
    UnsupportedQuestion { qtype: u16, qclass: u16 },
}

impl DecodeError {
    /// Every rejected query is answered with RCODE 4.
    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::NotImp
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Invalid label in name {0:?}")]
    InvalidLabel(String),

    #[error("Name {0:?} exceeds 255 octets on the wire")]
    NameTooLong(String),

    #[error("{0} answers do not fit the 16-bit answer count")]
    TooManyAnswers(usize),

    #[error("Question section end {end} lies outside the {len}-byte query")]
    QuestionOutOfBounds { end: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum HostsFileError {
    #[error("Failed to read hosts file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected `<domain> <address>`, found {fields} fields")]
    TooManyFields { line: usize, fields: usize },

    #[error("Line {line}: missing address")]
    MissingAddress { line: usize },

    #[error("Line {line}: invalid IPv4 address {value:?}")]
    InvalidAddress { line: usize, value: String },

    #[error("Line {line}: {source}")]
    InvalidDomain {
        line: usize,
        #[source]
        source: DomainError,
    },

    #[error("Line {line}: domain {domain:?} already defined on line {first_line}")]
    DuplicateDomain {
        line: usize,
        domain: String,
        first_line: usize,
    },
}

impl HostsFileError {
    pub fn line(&self) -> Option<usize> {
        match self {
            HostsFileError::Read { .. } => None,
            HostsFileError::TooManyFields { line, .. }
            | HostsFileError::MissingAddress { line }
            | HostsFileError::InvalidAddress { line, .. }
            | HostsFileError::InvalidDomain { line, .. }
            | HostsFileError::DuplicateDomain { line, .. } => Some(*line),
        }
    }
}
