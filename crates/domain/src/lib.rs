//! hostd domain layer
pub mod config;
pub mod dns_header;
pub mod dns_name;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod hosts_table;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_header::{MessageHeader, ResponseCode, HEADER_LEN};
pub use dns_question::Question;
pub use dns_record::{AnswerRecord, ResolvedName, CLASS_IN, DEFAULT_TTL, TYPE_A};
pub use errors::{DecodeError, DomainError, EncodeError, HostsFileError};
pub use hosts_table::HostsTable;
