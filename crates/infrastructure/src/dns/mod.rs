pub mod codec;
pub mod server;
pub mod wire;

pub use codec::{decode_query, encode_error_reply, encode_name, encode_response, DecodedQuery};
pub use server::DnsServerHandler;
