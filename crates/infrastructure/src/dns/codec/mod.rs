mod decode;
mod encode;

pub use decode::{decode_query, read_name, DecodedQuery};
pub use encode::{encode_error_reply, encode_name, encode_response};
