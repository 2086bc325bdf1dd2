use crate::dns::codec::{decode_query, encode_error_reply, encode_response};
use hostd_application::use_cases::ResolveNamesUseCase;
use hostd_domain::{AnswerRecord, DecodeError, ResponseCode};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Per-datagram protocol logic: decode, resolve, encode.
///
/// Holds no per-request state, so one handler can serve any number of
/// datagrams concurrently.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveNamesUseCase>,
    ttl: u32,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveNamesUseCase>, ttl: u32) -> Self {
        Self { use_case, ttl }
    }

    /// Turns one received datagram into the bytes to send back, or `None`
    /// when the datagram must be dropped.
    ///
    /// Datagrams with QR set are responses and get no reply, so two servers
    /// can never answer each other in a loop. Any other datagram that cannot
    /// be decoded is answered with a header-only RCODE 4 reply, and an answer
    /// section that cannot be written falls back to a header-only SERVFAIL.
    pub fn handle_datagram(&self, datagram: &[u8]) -> Option<Vec<u8>> {
        let query = match decode_query(datagram) {
            Ok(query) => query,
            Err(DecodeError::NotAQuery) => {
                debug!(len = datagram.len(), "Dropping datagram with QR set");
                return None;
            }
            Err(e) => {
                warn!(error = %e, len = datagram.len(), "Rejecting malformed query");
                return Some(encode_error_reply(datagram, e.response_code()).to_vec());
            }
        };

        debug!(
            id = query.header.id,
            questions = query.questions.len(),
            "DNS query decoded"
        );

        let answers: Vec<AnswerRecord> = self
            .use_case
            .execute(&query.questions)
            .into_iter()
            .map(|resolved| AnswerRecord::new(resolved.name, resolved.address, self.ttl))
            .collect();

        match encode_response(datagram, &query.header, query.question_end, &answers) {
            Ok(response) => {
                debug!(
                    id = query.header.id,
                    answers = answers.len(),
                    bytes = response.len(),
                    "Sending response"
                );
                Some(response)
            }
            Err(e) => {
                error!(error = %e, id = query.header.id, "Failed to encode response");
                Some(encode_error_reply(datagram, ResponseCode::ServFail).to_vec())
            }
        }
    }
}
