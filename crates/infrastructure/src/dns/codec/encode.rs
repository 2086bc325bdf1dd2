use crate::dns::wire::header as wire_header;
use hostd_domain::dns_name::{self, MAX_LABEL_LEN, MAX_NAME_WIRE_LEN};
use hostd_domain::{AnswerRecord, EncodeError, MessageHeader, ResponseCode, HEADER_LEN};

/// TYPE, CLASS, TTL and RDLENGTH following the owner name of a record.
const RR_FIXED_LEN: usize = 10;

/// Appends `name` as length-prefixed labels followed by the root terminator.
///
/// The empty name encodes as the root (a single zero byte). Nothing is
/// written when the name is rejected.
pub fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    if !name.is_empty() {
        if name
            .split('.')
            .any(|label| label.is_empty() || label.len() > MAX_LABEL_LEN)
        {
            return Err(EncodeError::InvalidLabel(name.to_string()));
        }
        if dns_name::wire_len(name) > MAX_NAME_WIRE_LEN {
            return Err(EncodeError::NameTooLong(name.to_string()));
        }

        for label in name.split('.') {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);
    Ok(())
}

/// Builds an authoritative A/IN response for a decoded query.
///
/// The output is the response header, the request's question section copied
/// verbatim (`query[12..question_end]`), then one record per answer with the
/// name written out in full (no compression pointers).
///
/// Header changes: QR and AA set; TC, RA and RCODE cleared; ANCOUNT set to
/// `answers.len()`; NSCOUNT and ARCOUNT zeroed because nothing after the
/// question section is copied. ID, opcode, RD, Z and QDCOUNT are echoed.
pub fn encode_response(
    query: &[u8],
    header: &MessageHeader,
    question_end: usize,
    answers: &[AnswerRecord],
) -> Result<Vec<u8>, EncodeError> {
    let question = query
        .get(HEADER_LEN..question_end)
        .ok_or(EncodeError::QuestionOutOfBounds {
            end: question_end,
            len: query.len(),
        })?;
    let answer_count =
        u16::try_from(answers.len()).map_err(|_| EncodeError::TooManyAnswers(answers.len()))?;

    let answers_len: usize = answers
        .iter()
        .map(|a| dns_name::wire_len(&a.name) + RR_FIXED_LEN + usize::from(a.rdata_len()))
        .sum();

    let mut buf = Vec::with_capacity(question_end + answers_len);
    buf.extend_from_slice(&wire_header::to_bytes(&header.into_answer(answer_count)));
    buf.extend_from_slice(question);

    for answer in answers {
        encode_name(&answer.name, &mut buf)?;
        buf.extend_from_slice(&answer.record_type().to_be_bytes());
        buf.extend_from_slice(&answer.record_class().to_be_bytes());
        buf.extend_from_slice(&answer.ttl.to_be_bytes());
        buf.extend_from_slice(&answer.rdata_len().to_be_bytes());
        buf.extend_from_slice(&answer.address.octets());
    }

    Ok(buf)
}

/// Builds the 12-byte header-only reply sent when a datagram is rejected.
///
/// The request header is echoed with QR set, RCODE replaced by `code` and
/// ANCOUNT zeroed. A datagram shorter than 12 bytes is zero-filled first, so
/// the transaction ID survives whenever at least two bytes arrived.
pub fn encode_error_reply(query: &[u8], code: ResponseCode) -> [u8; HEADER_LEN] {
    let mut raw = [0u8; HEADER_LEN];
    let present = query.len().min(HEADER_LEN);
    raw[..present].copy_from_slice(&query[..present]);

    wire_header::to_bytes(&wire_header::from_bytes(&raw).into_error(code))
}
