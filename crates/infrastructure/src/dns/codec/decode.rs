use crate::dns::wire::{header as wire_header, WireCursor};
use hostd_domain::dns_name::{MAX_LABEL_LEN, MAX_NAME_WIRE_LEN};
use hostd_domain::{DecodeError, MessageHeader, Question, HEADER_LEN};

/// Smallest possible question: root name plus QTYPE and QCLASS.
const MIN_QUESTION_LEN: usize = 5;

/// Result of decoding a query datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQuery {
    pub header: MessageHeader,
    /// Accepted questions in wire order; all are A/IN.
    pub questions: Vec<Question>,
    /// Byte offset in the original buffer where the question section ends.
    pub question_end: usize,
}

impl DecodedQuery {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.name.as_str())
    }
}

/// Decodes the header and question section of a query datagram.
///
/// Fails on:
///
/// * Buffer shorter than the 12-byte header
/// * QR bit set (a response, not a query)
/// * Any read past the end of the buffer (short label, missing terminator,
///   missing QTYPE/QCLASS)
/// * Label length byte of 64 or more (compression pointers are not followed)
/// * Label text that is not UTF-8 or contains a `.`, or a name longer
///   than 255 octets
/// * Any question whose QTYPE is not A (1) or QCLASS is not IN (1); the whole
///   message is rejected rather than partially answered
///
/// Bytes after the question section (answer, authority and additional
/// records, EDNS0 OPT) are ignored.
pub fn decode_query(buf: &[u8]) -> Result<DecodedQuery, DecodeError> {
    if buf.len() < HEADER_LEN {
        return Err(DecodeError::TooShort { len: buf.len() });
    }

    let mut cursor = WireCursor::new(buf);
    let header = wire_header::read_header(&mut cursor)?;

    if header.is_response {
        return Err(DecodeError::NotAQuery);
    }

    let capacity = usize::from(header.question_count).min(cursor.remaining() / MIN_QUESTION_LEN);
    let mut questions = Vec::with_capacity(capacity);

    for _ in 0..header.question_count {
        let name = read_name(&mut cursor)?;
        let qtype = cursor.read_u16()?;
        let qclass = cursor.read_u16()?;

        let question = Question::new(name, qtype, qclass);
        if !question.is_a_in() {
            return Err(DecodeError::UnsupportedQuestion { qtype, qclass });
        }
        questions.push(question);
    }

    Ok(DecodedQuery {
        header,
        questions,
        question_end: cursor.position(),
    })
}

/// Reads a sequence of length-prefixed labels up to and including the zero
/// terminator and joins them with `.`.
pub fn read_name(cursor: &mut WireCursor<'_>) -> Result<String, DecodeError> {
    let start = cursor.position();
    let mut name = String::new();
    let mut wire_len = 0usize;

    loop {
        let offset = cursor.position();
        let len = cursor.read_u8()?;
        wire_len += 1;

        if len == 0 {
            break;
        }
        if usize::from(len) > MAX_LABEL_LEN {
            return Err(DecodeError::UnsupportedLabel { offset, value: len });
        }

        wire_len += usize::from(len);
        // Leave room for the terminator.
        if wire_len + 1 > MAX_NAME_WIRE_LEN {
            return Err(DecodeError::NameTooLong { offset: start });
        }

        let label = cursor.read_bytes(usize::from(len))?;
        let text = std::str::from_utf8(label)
            .ok()
            .filter(|text| !text.contains('.'))
            .ok_or(DecodeError::InvalidLabelText { offset })?;

        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(text);
    }

    Ok(name)
}
