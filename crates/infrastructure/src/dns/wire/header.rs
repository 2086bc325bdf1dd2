use super::cursor::WireCursor;
use hostd_domain::{DecodeError, MessageHeader, ResponseCode, HEADER_LEN};

const QR_BIT: u16 = 0x8000;
const OPCODE_MASK: u16 = 0x7800;
const OPCODE_SHIFT: u16 = 11;
const AA_BIT: u16 = 0x0400;
const TC_BIT: u16 = 0x0200;
const RD_BIT: u16 = 0x0100;
const RA_BIT: u16 = 0x0080;
const Z_MASK: u16 = 0x0070;
const Z_SHIFT: u16 = 4;
const RCODE_MASK: u16 = 0x000F;

/// Packs the logical flag fields into the second header word.
pub fn pack_flags(header: &MessageHeader) -> u16 {
    let mut flags = 0u16;
    if header.is_response {
        flags |= QR_BIT;
    }
    flags |= (u16::from(header.opcode) << OPCODE_SHIFT) & OPCODE_MASK;
    if header.authoritative {
        flags |= AA_BIT;
    }
    if header.truncated {
        flags |= TC_BIT;
    }
    if header.recursion_desired {
        flags |= RD_BIT;
    }
    if header.recursion_available {
        flags |= RA_BIT;
    }
    flags |= (u16::from(header.z) << Z_SHIFT) & Z_MASK;
    flags |= u16::from(header.response_code.to_u8()) & RCODE_MASK;
    flags
}

pub fn from_bytes(raw: &[u8; HEADER_LEN]) -> MessageHeader {
    let word = |i: usize| u16::from_be_bytes([raw[i], raw[i + 1]]);
    let flags = word(2);

    MessageHeader {
        id: word(0),
        is_response: flags & QR_BIT != 0,
        opcode: ((flags & OPCODE_MASK) >> OPCODE_SHIFT) as u8,
        authoritative: flags & AA_BIT != 0,
        truncated: flags & TC_BIT != 0,
        recursion_desired: flags & RD_BIT != 0,
        recursion_available: flags & RA_BIT != 0,
        z: ((flags & Z_MASK) >> Z_SHIFT) as u8,
        response_code: ResponseCode::from_u8((flags & RCODE_MASK) as u8),
        question_count: word(4),
        answer_count: word(6),
        authority_count: word(8),
        additional_count: word(10),
    }
}

pub fn to_bytes(header: &MessageHeader) -> [u8; HEADER_LEN] {
    let mut raw = [0u8; HEADER_LEN];
    raw[0..2].copy_from_slice(&header.id.to_be_bytes());
    raw[2..4].copy_from_slice(&pack_flags(header).to_be_bytes());
    raw[4..6].copy_from_slice(&header.question_count.to_be_bytes());
    raw[6..8].copy_from_slice(&header.answer_count.to_be_bytes());
    raw[8..10].copy_from_slice(&header.authority_count.to_be_bytes());
    raw[10..12].copy_from_slice(&header.additional_count.to_be_bytes());
    raw
}

pub fn read_header(cursor: &mut WireCursor<'_>) -> Result<MessageHeader, DecodeError> {
    let raw = cursor.read_array::<HEADER_LEN>()?;
    Ok(from_bytes(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpacks_every_flag() {
        let raw = [
            0xBE, 0xEF, // ID
            0xAF, 0xF5, // QR, opcode 5, AA, TC, RD, RA, Z=7, RCODE=5
            0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04,
        ];
        let header = from_bytes(&raw);

        assert_eq!(header.id, 0xBEEF);
        assert!(header.is_response);
        assert_eq!(header.opcode, 5);
        assert!(header.authoritative);
        assert!(header.truncated);
        assert!(header.recursion_desired);
        assert!(header.recursion_available);
        assert_eq!(header.z, 7);
        assert_eq!(header.response_code, ResponseCode::Refused);
        assert_eq!(header.question_count, 1);
        assert_eq!(header.answer_count, 2);
        assert_eq!(header.authority_count, 3);
        assert_eq!(header.additional_count, 4);
        assert_eq!(to_bytes(&header), raw);
    }

    #[test]
    fn test_plain_query_flags() {
        let header = MessageHeader::query(0x1234);
        assert_eq!(pack_flags(&header), 0x0100);
        assert_eq!(
            to_bytes(&header),
            [0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_out_of_range_fields_are_masked() {
        let mut header = MessageHeader::query(0);
        header.recursion_desired = false;
        header.opcode = 0xFF;
        header.z = 0xFF;
        assert_eq!(pack_flags(&header), 0x7870);
    }

    #[test]
    fn test_read_header_needs_twelve_bytes() {
        let mut cursor = WireCursor::new(&[0u8; 11]);
        assert!(matches!(
            read_header(&mut cursor),
            Err(DecodeError::Truncated { offset: 0, needed: 1 })
        ));
    }
}
