mod helpers;

use helpers::{a_query, QueryBuilder};
use hostd_domain::{AnswerRecord, EncodeError, MessageHeader, ResponseCode, DEFAULT_TTL};
use hostd_infrastructure::dns::codec::read_name;
use hostd_infrastructure::dns::wire::WireCursor;
use hostd_infrastructure::dns::{decode_query, encode_error_reply, encode_name, encode_response};
use std::net::Ipv4Addr;

fn example_answer() -> AnswerRecord {
    AnswerRecord::new("example.com", Ipv4Addr::new(93, 184, 216, 34), DEFAULT_TTL)
}

#[test]
fn test_encode_name_layout() {
    let mut out = Vec::new();
    encode_name("example.com", &mut out).unwrap();
    assert_eq!(out, b"\x07example\x03com\x00");
}

#[test]
fn test_encode_root_name() {
    let mut out = Vec::new();
    encode_name("", &mut out).unwrap();
    assert_eq!(out, vec![0x00]);
}

#[test]
fn test_encode_name_round_trips_through_decoder() {
    for name in ["example.com", "a.b.c.d.e", "x", "MiXeD.Case.Org", ""] {
        let mut out = Vec::new();
        encode_name(name, &mut out).unwrap();

        let mut cursor = WireCursor::new(&out);
        assert_eq!(read_name(&mut cursor).unwrap(), name);
        assert_eq!(cursor.remaining(), 0);
    }
}

#[test]
fn test_encode_name_rejects_bad_labels_without_writing() {
    let mut out = vec![0xAA];
    let too_long = "a".repeat(64);

    assert_eq!(
        encode_name("example..com", &mut out),
        Err(EncodeError::InvalidLabel("example..com".to_string()))
    );
    assert!(matches!(
        encode_name(&too_long, &mut out),
        Err(EncodeError::InvalidLabel(_))
    ));
    assert_eq!(out, vec![0xAA]);
}

#[test]
fn test_encode_name_rejects_long_names() {
    let label = "a".repeat(63);
    let name = [label.as_str(); 4].join(".");
    let mut out = Vec::new();

    assert!(matches!(
        encode_name(&name, &mut out),
        Err(EncodeError::NameTooLong(_))
    ));
}

#[test]
fn test_encode_response_single_answer() {
    let query_buf = a_query("example.com");
    let query = decode_query(&query_buf).unwrap();

    let response =
        encode_response(&query_buf, &query.header, query.question_end, &[example_answer()])
            .unwrap();

    let mut expected = vec![
        0x12, 0x34, // ID echoed
        0x85, 0x00, // QR, AA, RD; RA clear; RCODE 0
        0x00, 0x01, // QDCOUNT = 1
        0x00, 0x01, // ANCOUNT = 1
        0x00, 0x00, // NSCOUNT = 0
        0x00, 0x00, // ARCOUNT = 0
    ];
    expected.extend_from_slice(&query_buf[12..]);
    expected.extend_from_slice(b"\x07example\x03com\x00");
    expected.extend_from_slice(&[
        0x00, 0x01, // TYPE = A
        0x00, 0x01, // CLASS = IN
        0x00, 0x01, 0x51, 0x80, // TTL = 86400
        0x00, 0x04, // RDLENGTH = 4
        0x5D, 0xB8, 0xD8, 0x22, // 93.184.216.34
    ]);

    assert_eq!(response, expected);
}

#[test]
fn test_encode_response_without_answers() {
    let query_buf = a_query("missing.test");
    let query = decode_query(&query_buf).unwrap();

    let response = encode_response(&query_buf, &query.header, query.question_end, &[]).unwrap();

    assert_eq!(response.len(), query_buf.len());
    assert_eq!(&response[6..8], &[0x00, 0x00]);
    assert_eq!(response[3] & 0x0F, 0);
    assert_eq!(response[2] & 0x80, 0x80);
    assert_eq!(&response[12..], &query_buf[12..]);
}

#[test]
fn test_encode_response_writes_each_name_in_full() {
    let query_buf = QueryBuilder::new().question("one.test").question("two.test").build();
    let query = decode_query(&query_buf).unwrap();
    let answers = [
        AnswerRecord::new("one.test", Ipv4Addr::new(10, 0, 0, 1), DEFAULT_TTL),
        AnswerRecord::new("two.test", Ipv4Addr::new(10, 0, 0, 2), DEFAULT_TTL),
    ];

    let response =
        encode_response(&query_buf, &query.header, query.question_end, &answers).unwrap();

    assert_eq!(&response[6..8], &[0x00, 0x02]);

    let mut cursor = WireCursor::new(&response);
    cursor.read_bytes(query.question_end).unwrap();
    for answer in &answers {
        assert_eq!(read_name(&mut cursor).unwrap(), answer.name);
        assert_eq!(cursor.read_u16().unwrap(), 1);
        assert_eq!(cursor.read_u16().unwrap(), 1);
        assert_eq!(cursor.read_bytes(4).unwrap(), &DEFAULT_TTL.to_be_bytes());
        assert_eq!(cursor.read_u16().unwrap(), 4);
        assert_eq!(cursor.read_bytes(4).unwrap(), &answer.address.octets());
    }
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn test_encode_response_drops_additional_section() {
    let query_buf = QueryBuilder::new()
        .question("example.com")
        .with_opt_record()
        .build();
    let query = decode_query(&query_buf).unwrap();

    let response =
        encode_response(&query_buf, &query.header, query.question_end, &[example_answer()])
            .unwrap();

    assert_eq!(&response[10..12], &[0x00, 0x00]);
    assert_eq!(&response[12..query.question_end], &query_buf[12..query.question_end]);
    assert_eq!(response.len(), query.question_end + 13 + 14);
}

#[test]
fn test_encode_response_clears_tc_ra_and_rcode() {
    let query_buf = QueryBuilder::new()
        .flags(0x0380) // TC, RD, RA set on the query
        .question("example.com")
        .build();
    let query = decode_query(&query_buf).unwrap();

    let response = encode_response(&query_buf, &query.header, query.question_end, &[]).unwrap();

    assert_eq!(&response[2..4], &[0x85, 0x00]);
}

#[test]
fn test_encode_response_uses_configured_ttl() {
    let query_buf = a_query("example.com");
    let query = decode_query(&query_buf).unwrap();
    let answer = AnswerRecord::new("example.com", Ipv4Addr::new(1, 2, 3, 4), 300);

    let response =
        encode_response(&query_buf, &query.header, query.question_end, &[answer]).unwrap();

    let ttl_at = response.len() - 10;
    assert_eq!(&response[ttl_at..ttl_at + 4], &300u32.to_be_bytes());
}

#[test]
fn test_encode_response_rejects_question_end_out_of_bounds() {
    let query_buf = a_query("example.com");
    let header = MessageHeader::query(0x1234);

    assert_eq!(
        encode_response(&query_buf, &header, query_buf.len() + 1, &[]),
        Err(EncodeError::QuestionOutOfBounds {
            end: query_buf.len() + 1,
            len: query_buf.len()
        })
    );
    assert!(encode_response(&query_buf, &header, 4, &[]).is_err());
}

#[test]
fn test_error_reply_echoes_header() {
    let query_buf = QueryBuilder::new()
        .id(0xBEEF)
        .typed_question("example.com", 28, 1)
        .build();

    let reply = encode_error_reply(&query_buf, ResponseCode::NotImp);

    assert_eq!(
        reply,
        [
            0xBE, 0xEF, // ID echoed
            0x81, 0x04, // QR, RD; RCODE = 4
            0x00, 0x01, // QDCOUNT echoed
            0x00, 0x00, // ANCOUNT = 0
            0x00, 0x00, 0x00, 0x00,
        ]
    );
}

#[test]
fn test_error_reply_zero_fills_short_datagrams() {
    assert_eq!(
        encode_error_reply(&[0x12, 0x34, 0x01], ResponseCode::NotImp),
        [0x12, 0x34, 0x81, 0x04, 0, 0, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(
        encode_error_reply(&[], ResponseCode::NotImp),
        [0, 0, 0x80, 0x04, 0, 0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn test_error_reply_zeroes_answer_count_and_replaces_rcode() {
    let query_buf = QueryBuilder::new()
        .flags(0x0103) // RD, RCODE = 3 on the query
        .answer_count(2)
        .question("example.com")
        .build();

    let reply = encode_error_reply(&query_buf, ResponseCode::ServFail);

    assert_eq!(&reply[2..4], &[0x81, 0x02]);
    assert_eq!(&reply[6..8], &[0x00, 0x00]);
}
