use ledger_cbor::{
    decode_def_head, decode_head, decode_int, encode_def_head, encode_indef_head, encode_int,
    is_int, peek_major, peek_major_and_minor, Arg, BigInt, CborStream, ErrorCode, ErrorKind,
    Head, Major,
};

fn int_bytes(n: impl Into<BigInt>) -> Vec<u8> {
    encode_int(&n.into())
}

fn head_err(bytes: &[u8]) -> ErrorCode {
    decode_head(&mut CborStream::new(bytes)).unwrap_err().code
}

#[test]
fn shortest_head_is_chosen() {
    assert_eq!(int_bytes(0), vec![0x00]);
    assert_eq!(int_bytes(23), vec![23]);
    assert_eq!(int_bytes(24), vec![24, 24]);
    assert_eq!(int_bytes(255), vec![0x18, 0xff]);
    assert_eq!(int_bytes(256), vec![0x19, 0x01, 0x00]);
    assert_eq!(int_bytes(1000), vec![25, 3, 232]);
    assert_eq!(int_bytes(65_535), vec![0x19, 0xff, 0xff]);
    assert_eq!(int_bytes(65_536), vec![0x1a, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(int_bytes(1_000_000), vec![0x1a, 0, 0x0f, 0x42, 0x40]);
    assert_eq!(int_bytes(u64::from(u32::MAX) + 1), vec![0x1b, 0, 0, 0, 1, 0, 0, 0, 0]);
}

#[test]
fn negative_heads_are_off_by_one() {
    assert_eq!(int_bytes(-1), vec![0x20]);
    assert_eq!(int_bytes(-24), vec![0x37]);
    assert_eq!(int_bytes(-25), vec![0x38, 0x18]);
    assert_eq!(int_bytes(-257), vec![0x39, 0x01, 0x00]);
}

#[test]
fn bignum_switches_at_64_bits() {
    let mut max = vec![0x1b];
    max.extend_from_slice(&[0xff; 8]);
    assert_eq!(int_bytes(u64::MAX), max);

    let two_pow_64 = i128::from(u64::MAX) + 1;
    assert_eq!(
        int_bytes(two_pow_64),
        vec![0xc2, 0x49, 0x01, 0, 0, 0, 0, 0, 0, 0, 0]
    );

    let mut min = vec![0x3b];
    min.extend_from_slice(&[0xff; 8]);
    assert_eq!(int_bytes(-two_pow_64), min);

    assert_eq!(
        int_bytes(-two_pow_64 - 1),
        vec![0xc3, 0x49, 0x01, 0, 0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn integers_round_trip_exactly() {
    let two_pow_64 = i128::from(u64::MAX) + 1;
    for n in [
        0,
        1,
        -1,
        1_000_000_000_000,
        -1_000_000_000_000,
        i128::from(u64::MAX),
        two_pow_64,
        -two_pow_64,
        -two_pow_64 - 1,
        i128::MAX,
        i128::MIN,
    ] {
        let bytes = int_bytes(n);
        let mut s = CborStream::new(&bytes);
        let back = decode_int(&mut s).unwrap();
        assert_eq!(i128::try_from(&back).unwrap(), n);
        assert!(s.is_at_end());
    }
}

#[test]
fn huge_bignum_round_trips() {
    let n = BigInt::from_be_bytes(true, &[0xab; 40]);
    let bytes = encode_int(&n);
    assert_eq!(decode_int(&mut CborStream::new(&bytes)).unwrap(), n);
}

#[test]
fn is_int_recognizes_bignum_tags() {
    assert!(is_int(&CborStream::new(&[0x01])).unwrap());
    assert!(is_int(&CborStream::new(&[0x20])).unwrap());
    assert!(is_int(&CborStream::new(&[0xc2, 0x41, 0x01])).unwrap());
    assert!(is_int(&CborStream::new(&[0xc3, 0x41, 0x01])).unwrap());
    assert!(!is_int(&CborStream::new(&[0xc4, 0x01])).unwrap());
    assert!(!is_int(&CborStream::new(&[0x41, 0x01])).unwrap());
    assert_eq!(
        is_int(&CborStream::new(&[])).unwrap_err().code,
        ErrorCode::UnexpectedEof
    );
}

#[test]
fn decode_int_rejects_other_items() {
    let err = decode_int(&mut CborStream::new(&[0x61, b'a'])).unwrap_err();
    assert_eq!(err.code, ErrorCode::ExpectedInteger);
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    let err = decode_int(&mut CborStream::new(&[0xc4, 0x01])).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnexpectedTag);
}

#[test]
fn head_decoding() {
    let mut s = CborStream::new(&[0x19, 0x03, 0xe8, 0x9f]);
    assert_eq!(
        decode_head(&mut s).unwrap(),
        Head {
            major: Major::Unsigned,
            arg: Arg::Value(1000)
        }
    );
    assert_eq!(
        decode_head(&mut s).unwrap(),
        Head {
            major: Major::List,
            arg: Arg::Indefinite
        }
    );
    assert!(s.is_at_end());
}

#[test]
fn malformed_heads_fail() {
    assert_eq!(head_err(&[]), ErrorCode::UnexpectedEof);
    assert_eq!(head_err(&[0x19, 0x01]), ErrorCode::UnexpectedEof);
    assert_eq!(head_err(&[0x1c]), ErrorCode::ReservedAdditionalInfo);
    assert_eq!(head_err(&[0x5e]), ErrorCode::ReservedAdditionalInfo);
    assert_eq!(head_err(&[0x1f]), ErrorCode::IndefiniteLengthForbidden);
    assert_eq!(head_err(&[0x3f]), ErrorCode::IndefiniteLengthForbidden);
    assert_eq!(head_err(&[0xdf]), ErrorCode::IndefiniteLengthForbidden);
    assert_eq!(head_err(&[0xf9, 0x3c, 0x00]), ErrorCode::FloatHead);
    assert_eq!(head_err(&[0xfb, 0, 0, 0, 0, 0, 0, 0, 0]), ErrorCode::FloatHead);
    assert_eq!(
        ErrorCode::FloatHead.kind(),
        ErrorKind::MalformedHeader
    );
}

#[test]
fn def_head_rejects_indefinite_marker() {
    let err = decode_def_head(&mut CborStream::new(&[0x9f])).unwrap_err();
    assert_eq!(err.code, ErrorCode::IndefiniteLengthForbidden);
    assert_eq!(
        decode_def_head(&mut CborStream::new(&[0x82])).unwrap(),
        (Major::List, 2)
    );
}

#[test]
fn peeking_does_not_advance() {
    let s = CborStream::new(&[0xd9, 0x01, 0x02]);
    assert_eq!(peek_major(&s).unwrap(), Major::Tag);
    assert_eq!(peek_major_and_minor(&s).unwrap(), (Major::Tag, 25));
    assert_eq!(s.position(), 0);
}

#[test]
fn head_encoders() {
    assert_eq!(encode_def_head(Major::Tag, 258), vec![0xd9, 0x01, 0x02]);
    assert_eq!(encode_def_head(Major::Bytes, 0), vec![0x40]);
    assert_eq!(encode_indef_head(Major::List), [0x9f]);
    assert_eq!(encode_indef_head(Major::Map), [0xbf]);
}

#[test]
fn errors_display_offset_and_message() {
    let err = decode_int(&mut CborStream::new(&[0x61, b'a'])).unwrap_err();
    assert_eq!(err.to_string(), "cbor error at 0: expected integer");
}
