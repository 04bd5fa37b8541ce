use std::collections::BTreeMap;

use ledger_cbor::{
    decode_bool, decode_int, decode_object_ikey, decode_object_skey, decode_string,
    encode_bool, encode_int, encode_object_ikey, encode_object_skey, encode_string, is_object,
    BigInt, CborStream, ErrorCode, ObjectDecoder,
};

#[derive(Debug, PartialEq)]
enum Field {
    Flag(bool),
    Amount(BigInt),
    Label(String),
}

fn skey_fields<'a>() -> ObjectDecoder<'static, 'a, String, Field> {
    ObjectDecoder::new()
        .field("Fun", |s: &mut CborStream<'_>| decode_bool(s).map(Field::Flag))
        .field("Amt", |s: &mut CborStream<'_>| decode_int(s).map(Field::Amount))
}

#[test]
fn text_keyed_object_from_indefinite_map() {
    let bytes = hex::decode("bf6346756ef563416d7421ff").unwrap();
    let mut s = CborStream::new(&bytes);
    assert!(is_object(&s).unwrap());

    let fields = ObjectDecoder::<String, Field>::new()
        .field("Fun", |s: &mut CborStream<'_>| decode_bool(s).map(Field::Flag))
        .field("Amt", |s: &mut CborStream<'_>| decode_int(s).map(Field::Amount));
    let out = decode_object_skey(&mut s, fields).unwrap();

    let mut expected = BTreeMap::new();
    expected.insert("Fun".to_owned(), Field::Flag(true));
    expected.insert("Amt".to_owned(), Field::Amount(BigInt::from(-2)));
    assert_eq!(out, expected);
    assert!(s.is_at_end());
}

#[test]
fn absent_fields_are_missing_from_result() {
    let bytes = encode_object_skey([("Amt", encode_int(&BigInt::from(7)))]);
    let out = decode_object_skey(&mut CborStream::new(&bytes), skey_fields()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out["Amt"], Field::Amount(BigInt::from(7)));
    assert!(!out.contains_key("Fun"));
}

#[test]
fn unknown_field_is_an_error() {
    let bytes = encode_object_skey([
        ("Fun", encode_bool(false)),
        ("Zap", encode_bool(true)),
    ]);
    let err = decode_object_skey(&mut CborStream::new(&bytes), skey_fields()).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnhandledField);
    assert_eq!(err.offset, 6);
}

#[test]
fn integer_keyed_object() {
    let bytes = encode_object_ikey([
        (0, encode_int(&BigInt::from(5))),
        (1, encode_bool(true)),
        (2, encode_string("memo", false)),
    ]);
    assert_eq!(bytes[..5], [0xa3, 0x00, 0x05, 0x01, 0xf5]);

    let fields = ObjectDecoder::<u64, Field>::new()
        .field(0u64, |s: &mut CborStream<'_>| decode_int(s).map(Field::Amount))
        .field(1u64, |s: &mut CborStream<'_>| decode_bool(s).map(Field::Flag))
        .field(2u64, |s: &mut CborStream<'_>| decode_string(s).map(Field::Label));
    let out = decode_object_ikey(&mut CborStream::new(&bytes), fields).unwrap();
    assert_eq!(out[&0], Field::Amount(BigInt::from(5)));
    assert_eq!(out[&1], Field::Flag(true));
    assert_eq!(out[&2], Field::Label("memo".to_owned()));
}

#[test]
fn key_type_is_checked() {
    let text_keyed = encode_object_skey([("a", encode_bool(true))]);
    let fields = ObjectDecoder::<u64, Field>::new()
        .field(0u64, |s: &mut CborStream<'_>| decode_bool(s).map(Field::Flag));
    let err = decode_object_ikey(&mut CborStream::new(&text_keyed), fields).unwrap_err();
    assert_eq!(err.code, ErrorCode::ExpectedInteger);

    let err = decode_object_skey(&mut CborStream::new(&[0x80]), skey_fields()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ExpectedMap);
}
