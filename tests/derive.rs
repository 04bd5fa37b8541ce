use ledger_cbor::{from_cbor_bytes, BigInt, Bytes, ErrorCode, FromCbor, ToCbor};

#[derive(Debug, Clone, PartialEq, ToCbor, FromCbor)]
struct OutputRef {
    tx_id: Bytes,
    index: u64,
}

#[derive(Debug, Clone, PartialEq, ToCbor, FromCbor)]
#[cbor(constr = 3)]
struct Flag(bool);

#[derive(Debug, Clone, PartialEq, ToCbor, FromCbor)]
#[cbor(tuple)]
struct Pair(u8, String);

#[derive(Debug, Clone, PartialEq, ToCbor, FromCbor)]
struct Marker;

#[derive(Debug, Clone, PartialEq, ToCbor, FromCbor)]
enum Credential {
    PubKey(Bytes),
    Script { hash: Bytes },
    #[cbor(constr = 200)]
    Far,
    Near,
}

#[derive(Debug, Clone, PartialEq, ToCbor, FromCbor)]
struct Bag<T> {
    items: Vec<T>,
    owner: Option<Credential>,
}

#[derive(Debug, Clone, PartialEq, ToCbor, FromCbor)]
enum Datum {
    Int(BigInt),
    List(Vec<Datum>),
}

fn round_trip<T: ToCbor + FromCbor + PartialEq + std::fmt::Debug>(value: &T) -> Vec<u8> {
    let bytes = value.to_cbor();
    assert_eq!(&from_cbor_bytes::<T>(&bytes).unwrap(), value);
    bytes
}

#[test]
fn struct_is_constructor_zero() {
    let value = OutputRef {
        tx_id: Bytes(vec![0xaa, 0xbb]),
        index: 1,
    };
    assert_eq!(hex::encode(round_trip(&value)), "d8799f42aabb01ff");
}

#[test]
fn struct_constructor_index_attribute() {
    assert_eq!(round_trip(&Flag(true)), vec![0xd8, 0x7c, 0x9f, 0xf5, 0xff]);
}

#[test]
fn tuple_struct_layout() {
    assert_eq!(
        round_trip(&Pair(1, "x".to_owned())),
        vec![0x82, 0x01, 0x61, b'x']
    );
}

#[test]
fn unit_struct_has_empty_field_list() {
    assert_eq!(round_trip(&Marker), vec![0xd8, 0x79, 0x80]);
}

#[test]
fn enum_variants_take_their_position() {
    assert_eq!(
        round_trip(&Credential::PubKey(Bytes(vec![1]))),
        vec![0xd8, 0x79, 0x9f, 0x41, 0x01, 0xff]
    );
    assert_eq!(
        round_trip(&Credential::Script {
            hash: Bytes(vec![2])
        }),
        vec![0xd8, 0x7a, 0x9f, 0x41, 0x02, 0xff]
    );
    assert_eq!(
        round_trip(&Credential::Far),
        vec![0xd8, 0x66, 0x82, 0x18, 0xc8, 0x80]
    );
    assert_eq!(round_trip(&Credential::Near), vec![0xd8, 0x7c, 0x80]);
}

#[test]
fn generic_struct_round_trips() {
    round_trip(&Bag {
        items: vec![1u32, 2, 3],
        owner: Some(Credential::Near),
    });
    round_trip(&Bag::<String> {
        items: Vec::new(),
        owner: None,
    });
}

#[test]
fn recursive_enum_round_trips() {
    round_trip(&Datum::List(vec![
        Datum::Int(BigInt::from(-5)),
        Datum::List(Vec::new()),
        Datum::Int(BigInt::from(u128::MAX)),
    ]));
}

#[test]
fn wrong_index_is_unexpected_variant() {
    let err = from_cbor_bytes::<OutputRef>(&[0xd8, 0x7a, 0x80]).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnexpectedVariant);
    assert_eq!(err.offset, 0);

    let err = from_cbor_bytes::<Credential>(&[0xd8, 0x7d, 0x80]).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnexpectedVariant);
}

#[test]
fn field_count_is_exact() {
    let err = from_cbor_bytes::<Flag>(&[0xd8, 0x7c, 0x82, 0xf5, 0xf5]).unwrap_err();
    assert_eq!(err.code, ErrorCode::TooManyItems);
    let err = from_cbor_bytes::<Pair>(&[0x81, 0x01]).unwrap_err();
    assert_eq!(err.code, ErrorCode::TooFewItems);
}

#[test]
fn field_errors_propagate() {
    let err = from_cbor_bytes::<Flag>(&[0xd8, 0x7c, 0x81, 0x01]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ExpectedBool);
    assert_eq!(err.offset, 3);
}
