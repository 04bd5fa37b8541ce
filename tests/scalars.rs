use ledger_cbor::{
    decode_bool, decode_float, decode_float16, decode_float32, decode_float64, decode_null,
    decode_option, decoder, encode_bool, encode_float16, encode_float32, encode_float64,
    encode_int, encode_null, encode_option, f16, from_cbor_bytes, is_bool, is_float,
    is_float16, is_float32, is_float64, is_null, BigInt, CborStream, ErrorCode,
};

#[test]
fn bool_and_null_bytes() {
    assert_eq!(encode_bool(false), vec![0xf4]);
    assert_eq!(encode_bool(true), vec![0xf5]);
    assert_eq!(encode_null(), vec![0xf6]);

    assert!(decode_bool(&mut CborStream::new(&[0xf5])).unwrap());
    assert!(!decode_bool(&mut CborStream::new(&[0xf4])).unwrap());
    assert_eq!(
        decode_bool(&mut CborStream::new(&[0xf6])).unwrap_err().code,
        ErrorCode::ExpectedBool
    );
    decode_null(&mut CborStream::new(&[0xf6])).unwrap();
    assert_eq!(
        decode_null(&mut CborStream::new(&[0xf4])).unwrap_err().code,
        ErrorCode::ExpectedNull
    );

    assert!(is_bool(&CborStream::new(&[0xf4])).unwrap());
    assert!(!is_bool(&CborStream::new(&[0xf6])).unwrap());
    assert!(is_null(&CborStream::new(&[0xf6])).unwrap());
    assert!(!is_null(&CborStream::new(&[0x00])).unwrap());
}

#[test]
fn float16_decodes_through_generic_float_only() {
    let bytes = [0xf9, 0x3c, 0x00];
    assert_eq!(decode_float(&mut CborStream::new(&bytes)).unwrap(), 1.0);
    assert_eq!(
        decode_float16(&mut CborStream::new(&bytes)).unwrap(),
        f16::from_f32(1.0)
    );
    assert_eq!(
        decode_float32(&mut CborStream::new(&bytes)).unwrap_err().code,
        ErrorCode::ExpectedFloat32
    );
    assert_eq!(
        decode_float64(&mut CborStream::new(&bytes)).unwrap_err().code,
        ErrorCode::ExpectedFloat64
    );
}

#[test]
fn cross_width_fails_for_nan() {
    let nan16 = [0xf9, 0x7e, 0x00];
    assert!(decode_float(&mut CborStream::new(&nan16)).unwrap().is_nan());
    assert!(decode_float32(&mut CborStream::new(&nan16)).is_err());
    let nan32 = [0xfa, 0x7f, 0xc0, 0x00, 0x00];
    assert!(decode_float16(&mut CborStream::new(&nan32)).is_err());
    assert!(decode_float32(&mut CborStream::new(&nan32)).unwrap().is_nan());
}

#[test]
fn float_encoders() {
    assert_eq!(encode_float16(f16::from_f32(1.0)), vec![0xf9, 0x3c, 0x00]);
    assert_eq!(encode_float32(1.5), vec![0xfa, 0x3f, 0xc0, 0x00, 0x00]);
    assert_eq!(
        encode_float64(1.0),
        vec![0xfb, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]
    );
    let bytes = encode_float64(-2.25);
    let mut s = CborStream::new(&bytes);
    assert_eq!(decode_float64(&mut s).unwrap(), -2.25);
    assert!(s.is_at_end());
}

#[test]
fn float_predicates() {
    let s = CborStream::new(&[0xfa, 0, 0, 0, 0]);
    assert!(is_float(&s).unwrap());
    assert!(is_float32(&s).unwrap());
    assert!(!is_float16(&s).unwrap());
    assert!(!is_float64(&s).unwrap());
    assert!(!is_float(&CborStream::new(&[0xf5])).unwrap());
}

#[test]
fn decode_float_rejects_non_floats() {
    let err = decode_float(&mut CborStream::new(&[0x01])).unwrap_err();
    assert_eq!(err.code, ErrorCode::ExpectedFloat);
}

#[test]
fn f32_refuses_to_narrow_float64() {
    assert_eq!(from_cbor_bytes::<f32>(&[0xf9, 0x3c, 0x00]).unwrap(), 1.0);
    assert_eq!(
        from_cbor_bytes::<f32>(&encode_float64(1.0)).unwrap_err().code,
        ErrorCode::ExpectedFloat32
    );
}

#[test]
fn option_is_null_or_value() {
    let some = encode_option(Some(5u8), |v| encode_int(&BigInt::from(v)));
    assert_eq!(some, vec![0x05]);
    let none = encode_option(None::<u8>, |v| encode_int(&BigInt::from(v)));
    assert_eq!(none, vec![0xf6]);

    assert_eq!(
        decode_option(&mut CborStream::new(&some), decoder::<u8>()).unwrap(),
        Some(5)
    );
    let mut s = CborStream::new(&none);
    assert_eq!(decode_option(&mut s, decoder::<u8>()).unwrap(), None);
    assert!(s.is_at_end());
}
