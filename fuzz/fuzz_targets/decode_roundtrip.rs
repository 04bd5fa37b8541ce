#![no_main]

use libfuzzer_sys::fuzz_target;

use ledger_cbor::{from_cbor_bytes, BigInt, Bytes, FromCbor, ToCbor};

#[derive(Debug, PartialEq, ToCbor, FromCbor)]
enum Datum {
    Int(BigInt),
    Bytes(Bytes),
    List(Vec<Datum>),
    Map(Vec<(Datum, Datum)>),
    Text(Option<String>),
}

fuzz_target!(|data: &[u8]| {
    // Input forms vary (definite or not, split or not); one re-encode must be a fixed point.
    if let Ok(value) = from_cbor_bytes::<Datum>(data) {
        let first = value.to_cbor();
        let again = from_cbor_bytes::<Datum>(&first).expect("re-decode");
        assert_eq!(again, value);
        assert_eq!(again.to_cbor(), first);
    }
});
