#![no_main]

use libfuzzer_sys::fuzz_target;

use ledger_cbor::{skip_item, CborStream};

fuzz_target!(|data: &[u8]| {
    let mut s = CborStream::new(data);
    while !s.is_at_end() {
        let before = s.position();
        if skip_item(&mut s).is_err() {
            break;
        }
        assert!(s.position() > before);
    }
});
