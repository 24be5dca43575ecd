#![no_main]

use enclave_ecies::CipherText;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(frame) = CipherText::from_bytes(data) {
        assert_eq!(frame.to_bytes(), data);
    }
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = CipherText::try_from(s);
    }
});
