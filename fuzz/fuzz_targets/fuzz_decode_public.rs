#![no_main]

use enclave_ecies::KeyCodec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every external form should reject garbage without panicking
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(key) = KeyCodec::decode(s) {
            assert_eq!(
                KeyCodec::application_label(&key).is_some(),
                KeyCodec::encode(&key).is_some()
            );
        }
        let _ = KeyCodec::decode_pem(s);
    }
    let _ = KeyCodec::decode_sec1(data);
});
