#![no_main]

use enclave_ecies::{CipherTransform, PrivateKey};
use libfuzzer_sys::fuzz_target;

const RECIPIENT_SCALAR: [u8; 32] = [
    0x1f, 0x3c, 0x5a, 0x7e, 0x9b, 0x2d, 0x4f, 0x60, 0x81, 0xa3, 0xc5, 0xe7, 0x09, 0x2b, 0x4d, 0x6f,
    0x81, 0x93, 0xb5, 0xd7, 0xf9, 0xab, 0x2c, 0x4e, 0x60, 0x82, 0xa4, 0xc6, 0xe8, 0xf0, 0xa1, 0xb3,
];

fuzz_target!(|data: &str| {
    let Some(key) = PrivateKey::from_scalar_bytes(&RECIPIENT_SCALAR) else {
        return;
    };
    let _ = CipherTransform::decrypt(data, &key);
});
