//! Integration tests using the known-answer vectors under `tests/vectors`.

// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod vectors;

use std::path::PathBuf;

use enclave_ecies::{CipherText, CipherTransform, KeyCodec, PrivateKey};
use vectors::*;

/// Get the path to the test vectors directory.
fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

#[test]
fn test_public_key_vectors() {
    let path = vectors_dir().join("public.json");
    let suite: TestVectorSuite<PublicKeyTestVector> =
        load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        let decoded = KeyCodec::decode(&test.key);

        if test.expect_fail {
            assert!(
                decoded.is_none(),
                "Test '{}' should have failed but succeeded",
                test.name
            );
            continue;
        }

        let key = decoded.unwrap_or_else(|| panic!("Test '{}' decoding failed", test.name));
        let sec1 = hex_decode(test.sec1.as_ref().expect("sec1 required for success test"))
            .expect("valid hex");
        assert_eq!(
            KeyCodec::encode_sec1(&key).as_slice(),
            sec1.as_slice(),
            "Test '{}' point mismatch",
            test.name
        );

        assert_eq!(
            KeyCodec::encode(&key).as_deref(),
            Some(test.key.as_str()),
            "Test '{}' re-encoding failed",
            test.name
        );

        assert_eq!(
            KeyCodec::application_label(&key),
            test.application_label,
            "Test '{}' application label mismatch",
            test.name
        );
    }
}

#[test]
fn test_decrypt_vectors() {
    let path = vectors_dir().join("ecies.json");
    let suite: TestVectorSuite<EciesTestVector> =
        load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        let scalar = hex_decode(&test.private_scalar).expect("valid hex");
        let private = PrivateKey::from_scalar_bytes(&scalar)
            .unwrap_or_else(|| panic!("Test '{}' has an invalid scalar", test.name));

        let result = CipherTransform::decrypt(&test.ciphertext, &private);

        if test.expect_fail {
            assert!(
                result.is_none(),
                "Test '{}' should have failed but succeeded",
                test.name
            );
        } else {
            assert_eq!(
                result, test.message,
                "Test '{}' decryption failed",
                test.name
            );
        }
    }
}

#[test]
fn test_decrypt_vectors_use_published_key() {
    let path = vectors_dir().join("ecies.json");
    let suite: TestVectorSuite<EciesTestVector> =
        load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests.iter().filter(|test| !test.expect_fail) {
        let scalar = hex_decode(&test.private_scalar).expect("valid hex");
        let private = PrivateKey::from_scalar_bytes(&scalar).expect("valid scalar");
        let published = KeyCodec::decode(&test.public_key).expect("valid public key");
        assert_eq!(private.public_key(), &published, "Test '{}'", test.name);

        // The frame parses on its own, and opening it yields the same bytes.
        let frame: CipherText = test.ciphertext.parse().expect("well formed frame");
        let opened = CipherTransform::open(&frame, &private).expect("opens");
        assert_eq!(
            Some(String::from_utf8(opened).expect("utf-8")),
            test.message,
            "Test '{}'",
            test.name
        );
    }
}

#[test]
fn test_encrypt_to_vector_key() {
    let path = vectors_dir().join("ecies.json");
    let suite: TestVectorSuite<EciesTestVector> =
        load_vectors(path.to_str().expect("valid path"));
    let test = &suite.tests[0];

    let recipient = KeyCodec::decode(&test.public_key).expect("valid public key");
    let private = PrivateKey::from_scalar_bytes(
        &hex_decode(&test.private_scalar).expect("valid hex"),
    )
    .expect("valid scalar");

    let ciphertext = CipherTransform::encrypt("fresh message", &recipient).expect("encrypts");
    assert_eq!(
        CipherTransform::decrypt(&ciphertext, &private).as_deref(),
        Some("fresh message")
    );
}
