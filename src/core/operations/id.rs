//! Public key identifier computation.
//!
//! The application label of a key is
//! `base64url_nopad(SHA-256("enclave-ecies.pid." || spki_der))`.
//!
//! It is computed over the DER `SubjectPublicKeyInfo`, so a key decoded from
//! its transport string has the same label as the key it was exported from,
//! and both halves of a pair report the same label.

use base64::prelude::*;
use sha2::{Digest, Sha256};

use crate::core::types::PublicKey;

/// Domain separation prefix for the label hash.
pub const LABEL_DOMAIN: &[u8] = b"enclave-ecies.pid.";

/// Label hash output size (SHA-256).
pub const LABEL_HASH_SIZE: usize = 32;

/// Hashes the DER `SubjectPublicKeyInfo` of a key into its identifier bytes.
#[must_use]
pub fn compute_label(spki_der: &[u8]) -> [u8; LABEL_HASH_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(LABEL_DOMAIN);
    hasher.update(spki_der);
    hasher.finalize().into()
}

/// Returns the application label of `key`, or `None` if the key cannot be
/// DER encoded.
#[must_use]
pub fn application_label(key: &PublicKey) -> Option<String> {
    key.to_spki_der()
        .map(|der| BASE64_URL_SAFE_NO_PAD.encode(compute_label(&der)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar_key(last: u8) -> PublicKey {
        let mut scalar = [0u8; 32];
        scalar[31] = last;
        crate::core::types::PrivateKey::from_scalar_bytes(&scalar)
            .expect("valid scalar")
            .public_key()
            .clone()
    }

    #[test]
    fn test_label_hashes_der_encoding() {
        let key = scalar_key(7);
        let der = key.to_spki_der().expect("encodable");
        assert_eq!(
            application_label(&key),
            Some(BASE64_URL_SAFE_NO_PAD.encode(compute_label(&der)))
        );
    }

    #[test]
    fn test_label_of_generator() {
        // d = 1, so the public key is the base point.
        assert_eq!(
            application_label(&scalar_key(1)).as_deref(),
            Some("eIybySwQ-hMbwMjXgYGIR6zgd4kUicMkgo1L39S_oAA")
        );
    }

    #[test]
    fn test_label_is_deterministic_and_distinct() {
        let a = application_label(&scalar_key(2)).expect("encodable");
        assert_eq!(Some(a.clone()), application_label(&scalar_key(2)));
        assert_ne!(Some(a.clone()), application_label(&scalar_key(3)));
        assert_eq!(a.len(), 43);
    }

    #[test]
    fn test_domain_separation() {
        let der = scalar_key(5).to_spki_der().expect("encodable");
        let plain: [u8; LABEL_HASH_SIZE] = Sha256::digest(&der).into();
        assert_ne!(compute_label(&der), plain);
    }
}
