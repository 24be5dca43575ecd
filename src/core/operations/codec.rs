//! Public key import/export and key attributes.
//!
//! The transport form of a public key is standard base64 (with padding) of its
//! DER `SubjectPublicKeyInfo`. Decoding validates the algorithm, the named
//! curve and that the point lies on P-256; anything else is `None`.

use base64::prelude::*;
use tracing::debug;

use crate::core::curve::UNCOMPRESSED_POINT_SIZE;
use crate::core::operations::id;
use crate::core::types::{KeyAttributes, KeyClass, KeyRef, KeyToken, PublicKey};

/// Stateless converter between key handles and their external forms.
///
/// # Example
///
/// ```rust
/// use enclave_ecies::{KeyCodec, KeyPairGenerator};
///
/// let pair = KeyPairGenerator::default().generate_key_pair()?;
/// let encoded = KeyCodec::encode(pair.public_key()).expect("P-256 keys always encode");
/// let decoded = KeyCodec::decode(&encoded).expect("valid encoding");
/// assert_eq!(&decoded, pair.public_key());
/// # Ok::<(), enclave_ecies::GenerationError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyCodec;

impl KeyCodec {
    /// Encodes a public key as base64 DER `SubjectPublicKeyInfo`.
    #[must_use]
    pub fn encode(key: &PublicKey) -> Option<String> {
        key.to_spki_der().map(|der| BASE64_STANDARD.encode(der))
    }

    /// Decodes a public key from base64 DER `SubjectPublicKeyInfo`.
    ///
    /// Returns `None` for empty input, invalid base64, malformed DER, a
    /// different algorithm or curve, or a point that is not on the curve.
    #[must_use]
    pub fn decode(encoded: &str) -> Option<PublicKey> {
        if encoded.is_empty() {
            return None;
        }
        let der = BASE64_STANDARD.decode(encoded).ok()?;
        let key = PublicKey::from_spki_der(&der);
        if key.is_none() {
            debug!(len = der.len(), "rejected public key encoding");
        }
        key
    }

    /// Encodes a public key as a PEM `PUBLIC KEY` block.
    #[cfg(feature = "pem")]
    #[must_use]
    pub fn encode_pem(key: &PublicKey) -> Option<String> {
        key.to_spki_pem()
    }

    /// Decodes a public key from a PEM `PUBLIC KEY` block.
    #[cfg(feature = "pem")]
    #[must_use]
    pub fn decode_pem(pem: &str) -> Option<PublicKey> {
        PublicKey::from_spki_pem(pem)
    }

    /// Returns the raw uncompressed point (`0x04 || X || Y`).
    #[must_use]
    pub fn encode_sec1(key: &PublicKey) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        key.to_sec1_bytes()
    }

    /// Parses a raw uncompressed point.
    ///
    /// Compressed points are rejected so that both directions use the same
    /// representation.
    #[must_use]
    pub fn decode_sec1(bytes: &[u8]) -> Option<PublicKey> {
        if bytes.len() != UNCOMPRESSED_POINT_SIZE || bytes[0] != 0x04 {
            return None;
        }
        PublicKey::from_sec1_bytes(bytes)
    }

    /// Returns the public key identifier shared by both halves of a pair.
    ///
    /// `None` only if the key cannot be DER encoded.
    #[must_use]
    pub fn application_label(key: &PublicKey) -> Option<String> {
        id::application_label(key)
    }

    /// Reads the descriptive attributes of a key handle.
    ///
    /// Returns `None` if the handle can no longer be used, which happens when
    /// a secure element no longer holds the key.
    ///
    /// A [`KeyPair`](crate::KeyPair) has no attributes of its own; pass the
    /// half you mean:
    ///
    /// ```compile_fail
    /// use enclave_ecies::{KeyCodec, KeyPairGenerator};
    ///
    /// let pair = KeyPairGenerator::default().generate_key_pair().unwrap();
    /// let _ = KeyCodec::attributes(&pair);
    /// ```
    #[must_use]
    pub fn attributes<'a>(key: impl Into<KeyRef<'a>>) -> Option<KeyAttributes> {
        let attributes = match key.into() {
            KeyRef::Public(public) => KeyAttributes::new(
                KeyClass::Public,
                public.curve(),
                KeyToken::Software,
                id::application_label(public)?,
            ),
            KeyRef::Private(private) => {
                if !private.is_usable() {
                    return None;
                }
                let token = if private.is_secure_element_backed() {
                    KeyToken::SecureElement
                } else {
                    KeyToken::Software
                };
                KeyAttributes::new(
                    KeyClass::Private,
                    private.curve(),
                    token,
                    id::application_label(private.public_key())?,
                )
            }
        };
        Some(attributes)
    }
}
