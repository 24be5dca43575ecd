//! `PublicKey` - P-256 public key handle.
//!
//! The handle always holds a point that has been validated to be on the
//! curve, so every operation that takes a `&PublicKey` can rely on it.
//!
//! Supported external forms:
//! - DER `SubjectPublicKeyInfo` (the transport format, see [`KeyCodec`])
//! - Uncompressed SEC1 / X9.63 point (`0x04 || X || Y`, 65 bytes)
//! - PEM `PUBLIC KEY` (with the `pem` feature)
//!
//! [`KeyCodec`]: crate::core::operations::KeyCodec

use core::fmt::{self, Debug};

use base64::prelude::*;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::{DecodePublicKey, EncodePublicKey};

use crate::core::curve::{CurveId, UNCOMPRESSED_POINT_SIZE};

/// An owned, immutable P-256 public key.
///
/// # Example
///
/// ```rust
/// use enclave_ecies::core::operations::KeyPairGenerator;
///
/// let pair = KeyPairGenerator::default().generate_key_pair()?;
/// let point = pair.public_key().to_sec1_bytes();
/// assert_eq!(point[0], 0x04);
/// # Ok::<(), enclave_ecies::GenerationError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: p256::PublicKey,
}

impl PublicKey {
    /// The curve this key lives on.
    #[must_use]
    pub const fn curve(&self) -> CurveId {
        CurveId::P256
    }

    /// Parses an uncompressed or compressed SEC1 point.
    ///
    /// Returns `None` if the bytes are not a valid point on P-256.
    #[must_use]
    pub fn from_sec1_bytes(bytes: &[u8]) -> Option<Self> {
        p256::PublicKey::from_sec1_bytes(bytes).ok().map(Self::from)
    }

    /// Returns the uncompressed SEC1 point (`0x04 || X || Y`).
    #[must_use]
    pub fn to_sec1_bytes(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_POINT_SIZE];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Parses a DER `SubjectPublicKeyInfo`.
    ///
    /// The algorithm must be `id-ecPublicKey` with the P-256 named curve.
    #[must_use]
    pub fn from_spki_der(der: &[u8]) -> Option<Self> {
        p256::PublicKey::from_public_key_der(der).ok().map(Self::from)
    }

    /// Encodes the key as a DER `SubjectPublicKeyInfo`.
    #[must_use]
    pub fn to_spki_der(&self) -> Option<Vec<u8>> {
        self.inner
            .to_public_key_der()
            .ok()
            .map(|doc| doc.as_bytes().to_vec())
    }

    /// Parses a PEM `PUBLIC KEY` block.
    #[cfg(feature = "pem")]
    #[must_use]
    pub fn from_spki_pem(pem: &str) -> Option<Self> {
        p256::PublicKey::from_public_key_pem(pem).ok().map(Self::from)
    }

    /// Encodes the key as a PEM `PUBLIC KEY` block with LF line endings.
    #[cfg(feature = "pem")]
    #[must_use]
    pub fn to_spki_pem(&self) -> Option<String> {
        self.inner
            .to_public_key_pem(p256::pkcs8::LineEnding::LF)
            .ok()
    }

    pub(crate) const fn as_inner(&self) -> &p256::PublicKey {
        &self.inner
    }
}

impl From<p256::PublicKey> for PublicKey {
    fn from(inner: p256::PublicKey) -> Self {
        Self { inner }
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &self.curve().name())
            .field("point", &BASE64_STANDARD.encode(self.to_sec1_bytes()))
            .finish()
    }
}
