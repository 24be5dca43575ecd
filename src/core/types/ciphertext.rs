//! `CipherText` - an ECIES message in transit.
//!
//! Format: `base64(ephemeral_pk || nonce || tag || payload)` using the
//! standard alphabet with padding. Field widths are fixed (65, 12, 16) so a
//! decoder splits without ambiguity; see [`crate::core::header`].

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use base64::prelude::*;

use crate::core::error::CipherError;
use crate::core::header::{
    make_header, parse_header, EPHEMERAL_PK_SIZE, HEADER_SIZE, NONCE_SIZE, TAG_SIZE,
};

/// A parsed ciphertext frame.
///
/// Parsing only checks the framing. Whether the frame authenticates is
/// decided by [`CipherTransform::open`].
///
/// [`CipherTransform::open`]: crate::core::operations::CipherTransform::open
#[derive(Clone, PartialEq, Eq)]
pub struct CipherText {
    ephemeral_pk: [u8; EPHEMERAL_PK_SIZE],
    nonce: [u8; NONCE_SIZE],
    tag: [u8; TAG_SIZE],
    payload: Vec<u8>,
}

impl CipherText {
    pub(crate) fn new(
        ephemeral_pk: [u8; EPHEMERAL_PK_SIZE],
        nonce: [u8; NONCE_SIZE],
        tag: [u8; TAG_SIZE],
        payload: Vec<u8>,
    ) -> Self {
        Self {
            ephemeral_pk,
            nonce,
            tag,
            payload,
        }
    }

    /// Parses a decoded binary frame.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Rejected` for malformed frames.
    pub fn from_bytes(frame: &[u8]) -> Result<Self, CipherError> {
        let (header, payload) = parse_header(frame)?;
        Ok(Self::new(
            *header.ephemeral_pk,
            *header.nonce,
            *header.tag,
            payload.to_vec(),
        ))
    }

    /// Returns the binary frame.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(HEADER_SIZE + self.payload.len());
        frame.extend_from_slice(&make_header(&self.ephemeral_pk, &self.nonce, &self.tag));
        frame.extend_from_slice(&self.payload);
        frame
    }

    /// The sender's ephemeral public key (uncompressed SEC1).
    #[must_use]
    pub const fn ephemeral_pk(&self) -> &[u8; EPHEMERAL_PK_SIZE] {
        &self.ephemeral_pk
    }

    /// The AEAD nonce.
    #[must_use]
    pub const fn nonce(&self) -> &[u8; NONCE_SIZE] {
        &self.nonce
    }

    /// The AEAD tag.
    #[must_use]
    pub const fn tag(&self) -> &[u8; TAG_SIZE] {
        &self.tag
    }

    /// The encrypted payload.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl Display for CipherText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64_STANDARD.encode(self.to_bytes()))
    }
}

impl Debug for CipherText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherText")
            .field("ephemeral_pk", &"[...]")
            .field("payload_len", &self.payload.len())
            .finish()
    }
}

impl TryFrom<&str> for CipherText {
    type Error = CipherError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let frame = BASE64_STANDARD
            .decode(encoded)
            .map_err(|_| CipherError::Rejected)?;
        Self::from_bytes(&frame)
    }
}

impl TryFrom<String> for CipherText {
    type Error = CipherError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl FromStr for CipherText {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CipherText {
        let mut ephemeral_pk = [0xabu8; EPHEMERAL_PK_SIZE];
        ephemeral_pk[0] = 0x04;
        CipherText::new(ephemeral_pk, [1u8; NONCE_SIZE], [2u8; TAG_SIZE], vec![3, 4, 5])
    }

    #[test]
    fn test_string_roundtrip() -> Result<(), CipherError> {
        let original = sample();
        let encoded = original.to_string();
        let parsed: CipherText = encoded.parse()?;
        assert_eq!(parsed, original);
        assert_eq!(parsed.payload(), &[3, 4, 5]);
        Ok(())
    }

    #[test]
    fn test_frame_order() {
        let frame = sample().to_bytes();
        assert_eq!(frame.len(), HEADER_SIZE + 3);
        assert_eq!(frame[0], 0x04);
        assert_eq!(frame[EPHEMERAL_PK_SIZE], 1);
        assert_eq!(frame[EPHEMERAL_PK_SIZE + NONCE_SIZE], 2);
        assert_eq!(frame[HEADER_SIZE], 3);
    }

    #[test]
    fn test_rejects_invalid_base64() {
        assert_eq!(CipherText::try_from("not*base64!"), Err(CipherError::Rejected));
        assert_eq!(CipherText::try_from(""), Err(CipherError::Rejected));
    }

    #[test]
    fn test_debug_hides_contents() {
        let debug_str = format!("{:?}", sample());
        assert!(debug_str.contains("payload_len"));
        assert!(!debug_str.contains("171"));
    }
}
