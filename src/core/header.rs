//! Header parsing and generation for ciphertext frames.
//!
//! A decoded ciphertext frame has the fixed layout
//! `ephemeral_pk (65) || nonce (12) || tag (16) || payload (n)`, so the
//! header can be split off at constant offsets without any length prefix.
//! The ephemeral key is always an uncompressed SEC1 point.

use crate::core::curve::UNCOMPRESSED_POINT_SIZE;
use crate::core::error::CipherError;

/// Size of the ephemeral public key (uncompressed SEC1 P-256 point).
pub const EPHEMERAL_PK_SIZE: usize = UNCOMPRESSED_POINT_SIZE;

/// Size of the AES-256-GCM nonce.
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-256-GCM authentication tag.
pub const TAG_SIZE: usize = 16;

/// Size of the fixed header: `ephemeral_pk || nonce || tag`.
/// This is also the size of a frame carrying an empty message.
pub const HEADER_SIZE: usize = EPHEMERAL_PK_SIZE + NONCE_SIZE + TAG_SIZE;

/// SEC1 tag byte of an uncompressed point.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Borrowed view of the fixed-width fields at the front of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader<'a> {
    /// Sender's ephemeral public key.
    pub ephemeral_pk: &'a [u8; EPHEMERAL_PK_SIZE],
    /// AEAD nonce.
    pub nonce: &'a [u8; NONCE_SIZE],
    /// AEAD authentication tag.
    pub tag: &'a [u8; TAG_SIZE],
}

/// Splits a decoded frame into its header and payload.
///
/// # Errors
///
/// Returns `CipherError::Rejected` if the frame is shorter than
/// [`HEADER_SIZE`] or the ephemeral key is not an uncompressed point.
pub fn parse_header(frame: &[u8]) -> Result<(FrameHeader<'_>, &[u8]), CipherError> {
    if frame.len() < HEADER_SIZE {
        return Err(CipherError::Rejected);
    }

    let (ephemeral_pk, rest) = frame.split_at(EPHEMERAL_PK_SIZE);
    let (nonce, rest) = rest.split_at(NONCE_SIZE);
    let (tag, payload) = rest.split_at(TAG_SIZE);

    let ephemeral_pk: &[u8; EPHEMERAL_PK_SIZE] =
        ephemeral_pk.try_into().map_err(|_| CipherError::Rejected)?;
    if ephemeral_pk[0] != UNCOMPRESSED_TAG {
        return Err(CipherError::Rejected);
    }

    let header = FrameHeader {
        ephemeral_pk,
        nonce: nonce.try_into().map_err(|_| CipherError::Rejected)?,
        tag: tag.try_into().map_err(|_| CipherError::Rejected)?,
    };
    Ok((header, payload))
}

/// Concatenates the header fields in frame order.
#[must_use]
pub fn make_header(
    ephemeral_pk: &[u8; EPHEMERAL_PK_SIZE],
    nonce: &[u8; NONCE_SIZE],
    tag: &[u8; TAG_SIZE],
) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    out[..EPHEMERAL_PK_SIZE].copy_from_slice(ephemeral_pk);
    out[EPHEMERAL_PK_SIZE..EPHEMERAL_PK_SIZE + NONCE_SIZE].copy_from_slice(nonce);
    out[EPHEMERAL_PK_SIZE + NONCE_SIZE..].copy_from_slice(tag);
    out
}
