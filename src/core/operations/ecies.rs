//! P-256 ECIES seal/open.
//!
//! This module implements hybrid encryption using:
//! - P-256 ECDH with a fresh ephemeral key per message
//! - HKDF-SHA256 for key and nonce derivation
//! - AES-256-GCM for authenticated encryption (empty AAD, detached tag)
//!
//! Key derivation:
//!
//! ```text
//! okm   = HKDF-SHA256(salt = ephemeral_pk, ikm = ECDH(x),
//!                     info = "enclave-ecies.v1.p256-aes256gcm" || recipient_pk)
//! key   = okm[0..32]
//! nonce = okm[32..44]
//! ```
//!
//! Both points are uncompressed SEC1. Binding the recipient key into `info`
//! means a ciphertext only opens under the key it was sealed to.

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use hkdf::Hkdf;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::core::curve::{FIELD_SIZE, UNCOMPRESSED_POINT_SIZE};
use crate::core::error::CipherError;
use crate::core::header::{EPHEMERAL_PK_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::core::operations::generate::random_secret_key;
use crate::core::types::{CipherText, PrivateKey, PublicKey};

/// HKDF `info` prefix; the recipient's public point follows it.
pub const KDF_INFO: &[u8] = b"enclave-ecies.v1.p256-aes256gcm";

/// AES-256 key size.
pub const KEY_SIZE: usize = 32;

/// Bytes of HKDF output: encryption key followed by nonce.
const OKM_SIZE: usize = KEY_SIZE + NONCE_SIZE;

struct MessageKeys {
    key: Zeroizing<[u8; KEY_SIZE]>,
    nonce: [u8; NONCE_SIZE],
}

fn derive_keys(
    shared: &[u8; FIELD_SIZE],
    ephemeral_pk: &[u8; EPHEMERAL_PK_SIZE],
    recipient_pk: &[u8; UNCOMPRESSED_POINT_SIZE],
) -> Result<MessageKeys, CipherError> {
    let hk = Hkdf::<Sha256>::new(Some(ephemeral_pk.as_slice()), shared);
    let mut okm = Zeroizing::new([0u8; OKM_SIZE]);
    hk.expand_multi_info(&[KDF_INFO, recipient_pk.as_slice()], okm.as_mut_slice())
        .map_err(|_| CipherError::Rejected)?;

    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    key.copy_from_slice(&okm[..KEY_SIZE]);
    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(&okm[KEY_SIZE..]);
    Ok(MessageKeys { key, nonce })
}

/// Encrypts `plaintext` to `recipient`.
///
/// # Errors
///
/// Returns `CipherError::Rejected` if the RNG fails or the cipher refuses the
/// input (payloads beyond the AES-GCM limit).
pub fn seal(plaintext: &[u8], recipient: &PublicKey) -> Result<CipherText, CipherError> {
    let ephemeral = PrivateKey::from_secret(
        random_secret_key().map_err(|_| CipherError::Rejected)?,
    );
    let ephemeral_pk = ephemeral.public_key().to_sec1_bytes();
    let recipient_pk = recipient.to_sec1_bytes();

    let shared = ephemeral.agree(recipient)?;
    let keys = derive_keys(&shared, &ephemeral_pk, &recipient_pk)?;

    let cipher =
        Aes256Gcm::new_from_slice(keys.key.as_slice()).map_err(|_| CipherError::Rejected)?;
    let mut payload = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&keys.nonce), b"", &mut payload)
        .map_err(|_| CipherError::Rejected)?;

    let mut tag_bytes = [0u8; TAG_SIZE];
    tag_bytes.copy_from_slice(&tag);
    Ok(CipherText::new(ephemeral_pk, keys.nonce, tag_bytes, payload))
}

/// Decrypts a ciphertext with the recipient's private key.
///
/// Key agreement goes through [`PrivateKey::agree`], so secure-element keys
/// are handled by their element.
///
/// # Errors
///
/// - `CipherError::Busy` if the secure element holding the key asked to be
///   retried
/// - `CipherError::Rejected` for every other failure
pub fn open(
    ciphertext: &CipherText,
    recipient: &PrivateKey,
) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    let ephemeral =
        PublicKey::from_sec1_bytes(ciphertext.ephemeral_pk()).ok_or(CipherError::Rejected)?;
    let shared = recipient.agree(&ephemeral)?;
    let keys = derive_keys(
        &shared,
        ciphertext.ephemeral_pk(),
        &recipient.public_key().to_sec1_bytes(),
    )?;

    // The nonce is derived, so a mismatch means the frame was not sealed to
    // this key.
    if !bool::from(keys.nonce[..].ct_eq(&ciphertext.nonce()[..])) {
        return Err(CipherError::Rejected);
    }

    let cipher =
        Aes256Gcm::new_from_slice(keys.key.as_slice()).map_err(|_| CipherError::Rejected)?;
    let mut buffer = Zeroizing::new(ciphertext.payload().to_vec());
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(&keys.nonce),
            b"",
            &mut buffer,
            GenericArray::from_slice(ciphertext.tag()),
        )
        .map_err(|_| CipherError::Rejected)?;

    Ok(buffer)
}
