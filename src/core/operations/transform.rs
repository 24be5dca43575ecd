//! `CipherTransform` - string and byte level encryption API.
//!
//! The `Option` returning methods are the primary surface: a `None` from
//! [`CipherTransform::decrypt`] says nothing about why the input was refused.
//! The `try_*` variants additionally tell a busy secure element apart so that
//! callers can retry.

use tracing::debug;
use zeroize::Zeroize;

use crate::core::error::{CipherError, CipherResult};
use crate::core::operations::ecies;
use crate::core::types::{CipherText, PrivateKey, PublicKey};

/// Stateless ECIES encryptor/decryptor.
///
/// # Example
///
/// ```rust
/// use enclave_ecies::{CipherTransform, KeyPairGenerator};
///
/// let pair = KeyPairGenerator::default().generate_key_pair()?;
///
/// let ciphertext = CipherTransform::encrypt("hello world", pair.public_key())
///     .expect("encryption succeeds");
/// let plaintext = CipherTransform::decrypt(&ciphertext, pair.private_key());
/// assert_eq!(plaintext.as_deref(), Some("hello world"));
/// # Ok::<(), enclave_ecies::GenerationError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CipherTransform;

impl CipherTransform {
    /// Encrypts a UTF-8 message to `recipient` and returns the base64 ciphertext.
    #[must_use]
    pub fn encrypt(message: &str, recipient: &PublicKey) -> Option<String> {
        Self::try_encrypt(message, recipient).ok()
    }

    /// Decrypts a base64 ciphertext into a UTF-8 message.
    ///
    /// Returns `None` for malformed input, a wrong key, a failed
    /// authentication check, or a plaintext that is not UTF-8.
    #[must_use]
    pub fn decrypt(ciphertext: &str, recipient: &PrivateKey) -> Option<String> {
        Self::try_decrypt(ciphertext, recipient).ok()
    }

    /// Like [`encrypt`](Self::encrypt), with an error value.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Rejected` if encryption fails.
    pub fn try_encrypt(message: &str, recipient: &PublicKey) -> CipherResult<String> {
        Ok(ecies::seal(message.as_bytes(), recipient)?.to_string())
    }

    /// Like [`decrypt`](Self::decrypt), with an error value.
    ///
    /// # Errors
    ///
    /// - `CipherError::Busy` if the secure element holding the key is busy
    /// - `CipherError::Rejected` for any other failure
    pub fn try_decrypt(ciphertext: &str, recipient: &PrivateKey) -> CipherResult<String> {
        let parsed = CipherText::try_from(ciphertext)?;
        let plaintext = Self::open(&parsed, recipient)?;
        String::from_utf8(plaintext).map_err(|err| {
            err.into_bytes().zeroize();
            CipherError::Rejected
        })
    }

    /// Encrypts arbitrary bytes to `recipient`.
    #[must_use]
    pub fn encrypt_bytes(plaintext: &[u8], recipient: &PublicKey) -> Option<CipherText> {
        ecies::seal(plaintext, recipient).ok()
    }

    /// Decrypts a parsed ciphertext into raw bytes; the `Option` view of
    /// [`open`](Self::open).
    #[must_use]
    pub fn decrypt_bytes(ciphertext: &CipherText, recipient: &PrivateKey) -> Option<Vec<u8>> {
        Self::open(ciphertext, recipient).ok()
    }

    /// Decrypts a parsed ciphertext into raw bytes.
    ///
    /// # Errors
    ///
    /// - `CipherError::Busy` if the secure element holding the key is busy
    /// - `CipherError::Rejected` for any other failure
    pub fn open(ciphertext: &CipherText, recipient: &PrivateKey) -> CipherResult<Vec<u8>> {
        match ecies::open(ciphertext, recipient) {
            Ok(mut plaintext) => Ok(core::mem::take(&mut *plaintext)),
            Err(err) => {
                debug!(
                    retryable = err.is_retryable(),
                    element = recipient.is_secure_element_backed(),
                    "decryption refused"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::header::HEADER_SIZE;
    use crate::core::operations::{GeneratorConfig, KeyPairGenerator};
    use crate::core::store::MemorySecureElement;
    use crate::GenerationError;

    #[test]
    fn test_roundtrip() -> Result<(), GenerationError> {
        let pair = KeyPairGenerator::default().generate_key_pair()?;
        let ciphertext =
            CipherTransform::encrypt("hello world", pair.public_key()).expect("encrypts");
        assert_eq!(
            CipherTransform::decrypt(&ciphertext, pair.private_key()).as_deref(),
            Some("hello world")
        );
        Ok(())
    }

    #[test]
    fn test_empty_message() -> Result<(), GenerationError> {
        let pair = KeyPairGenerator::default().generate_key_pair()?;
        let ciphertext = CipherTransform::encrypt("", pair.public_key()).expect("encrypts");
        let parsed: CipherText = ciphertext.parse().expect("well formed");
        assert_eq!(parsed.to_bytes().len(), HEADER_SIZE);
        assert_eq!(
            CipherTransform::decrypt(&ciphertext, pair.private_key()).as_deref(),
            Some("")
        );
        Ok(())
    }

    #[test]
    fn test_bytes_roundtrip() -> Result<(), GenerationError> {
        let pair = KeyPairGenerator::default().generate_key_pair()?;
        let data = [0xffu8, 0x00, 0xfe, 0x80];
        let ciphertext = CipherTransform::encrypt_bytes(&data, pair.public_key()).expect("encrypts");
        assert_eq!(
            CipherTransform::decrypt_bytes(&ciphertext, pair.private_key()),
            Some(data.to_vec())
        );

        // Not UTF-8, so the string API refuses it.
        assert_eq!(
            CipherTransform::try_decrypt(&ciphertext.to_string(), pair.private_key()),
            Err(CipherError::Rejected)
        );
        Ok(())
    }

    #[test]
    fn test_decrypt_rejects_garbage() -> Result<(), GenerationError> {
        let pair = KeyPairGenerator::default().generate_key_pair()?;
        assert!(CipherTransform::decrypt("", pair.private_key()).is_none());
        assert!(CipherTransform::decrypt("%%%", pair.private_key()).is_none());
        assert!(CipherTransform::decrypt("aGVsbG8=", pair.private_key()).is_none());
        Ok(())
    }

    #[test]
    fn test_element_key_decrypts() -> Result<(), GenerationError> {
        let element = Arc::new(MemorySecureElement::new());
        let pair = KeyPairGenerator::new(GeneratorConfig::secure_element())
            .with_secure_element(element.clone())
            .generate_key_pair()?;

        let ciphertext = CipherTransform::encrypt("enclave", pair.public_key()).expect("encrypts");

        element.set_busy(true);
        let err = CipherTransform::try_decrypt(&ciphertext, pair.private_key())
            .expect_err("busy element");
        assert!(err.is_retryable());
        assert!(CipherTransform::decrypt(&ciphertext, pair.private_key()).is_none());

        element.set_busy(false);
        assert_eq!(
            CipherTransform::try_decrypt(&ciphertext, pair.private_key()).as_deref(),
            Ok("enclave")
        );
        Ok(())
    }
}
