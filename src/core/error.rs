//! Error types for key generation, encryption and collaborator calls.
//!
//! Decoding and decryption deliberately surface failures as `None`; the
//! error types here exist for the paths where the caller has a real decision
//! to make (retry a busy secure element, report a refused generation).
//! Cipher errors are intentionally vague so they cannot be used as an oracle
//! for which stage of decryption failed.

use thiserror::Error;

/// Errors that can occur while generating a key pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A secure-element backed key was requested but no element can serve it.
    #[error("Secure element unavailable")]
    SecureElementUnavailable,

    /// The configured curve is not the curve this crate is built around.
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    /// The key provider is temporarily busy. The caller may retry.
    #[error("Key provider busy")]
    Busy,

    /// The underlying crypto provider refused to create the key.
    #[error("Key generation failed ({code}): {message}")]
    Provider {
        /// Provider-specific diagnostic code.
        code: i32,
        /// Provider diagnostic message.
        message: String,
    },
}

impl GenerationError {
    /// Returns true when the same request may succeed if retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// Errors that can occur during encryption or decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The operation was rejected: invalid key, malformed ciphertext,
    /// or authentication failure.
    /// Intentionally vague for security.
    #[error("Cipher operation rejected")]
    Rejected,

    /// The key provider holding the private key is temporarily busy.
    #[error("Key provider busy")]
    Busy,
}

impl CipherError {
    /// Returns true when the same request may succeed if retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// Errors reported by the key storage and secure element collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The backing hardware or service is not present.
    #[error("Provider unavailable")]
    Unavailable,

    /// The provider is serving another request on the same key.
    #[error("Provider busy")]
    Busy,

    /// No key is stored under the requested handle.
    #[error("Key not found")]
    NotFound,

    /// Any other provider failure.
    #[error("Provider failure ({code}): {message}")]
    Failure {
        /// Provider-specific diagnostic code.
        code: i32,
        /// Provider diagnostic message.
        message: String,
    },
}

impl ProviderError {
    /// Returns true when the same request may succeed if retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

impl From<ProviderError> for GenerationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable => Self::SecureElementUnavailable,
            ProviderError::Busy => Self::Busy,
            ProviderError::NotFound => Self::Provider {
                code: -1,
                message: "key not found".to_string(),
            },
            ProviderError::Failure { code, message } => Self::Provider { code, message },
        }
    }
}

impl From<ProviderError> for CipherError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Busy => Self::Busy,
            _ => Self::Rejected,
        }
    }
}

/// Result type alias for key generation.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Result type alias for cipher operations.
pub type CipherResult<T> = Result<T, CipherError>;
