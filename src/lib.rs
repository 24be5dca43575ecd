//! P-256 ECIES key exchange with optional secure-element backed keys.
//!
//! This crate generates P-256 key pairs, exchanges public keys as base64 DER
//! `SubjectPublicKeyInfo` strings, and encrypts messages to a public key with
//! an ECIES-style hybrid scheme (ECDH + HKDF-SHA256 + AES-256-GCM).
//!
//! # Quick Start
//!
//! ```rust
//! use enclave_ecies::{CipherTransform, KeyCodec, KeyPairGenerator};
//!
//! // Receiver: generate a pair and publish the public half.
//! let pair = KeyPairGenerator::default().generate_key_pair()?;
//! let published = KeyCodec::encode(pair.public_key()).expect("P-256 keys encode");
//!
//! // Sender: import the public key and encrypt.
//! let recipient = KeyCodec::decode(&published).expect("valid public key");
//! let ciphertext = CipherTransform::encrypt("hello world", &recipient).expect("encrypts");
//!
//! // Receiver: decrypt with the private half.
//! let message = CipherTransform::decrypt(&ciphertext, pair.private_key());
//! assert_eq!(message.as_deref(), Some("hello world"));
//! # Ok::<(), enclave_ecies::GenerationError>(())
//! ```
//!
//! # Formats
//!
//! | Value | Format |
//! |-------|--------|
//! | Public key | base64(DER `SubjectPublicKeyInfo`), standard alphabet, padded |
//! | Ciphertext | base64(`ephemeral_pk` (65) \|\| nonce (12) \|\| tag (16) \|\| payload) |
//! | Application label | base64url(SHA-256(`"enclave-ecies.pid."` \|\| SPKI)), unpadded |
//!
//! # Secure elements
//!
//! A [`KeyPairGenerator`] configured with
//! [`GeneratorConfig::secure_element`] asks its attached
//! [`SecureElement`](crate::core::store::SecureElement) to create the private key.
//! Such keys never leave the element: decryption asks the element to perform
//! the key agreement. The element key is deleted when the last handle to it,
//! including any copy held by a key store, is dropped.
//! [`MemorySecureElement`](crate::core::store::MemorySecureElement)
//! is an in-process stand-in for tests and development.
//!
//! # Security
//!
//! - Private scalars are zeroized on drop
//! - Debug output redacts private keys
//! - Decryption failures carry no detail about which check failed
//! - No unsafe code
//!
//! # Features
//!
//! - `pem` (default) - PEM import/export of public keys
//! - `prelude` (default) - the [`prelude`] module
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::curve::CurveId;
pub use crate::core::error::{
    CipherError, CipherResult, GenerationError, GenerationResult, ProviderError,
};
pub use crate::core::operations::{CipherTransform, GeneratorConfig, KeyCodec, KeyPairGenerator};
pub use crate::core::types::{
    CipherText, KeyAttributes, KeyClass, KeyPair, KeyRef, KeyToken, PrivateKey, PublicKey,
};
