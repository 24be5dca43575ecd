//! Ergonomic imports for the common workflow.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use enclave_ecies::prelude::*;
//!
//! let element = Arc::new(MemorySecureElement::new());
//! let pair = KeyPairGenerator::new(GeneratorConfig::secure_element())
//!     .with_secure_element(element)
//!     .generate_key_pair()?;
//!
//! let store = MemoryKeyStore::new();
//! store.store(&KeyLabel::from("device"), pair.private_key())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use crate::core::curve::CurveId;
pub use crate::core::error::{
    CipherError, CipherResult, GenerationError, GenerationResult, ProviderError,
};
pub use crate::core::operations::{CipherTransform, GeneratorConfig, KeyCodec, KeyPairGenerator};
pub use crate::core::store::{
    ElementKeyId, KeyLabel, KeyStore, MemoryKeyStore, MemorySecureElement, SecureElement,
};
pub use crate::core::types::{
    CipherText, ElementKeyRef, KeyAttributes, KeyClass, KeyMaterial, KeyPair, KeyRef, KeyToken,
    PrivateKey, PublicKey,
};
