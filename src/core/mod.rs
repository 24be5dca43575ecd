//! Core key types and operations.
//!
//! - [`curve`] - Curve identifier and size constants
//! - [`error`] - Error types
//! - [`header`] - Ciphertext frame layout
//! - [`types`] - Key handles, attributes and ciphertexts
//! - [`store`] - Secure element and key store collaborators
//! - [`operations`] - Generation, encoding and encryption

pub mod curve;
pub mod error;
pub mod header;
pub mod operations;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use curve::CurveId;
pub use error::{CipherError, CipherResult, GenerationError, GenerationResult, ProviderError};
