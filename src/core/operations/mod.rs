//! Key generation, encoding and encryption operations.
//!
//! - [`generate`] - Key pair generation (software or secure element)
//! - [`codec`] - Public key import/export and key attributes
//! - [`id`] - Public key identifier (application label)
//! - [`ecies`] - P-256 ECIES seal/open
//! - [`transform`] - String and byte level encryption API

pub mod codec;
pub mod ecies;
pub mod generate;
pub mod id;
pub mod transform;

pub use codec::KeyCodec;
pub use generate::{GeneratorConfig, KeyPairGenerator};
pub use transform::CipherTransform;
