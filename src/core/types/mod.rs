//! Key handle and message types.
//!
//! - [`PublicKey`] - validated P-256 public key
//! - [`PrivateKey`] - software or secure-element backed private key
//! - [`KeyPair`] - both halves, as produced by the generator
//! - [`KeyAttributes`] - descriptive metadata derived from a handle
//! - [`CipherText`] - parsed ECIES frame

mod attributes;
mod ciphertext;
mod pair;
mod private;
mod public;

pub use attributes::{
    KeyAttributes, KeyClass, KeyRef, KeyToken, APPLICATION_LABEL, CURVE, KEY_CLASS, KEY_SIZE,
    KEY_TYPE, KEY_TYPE_EC, TOKEN,
};
pub use ciphertext::CipherText;
pub use pair::KeyPair;
pub use private::{ElementKeyRef, KeyMaterial, PrivateKey};
pub use public::PublicKey;
