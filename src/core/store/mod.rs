//! Collaborator seams for private key custody.
//!
//! This crate does not talk to keychains or secure hardware itself. Instead it
//! calls into two traits:
//!
//! - [`SecureElement`] - creates keys inside isolated hardware and performs
//!   key agreement on them. Scalars never cross this boundary.
//! - [`KeyStore`] - durable storage of private keys under a [`KeyLabel`].
//!
//! Implementations must be `Send + Sync`; they are responsible for
//! serializing concurrent access to the same key. A temporarily busy provider
//! reports [`ProviderError::Busy`], which callers see as a retryable error.
//!
//! In-process implementations of both traits live in [`memory`].
//!
//! [`ProviderError::Busy`]: crate::core::error::ProviderError::Busy

pub mod memory;

use core::fmt::{self, Display};

use zeroize::Zeroizing;

use crate::core::curve::{CurveId, FIELD_SIZE};
use crate::core::error::ProviderError;
use crate::core::types::{PrivateKey, PublicKey};

pub use memory::{MemoryKeyStore, MemorySecureElement};

/// Opaque identifier of a key held by a [`SecureElement`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKeyId(String);

impl ElementKeyId {
    /// Wraps a provider-specific key reference.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the provider-specific key reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ElementKeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Application-chosen handle under which a [`KeyStore`] keeps a private key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyLabel(String);

impl KeyLabel {
    /// Creates a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl Display for KeyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Isolated hardware that generates P-256 keys and performs ECDH with them.
///
/// Private scalars never leave the element. [`PrivateKey`] handles backed by
/// an element route every private-key operation through [`agree`].
///
/// [`agree`]: SecureElement::agree
pub trait SecureElement: Send + Sync {
    /// Whether the hardware is present and able to serve requests.
    fn is_available(&self) -> bool;

    /// Creates a new key pair inside the element.
    ///
    /// # Errors
    ///
    /// [`ProviderError::Unavailable`] when no hardware is present,
    /// [`ProviderError::Busy`] when the element should be retried, or
    /// [`ProviderError::Failure`] carrying the provider diagnostic.
    fn generate(&self, curve: CurveId) -> Result<(ElementKeyId, PublicKey), ProviderError>;

    /// Returns the public half of a key held by the element.
    ///
    /// # Errors
    ///
    /// [`ProviderError::NotFound`] if the element does not know `id`.
    fn public_key(&self, id: &ElementKeyId) -> Result<PublicKey, ProviderError>;

    /// Performs ECDH between the element key `id` and `peer`, returning the
    /// x-coordinate of the shared point.
    ///
    /// # Errors
    ///
    /// [`ProviderError::NotFound`] if the element does not know `id`, or
    /// [`ProviderError::Busy`] if the caller should retry.
    fn agree(
        &self,
        id: &ElementKeyId,
        peer: &PublicKey,
    ) -> Result<Zeroizing<[u8; FIELD_SIZE]>, ProviderError>;

    /// Whether the element still holds `id`.
    fn contains(&self, id: &ElementKeyId) -> bool;

    /// Destroys the key. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Provider failures while deleting.
    fn delete(&self, id: &ElementKeyId) -> Result<bool, ProviderError>;
}

/// Durable, access-controlled storage of private keys.
///
/// Implementations obtain what they need to persist through
/// [`PrivateKey::material`] and rebuild handles with
/// [`PrivateKey::from_material`]. For element-backed keys the material is a
/// reference into the element, never the scalar.
pub trait KeyStore: Send + Sync {
    /// Stores `key` under `label`, replacing any existing entry.
    ///
    /// # Errors
    ///
    /// Provider failures while writing.
    fn store(&self, label: &KeyLabel, key: &PrivateKey) -> Result<(), ProviderError>;

    /// Retrieves the key stored under `label`.
    ///
    /// # Errors
    ///
    /// [`ProviderError::NotFound`] if nothing is stored under `label`.
    fn retrieve(&self, label: &KeyLabel) -> Result<PrivateKey, ProviderError>;

    /// Removes the key stored under `label`. Returns `false` if absent.
    ///
    /// # Errors
    ///
    /// Provider failures while deleting.
    fn delete(&self, label: &KeyLabel) -> Result<bool, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        let label = KeyLabel::from("com.example.device-key");
        assert_eq!(label.to_string(), "com.example.device-key");
        assert_eq!(label.as_str(), "com.example.device-key");
    }

    #[test]
    fn test_element_key_id() {
        let id = ElementKeyId::new("se-7");
        assert_eq!(id.as_str(), "se-7");
        assert_eq!(id.to_string(), "se-7");
        assert_eq!(id, ElementKeyId::new(String::from("se-7")));
    }
}
