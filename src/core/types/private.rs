//! `PrivateKey` - P-256 private key handle.
//!
//! A private key is either held in process memory (software) or lives inside a
//! [`SecureElement`]. Callers never need to know which: every private-key
//! operation goes through [`PrivateKey::agree`], which delegates to the
//! element for hardware-backed keys.
//!
//! # Security
//!
//! - Software scalars are zeroized on drop
//! - Debug output redacts the key
//! - The handle is not `Clone`; ownership is exclusive to its creator
//! - The key is never rendered as a string by this crate
//! - Element keys are deleted from the element once no handle refers to them

use core::fmt::{self, Debug};
use std::sync::Arc;

use p256::ecdh::diffie_hellman;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::curve::{CurveId, FIELD_SIZE};
use crate::core::error::{CipherError, ProviderError};
use crate::core::store::{ElementKeyId, SecureElement};
use crate::core::types::PublicKey;

/// A reference to a key held inside a [`SecureElement`].
///
/// Clones share ownership of the element key. When the last clone is dropped
/// the key is deleted from the element, so a key kept in a [`KeyStore`] stays
/// alive for as long as the store holds its [`KeyMaterial`].
///
/// [`KeyStore`]: crate::core::store::KeyStore
#[derive(Clone)]
pub struct ElementKeyRef {
    guard: Arc<ElementKeyGuard>,
}

impl ElementKeyRef {
    /// Takes ownership of the element key `id`.
    #[must_use]
    pub fn new(element: Arc<dyn SecureElement>, id: ElementKeyId) -> Self {
        Self {
            guard: Arc::new(ElementKeyGuard { element, id }),
        }
    }

    /// The element-specific key id.
    #[must_use]
    pub fn id(&self) -> &ElementKeyId {
        &self.guard.id
    }

    /// The element holding the key.
    #[must_use]
    pub fn element(&self) -> &Arc<dyn SecureElement> {
        &self.guard.element
    }
}

impl Debug for ElementKeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementKeyRef").field("id", self.id()).finish()
    }
}

struct ElementKeyGuard {
    element: Arc<dyn SecureElement>,
    id: ElementKeyId,
}

impl Drop for ElementKeyGuard {
    fn drop(&mut self) {
        match self.element.delete(&self.id) {
            Ok(removed) => debug!(key_id = %self.id, removed, "released secure element key"),
            Err(err) => debug!(key_id = %self.id, error = %err, "failed to release secure element key"),
        }
    }
}

/// What a [`KeyStore`] persists for a private key.
///
/// [`KeyStore`]: crate::core::store::KeyStore
#[derive(Clone)]
pub enum KeyMaterial {
    /// Big-endian scalar of a software key. Zeroized on drop.
    Scalar(Zeroizing<[u8; FIELD_SIZE]>),
    /// Reference to a key that never leaves a secure element.
    Element(ElementKeyRef),
}

impl Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(_) => f.write_str("KeyMaterial::Scalar([REDACTED])"),
            Self::Element(key) => f.debug_tuple("KeyMaterial::Element").field(key).finish(),
        }
    }
}

enum Custody {
    Software(p256::SecretKey),
    Element(ElementKeyRef),
}

/// An owned P-256 private key handle.
///
/// Holds the matching public key alongside, so that ciphertexts can be bound
/// to the recipient without another round trip to the key's custodian.
pub struct PrivateKey {
    custody: Custody,
    public: PublicKey,
}

impl PrivateKey {
    pub(crate) fn from_secret(secret: p256::SecretKey) -> Self {
        let public = PublicKey::from(secret.public_key());
        Self {
            custody: Custody::Software(secret),
            public,
        }
    }

    pub(crate) fn from_element(key: ElementKeyRef, public: PublicKey) -> Self {
        Self {
            custody: Custody::Element(key),
            public,
        }
    }

    /// Imports a software key from its 32-byte big-endian scalar.
    ///
    /// Returns `None` if the scalar is zero or not below the group order.
    #[must_use]
    pub fn from_scalar_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != FIELD_SIZE {
            return None;
        }
        p256::SecretKey::from_slice(bytes).ok().map(Self::from_secret)
    }

    /// Rebuilds a handle from material previously obtained with
    /// [`material`](Self::material).
    ///
    /// # Errors
    ///
    /// [`ProviderError::Failure`] for an invalid scalar, or whatever the
    /// element reports when asked for the public half of its key.
    pub fn from_material(material: KeyMaterial) -> Result<Self, ProviderError> {
        match material {
            KeyMaterial::Scalar(scalar) => {
                Self::from_scalar_bytes(scalar.as_slice()).ok_or(ProviderError::Failure {
                    code: -1,
                    message: "stored scalar is not a valid P-256 key".to_string(),
                })
            }
            KeyMaterial::Element(key) => {
                let public = key.element().public_key(key.id())?;
                Ok(Self::from_element(key, public))
            }
        }
    }

    /// Returns the material a key store needs to persist this key.
    #[must_use]
    pub fn material(&self) -> KeyMaterial {
        match &self.custody {
            Custody::Software(secret) => {
                let mut scalar = Zeroizing::new([0u8; FIELD_SIZE]);
                scalar.copy_from_slice(&secret.to_bytes());
                KeyMaterial::Scalar(scalar)
            }
            Custody::Element(key) => KeyMaterial::Element(key.clone()),
        }
    }

    /// The curve this key lives on.
    #[must_use]
    pub const fn curve(&self) -> CurveId {
        CurveId::P256
    }

    /// The matching public key.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Whether private-key operations are performed by a secure element.
    #[must_use]
    pub const fn is_secure_element_backed(&self) -> bool {
        matches!(self.custody, Custody::Element(_))
    }

    /// The element key id, for element-backed keys.
    #[must_use]
    pub fn element_key_id(&self) -> Option<&ElementKeyId> {
        match &self.custody {
            Custody::Software(_) => None,
            Custody::Element(key) => Some(key.id()),
        }
    }

    /// Whether the handle can still be used.
    ///
    /// Software keys are always usable; element keys are usable while the
    /// element still holds them.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        match &self.custody {
            Custody::Software(_) => true,
            Custody::Element(key) => key.element().contains(key.id()),
        }
    }

    /// Performs ECDH with `peer` and returns the shared x-coordinate.
    ///
    /// # Errors
    ///
    /// [`CipherError::Busy`] if the secure element asks to be retried,
    /// [`CipherError::Rejected`] for any other failure.
    pub fn agree(&self, peer: &PublicKey) -> Result<Zeroizing<[u8; FIELD_SIZE]>, CipherError> {
        match &self.custody {
            Custody::Software(secret) => {
                let shared = diffie_hellman(secret.to_nonzero_scalar(), peer.as_inner().as_affine());
                let mut out = Zeroizing::new([0u8; FIELD_SIZE]);
                out.copy_from_slice(shared.raw_secret_bytes());
                Ok(out)
            }
            Custody::Element(key) => key.element().agree(key.id(), peer).map_err(CipherError::from),
        }
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("PrivateKey");
        s.field("curve", &self.curve().name());
        match &self.custody {
            Custody::Software(_) => s.field("key", &"[REDACTED]"),
            Custody::Element(key) => s.field("element_key", key.id()),
        };
        s.finish()
    }
}
