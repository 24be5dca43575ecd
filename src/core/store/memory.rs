//! In-process implementations of the custody traits.
//!
//! [`MemorySecureElement`] mimics a secure element: it hands out key ids and
//! public keys but never scalars, and can be switched to "unavailable" or
//! "busy" so callers can exercise fallback and retry paths. It offers no
//! isolation beyond the type system.
//!
//! [`MemoryKeyStore`] keeps [`KeyMaterial`] in a map keyed by [`KeyLabel`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::curve::{CurveId, FIELD_SIZE};
use crate::core::error::ProviderError;
use crate::core::operations::generate::random_secret_key;
use crate::core::store::{ElementKeyId, KeyLabel, KeyStore, SecureElement};
use crate::core::types::{KeyMaterial, PrivateKey, PublicKey};

/// A [`SecureElement`] that keeps its keys in process memory.
#[derive(Default)]
pub struct MemorySecureElement {
    keys: RwLock<HashMap<ElementKeyId, p256::SecretKey>>,
    next_id: AtomicU64,
    unavailable: AtomicBool,
    busy: AtomicBool,
}

impl MemorySecureElement {
    /// Creates an empty, available element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the element as present or absent.
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// While set, every operation reports [`ProviderError::Busy`].
    pub fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::SeqCst);
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    /// Whether the element holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }

    fn check_ready(&self) -> Result<(), ProviderError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ProviderError::Unavailable);
        }
        if self.busy.load(Ordering::SeqCst) {
            return Err(ProviderError::Busy);
        }
        Ok(())
    }
}

impl SecureElement for MemorySecureElement {
    fn is_available(&self) -> bool {
        !self.unavailable.load(Ordering::SeqCst)
    }

    fn generate(&self, curve: CurveId) -> Result<(ElementKeyId, PublicKey), ProviderError> {
        self.check_ready()?;

        let secret = random_secret_key()?;
        let public = PublicKey::from(secret.public_key());
        let id = ElementKeyId::new(format!(
            "mem-se-{}",
            self.next_id.fetch_add(1, Ordering::SeqCst)
        ));

        self.keys.write().insert(id.clone(), secret);
        debug!(key_id = %id, %curve, "secure element generated key");
        Ok((id, public))
    }

    fn public_key(&self, id: &ElementKeyId) -> Result<PublicKey, ProviderError> {
        self.check_ready()?;
        self.keys
            .read()
            .get(id)
            .map(|secret| PublicKey::from(secret.public_key()))
            .ok_or(ProviderError::NotFound)
    }

    fn agree(
        &self,
        id: &ElementKeyId,
        peer: &PublicKey,
    ) -> Result<Zeroizing<[u8; FIELD_SIZE]>, ProviderError> {
        self.check_ready()?;
        let keys = self.keys.read();
        let secret = keys.get(id).ok_or(ProviderError::NotFound)?;

        let shared =
            p256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_inner().as_affine());
        let mut out = Zeroizing::new([0u8; FIELD_SIZE]);
        out.copy_from_slice(shared.raw_secret_bytes());
        Ok(out)
    }

    fn contains(&self, id: &ElementKeyId) -> bool {
        self.keys.read().contains_key(id)
    }

    fn delete(&self, id: &ElementKeyId) -> Result<bool, ProviderError> {
        self.check_ready()?;
        let removed = self.keys.write().remove(id).is_some();
        debug!(key_id = %id, removed, "secure element delete");
        Ok(removed)
    }
}

/// A [`KeyStore`] that keeps key material in process memory.
#[derive(Default)]
pub struct MemoryKeyStore {
    entries: RwLock<HashMap<KeyLabel, KeyMaterial>>,
}

impl MemoryKeyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels currently stored, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<KeyLabel> {
        let mut labels: Vec<KeyLabel> = self.entries.read().keys().cloned().collect();
        labels.sort();
        labels
    }
}

impl KeyStore for MemoryKeyStore {
    fn store(&self, label: &KeyLabel, key: &PrivateKey) -> Result<(), ProviderError> {
        let replaced = self
            .entries
            .write()
            .insert(label.clone(), key.material())
            .is_some();
        debug!(%label, replaced, element = key.is_secure_element_backed(), "stored key");
        Ok(())
    }

    fn retrieve(&self, label: &KeyLabel) -> Result<PrivateKey, ProviderError> {
        let material = self
            .entries
            .read()
            .get(label)
            .cloned()
            .ok_or(ProviderError::NotFound)?;
        PrivateKey::from_material(material)
    }

    fn delete(&self, label: &KeyLabel) -> Result<bool, ProviderError> {
        Ok(self.entries.write().remove(label).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::types::ElementKeyRef;

    #[test]
    fn test_element_generate_and_lookup() -> Result<(), ProviderError> {
        let element = MemorySecureElement::new();
        assert!(element.is_empty());

        let (id, public) = element.generate(CurveId::P256)?;
        assert_eq!(element.len(), 1);
        assert!(element.contains(&id));
        assert_eq!(element.public_key(&id)?, public);
        Ok(())
    }

    #[test]
    fn test_element_ids_are_unique() -> Result<(), ProviderError> {
        let element = MemorySecureElement::new();
        let (a, _) = element.generate(CurveId::P256)?;
        let (b, _) = element.generate(CurveId::P256)?;
        assert_ne!(a, b);
        Ok(())
    }

    #[test]
    fn test_element_unavailable() {
        let element = MemorySecureElement::new();
        element.set_available(false);
        assert!(!element.is_available());
        assert_eq!(
            element.generate(CurveId::P256).map(|_| ()),
            Err(ProviderError::Unavailable)
        );
    }

    #[test]
    fn test_element_busy() -> Result<(), ProviderError> {
        let element = MemorySecureElement::new();
        let (id, public) = element.generate(CurveId::P256)?;

        element.set_busy(true);
        assert!(matches!(element.agree(&id, &public), Err(ProviderError::Busy)));

        element.set_busy(false);
        assert!(element.agree(&id, &public).is_ok());
        Ok(())
    }

    #[test]
    fn test_element_delete() -> Result<(), ProviderError> {
        let element = MemorySecureElement::new();
        let (id, public) = element.generate(CurveId::P256)?;

        assert!(element.delete(&id)?);
        assert!(!element.delete(&id)?);
        assert!(matches!(element.agree(&id, &public), Err(ProviderError::NotFound)));
        assert_eq!(element.public_key(&id), Err(ProviderError::NotFound));
        Ok(())
    }

    #[test]
    fn test_store_roundtrip_software_key() -> Result<(), ProviderError> {
        let store = MemoryKeyStore::new();
        let key = PrivateKey::from_secret(random_secret_key()?);
        let label = KeyLabel::from("device");

        store.store(&label, &key)?;
        let restored = store.retrieve(&label)?;
        assert_eq!(restored.public_key(), key.public_key());
        assert!(!restored.is_secure_element_backed());
        Ok(())
    }

    #[test]
    fn test_store_roundtrip_element_key() -> Result<(), ProviderError> {
        let element = Arc::new(MemorySecureElement::new());
        let (id, public) = element.generate(CurveId::P256)?;
        let key = PrivateKey::from_element(ElementKeyRef::new(element.clone(), id.clone()), public);

        let store = MemoryKeyStore::new();
        let label = KeyLabel::from("enclave");
        store.store(&label, &key)?;

        let restored = store.retrieve(&label)?;
        assert!(restored.is_secure_element_backed());
        assert_eq!(restored.element_key_id(), Some(&id));
        assert_eq!(restored.public_key(), key.public_key());
        Ok(())
    }

    #[test]
    fn test_store_missing_and_delete() -> Result<(), ProviderError> {
        let store = MemoryKeyStore::new();
        let label = KeyLabel::from("missing");
        assert_eq!(store.retrieve(&label).map(|_| ()), Err(ProviderError::NotFound));
        assert!(!store.delete(&label)?);

        let key = PrivateKey::from_secret(random_secret_key()?);
        store.store(&label, &key)?;
        assert_eq!(store.labels(), vec![label.clone()]);
        assert!(store.delete(&label)?);
        assert!(store.labels().is_empty());
        Ok(())
    }
}
