//! Key pair generation.
//!
//! Software keys are drawn from the operating system RNG. Secure-element keys
//! are created by the attached [`SecureElement`] and never leave it; the
//! generator only receives the element key id and the public point. The
//! element key is deleted again once every handle to it has been dropped.

use core::fmt::{self, Debug};
use std::sync::Arc;

use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::curve::{CurveId, FIELD_SIZE};
use crate::core::error::{GenerationError, GenerationResult, ProviderError};
use crate::core::store::SecureElement;
use crate::core::types::{ElementKeyRef, KeyPair, PrivateKey};

/// How many times a random scalar outside `[1, n)` is redrawn before giving up.
///
/// The chance of a single draw being out of range is about 2^-32.
const MAX_SCALAR_ATTEMPTS: usize = 8;

/// Draws a uniformly random P-256 secret key from the OS RNG.
///
/// Used for generated key pairs and for per-message ephemeral keys.
pub(crate) fn random_secret_key() -> Result<p256::SecretKey, ProviderError> {
    let mut bytes = Zeroizing::new([0u8; FIELD_SIZE]);

    for _ in 0..MAX_SCALAR_ATTEMPTS {
        OsRng
            .try_fill_bytes(bytes.as_mut_slice())
            .map_err(|err| ProviderError::Failure {
                code: err
                    .code()
                    .and_then(|code| i32::try_from(code.get()).ok())
                    .unwrap_or(-1),
                message: err.to_string(),
            })?;

        if let Ok(secret) = p256::SecretKey::from_slice(bytes.as_slice()) {
            return Ok(secret);
        }
    }

    Err(ProviderError::Failure {
        code: -1,
        message: "random scalar out of range".to_string(),
    })
}

/// Parameters for [`KeyPairGenerator`].
///
/// Deserializes from partial input; missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use enclave_ecies::core::operations::GeneratorConfig;
///
/// let config = GeneratorConfig::secure_element()
///     .fallback_to_software(true);
/// assert!(config.get_secure_element_backed());
/// assert!(config.get_fallback_to_software());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    curve: CurveId,
    secure_element_backed: bool,
    fallback_to_software: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::software()
    }
}

impl GeneratorConfig {
    /// Software keys only.
    #[must_use]
    pub const fn software() -> Self {
        Self {
            curve: CurveId::P256,
            secure_element_backed: false,
            fallback_to_software: false,
        }
    }

    /// Keys created inside a secure element, failing when none is available.
    #[must_use]
    pub const fn secure_element() -> Self {
        Self {
            curve: CurveId::P256,
            secure_element_backed: true,
            fallback_to_software: false,
        }
    }

    /// Sets the curve.
    #[must_use]
    pub const fn curve(mut self, curve: CurveId) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the curve by name (`secp256r1`, `P-256` or `prime256v1`).
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::UnsupportedCurve` for any other name.
    pub fn curve_name(self, name: &str) -> GenerationResult<Self> {
        Ok(self.curve(name.parse()?))
    }

    /// Requests that the private key be created inside a secure element.
    #[must_use]
    pub const fn secure_element_backed(mut self, enabled: bool) -> Self {
        self.secure_element_backed = enabled;
        self
    }

    /// Allows software generation when a secure element was requested but
    /// cannot serve the request.
    #[must_use]
    pub const fn fallback_to_software(mut self, enabled: bool) -> Self {
        self.fallback_to_software = enabled;
        self
    }

    /// Returns the configured curve.
    #[must_use]
    pub const fn get_curve(&self) -> CurveId {
        self.curve
    }

    /// Returns whether a secure element is requested.
    #[must_use]
    pub const fn get_secure_element_backed(&self) -> bool {
        self.secure_element_backed
    }

    /// Returns whether software fallback is allowed.
    #[must_use]
    pub const fn get_fallback_to_software(&self) -> bool {
        self.fallback_to_software
    }
}

/// Creates P-256 key pairs.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use enclave_ecies::core::operations::{GeneratorConfig, KeyPairGenerator};
/// use enclave_ecies::core::store::MemorySecureElement;
///
/// let generator = KeyPairGenerator::new(GeneratorConfig::secure_element())
///     .with_secure_element(Arc::new(MemorySecureElement::new()));
///
/// let pair = generator.generate_key_pair()?;
/// assert!(pair.private_key().is_secure_element_backed());
/// # Ok::<(), enclave_ecies::GenerationError>(())
/// ```
#[derive(Clone, Default)]
pub struct KeyPairGenerator {
    config: GeneratorConfig,
    element: Option<Arc<dyn SecureElement>>,
}

impl KeyPairGenerator {
    /// Creates a generator with no secure element attached.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            element: None,
        }
    }

    /// Attaches the secure element used for hardware-backed keys.
    #[must_use]
    pub fn with_secure_element(mut self, element: Arc<dyn SecureElement>) -> Self {
        self.element = Some(element);
        self
    }

    /// Returns the generator's configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a new key pair.
    ///
    /// # Errors
    ///
    /// - `GenerationError::SecureElementUnavailable` if a secure element was
    ///   requested, none can serve it, and software fallback is disabled
    /// - `GenerationError::Busy` if the secure element asked to be retried
    /// - `GenerationError::Provider` if the RNG or the element failed
    pub fn generate_key_pair(&self) -> GenerationResult<KeyPair> {
        let curve = self.config.curve;

        if self.config.secure_element_backed {
            match self.element.as_ref().filter(|element| element.is_available()) {
                Some(element) => match element.generate(curve) {
                    Ok((id, public)) => {
                        debug!(key_id = %id, %curve, "generated secure element key pair");
                        let key = ElementKeyRef::new(Arc::clone(element), id);
                        return Ok(KeyPair::from_private(PrivateKey::from_element(key, public)));
                    }
                    Err(ProviderError::Unavailable) if self.config.fallback_to_software => {
                        debug!("secure element went away, falling back to software key");
                    }
                    Err(err) => {
                        debug!(error = %err, "secure element refused key generation");
                        return Err(err.into());
                    }
                },
                None if self.config.fallback_to_software => {
                    debug!("no secure element available, falling back to software key");
                }
                None => return Err(GenerationError::SecureElementUnavailable),
            }
        }

        let secret = random_secret_key()?;
        debug!(%curve, "generated software key pair");
        Ok(KeyPair::from_private(PrivateKey::from_secret(secret)))
    }
}

impl Debug for KeyPairGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPairGenerator")
            .field("config", &self.config)
            .field("secure_element", &self.element.is_some())
            .finish()
    }
}
