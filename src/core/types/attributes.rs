//! Descriptive, read-only attributes of a key handle.
//!
//! Attributes are derived on demand by [`KeyCodec::attributes`] and have no
//! lifecycle of their own. They can be read as typed fields or through the
//! string mapping used by platform key stores:
//!
//! | Name | Values |
//! |------|--------|
//! | `key class` | `public`, `private` |
//! | `key type` | `ec` |
//! | `key size` | `256` |
//! | `curve` | `secp256r1` |
//! | `token` | `software`, `secure-element` |
//! | `application label` | public key identifier |
//!
//! [`KeyCodec::attributes`]: crate::core::operations::KeyCodec::attributes

use core::fmt::{self, Display};

use serde::Serialize;

use crate::core::curve::CurveId;
use crate::core::types::{PrivateKey, PublicKey};

/// Attribute name for the key class.
pub const KEY_CLASS: &str = "key class";
/// Attribute name for the key type.
pub const KEY_TYPE: &str = "key type";
/// Attribute name for the key size in bits.
pub const KEY_SIZE: &str = "key size";
/// Attribute name for the curve.
pub const CURVE: &str = "curve";
/// Attribute name for where the private key lives.
pub const TOKEN: &str = "token";
/// Attribute name for the public key identifier.
pub const APPLICATION_LABEL: &str = "application label";

/// The only key type this crate produces.
pub const KEY_TYPE_EC: &str = "ec";

/// Whether a handle refers to the public or private half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyClass {
    /// Public key.
    Public,
    /// Private key.
    Private,
}

impl KeyClass {
    /// Attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl Display for KeyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where private-key operations for the key are performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyToken {
    /// In process memory.
    Software,
    /// Inside a secure element.
    SecureElement,
}

impl KeyToken {
    /// Attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::SecureElement => "secure-element",
        }
    }
}

impl Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed reference to either half of a key pair.
///
/// Built from a public or private handle; a [`KeyPair`](crate::KeyPair) has to
/// name the half it means.
#[derive(Debug, Clone, Copy)]
pub enum KeyRef<'a> {
    /// A public key handle.
    Public(&'a PublicKey),
    /// A private key handle.
    Private(&'a PrivateKey),
}

impl<'a> From<&'a PublicKey> for KeyRef<'a> {
    fn from(key: &'a PublicKey) -> Self {
        Self::Public(key)
    }
}

impl<'a> From<&'a PrivateKey> for KeyRef<'a> {
    fn from(key: &'a PrivateKey) -> Self {
        Self::Private(key)
    }
}

/// Descriptive metadata about a key handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyAttributes {
    key_class: KeyClass,
    key_type: &'static str,
    curve: CurveId,
    key_size_bits: u32,
    token: KeyToken,
    application_label: String,
}

impl KeyAttributes {
    pub(crate) fn new(
        key_class: KeyClass,
        curve: CurveId,
        token: KeyToken,
        application_label: String,
    ) -> Self {
        Self {
            key_class,
            key_type: KEY_TYPE_EC,
            curve,
            key_size_bits: curve.bits(),
            token,
            application_label,
        }
    }

    /// Public or private.
    #[must_use]
    pub const fn key_class(&self) -> KeyClass {
        self.key_class
    }

    /// Key type, always `ec`.
    #[must_use]
    pub const fn key_type(&self) -> &'static str {
        self.key_type
    }

    /// Curve of the key.
    #[must_use]
    pub const fn curve(&self) -> CurveId {
        self.curve
    }

    /// Key size in bits.
    #[must_use]
    pub const fn key_size_bits(&self) -> u32 {
        self.key_size_bits
    }

    /// Where private-key operations happen.
    #[must_use]
    pub const fn token(&self) -> KeyToken {
        self.token
    }

    /// Identifier of the public key (shared by both halves of a pair).
    #[must_use]
    pub fn application_label(&self) -> &str {
        &self.application_label
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        match name {
            KEY_CLASS => Some(self.key_class.as_str().to_string()),
            KEY_TYPE => Some(self.key_type.to_string()),
            KEY_SIZE => Some(self.key_size_bits.to_string()),
            CURVE => Some(self.curve.name().to_string()),
            TOKEN => Some(self.token.as_str().to_string()),
            APPLICATION_LABEL => Some(self.application_label.clone()),
            _ => None,
        }
    }

    /// All attributes as `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        [KEY_CLASS, KEY_TYPE, KEY_SIZE, CURVE, TOKEN, APPLICATION_LABEL]
            .into_iter()
            .filter_map(move |name| self.get(name).map(|value| (name, value)))
    }
}
