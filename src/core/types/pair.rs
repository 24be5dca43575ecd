//! `KeyPair` - a private key together with its public half.

use crate::core::types::{PrivateKey, PublicKey};

/// A P-256 key pair produced by [`KeyPairGenerator`].
///
/// Both halves are on the same curve and mathematically paired. The pair owns
/// both handles; dropping it releases them.
///
/// [`KeyPairGenerator`]: crate::core::operations::KeyPairGenerator
#[derive(Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    pub(crate) fn from_private(private: PrivateKey) -> Self {
        let public = private.public_key().clone();
        Self { private, public }
    }

    /// The private half.
    #[must_use]
    pub const fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The public half.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Splits the pair into its owned halves.
    #[must_use]
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}
