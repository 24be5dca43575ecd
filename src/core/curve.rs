//! Curve identifier and the size constants derived from it.
//!
//! Exactly one curve is supported: NIST P-256 (`secp256r1`). It is a design
//! constant rather than a tunable so that the exported key format and the
//! ciphertext layout stay the same across every deployment. [`CurveId`]
//! exists so configuration can name the curve explicitly and so the
//! descriptive key attributes can report it.

use core::fmt::{self, Display};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::GenerationError;

/// Size of a P-256 field element / scalar in bytes.
pub const FIELD_SIZE: usize = 32;

/// Size of an uncompressed SEC1 P-256 point (`0x04 || X || Y`).
pub const UNCOMPRESSED_POINT_SIZE: usize = 1 + 2 * FIELD_SIZE;

/// Identifier for the elliptic curve a key lives on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    /// NIST P-256, also known as `secp256r1` and `prime256v1`.
    #[default]
    #[serde(rename = "secp256r1", alias = "P-256", alias = "prime256v1")]
    P256,
}

impl CurveId {
    /// The SEC 2 curve name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::P256 => "secp256r1",
        }
    }

    /// Key size in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::P256 => 256,
        }
    }

    /// Dotted OID of the named curve as it appears in SPKI parameters.
    #[must_use]
    pub const fn oid(self) -> &'static str {
        match self {
            Self::P256 => "1.2.840.10045.3.1.7",
        }
    }
}

impl Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CurveId {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secp256r1" | "P-256" | "prime256v1" => Ok(Self::P256),
            other => Err(GenerationError::UnsupportedCurve(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_constants() {
        assert_eq!(CurveId::P256.name(), "secp256r1");
        assert_eq!(CurveId::P256.bits(), 256);
        assert_eq!(CurveId::P256.oid(), "1.2.840.10045.3.1.7");
        assert_eq!(UNCOMPRESSED_POINT_SIZE, 65);
    }

    #[test]
    fn test_display() {
        assert_eq!(CurveId::P256.to_string(), "secp256r1");
    }

    #[test]
    fn test_from_str_aliases() -> Result<(), GenerationError> {
        assert_eq!("secp256r1".parse::<CurveId>()?, CurveId::P256);
        assert_eq!("P-256".parse::<CurveId>()?, CurveId::P256);
        assert_eq!("prime256v1".parse::<CurveId>()?, CurveId::P256);
        Ok(())
    }

    #[test]
    fn test_from_str_rejects_other_curves() {
        let result = "secp384r1".parse::<CurveId>();
        assert!(matches!(result, Err(GenerationError::UnsupportedCurve(name)) if name == "secp384r1"));
    }

    #[test]
    fn test_default() {
        assert_eq!(CurveId::default(), CurveId::P256);
    }
}
