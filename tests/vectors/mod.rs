//! Test vector types for the known-answer tests.
//!
//! The JSON files next to this module were produced with an independent
//! P-256 / HKDF / AES-GCM implementation.

// Some fields are only read by a subset of the tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

// =============================================================================
// Public key encoding
// =============================================================================

/// Test vector for base64 DER `SubjectPublicKeyInfo` decoding.
#[derive(Debug, Deserialize)]
pub struct PublicKeyTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Base64 SPKI string
    pub key: String,
    /// Hex-encoded uncompressed point (null for fail tests)
    pub sec1: Option<String>,
    /// Expected application label (null for fail tests)
    #[serde(rename = "application-label")]
    pub application_label: Option<String>,
}

// =============================================================================
// Decryption
// =============================================================================

/// Test vector for decrypting a ciphertext with a fixed recipient scalar.
#[derive(Debug, Deserialize)]
pub struct EciesTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded 32-byte recipient scalar
    #[serde(rename = "private-scalar")]
    pub private_scalar: String,
    /// Base64 SPKI of the key the ciphertext was sealed to
    #[serde(rename = "public-key")]
    pub public_key: String,
    /// Expected plaintext (null for fail tests)
    pub message: Option<String>,
    /// Base64 ciphertext
    pub ciphertext: String,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
