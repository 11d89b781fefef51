//! Hash algorithm selection for content addressing

use serde::{Deserialize, Serialize};
use std::fmt;

/// 256-bit hash used to derive blob ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256, the network's content-addressing hash
    #[default]
    Sha256,
    /// Keccak-256
    Keccak256,
    /// BLAKE3 (32-byte output)
    Blake3,
}

impl HashAlgorithm {
    /// All supported algorithms
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Blake3,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sha256() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
    }

    #[test]
    fn test_serde_names() {
        for algo in HashAlgorithm::ALL {
            let json = serde_json::to_string(&algo).unwrap();
            assert_eq!(json, format!("\"{}\"", algo.name()));
            let back: HashAlgorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, algo);
        }
    }
}
