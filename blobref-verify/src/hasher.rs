//! Content hash primitives
//!
//! The blob id digest is a named, swappable primitive. [`Sha256Hasher`] is the
//! network's content-addressing hash and the default everywhere; the other
//! implementations exist for networks or tooling that address blobs
//! differently.

use blobref_format::{BlobId, HashAlgorithm};
use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// A deterministic, reentrant 256-bit hash
pub trait BlobHasher {
    /// Which algorithm this hasher implements
    fn algorithm(&self) -> HashAlgorithm;

    /// Hash `bytes` into a 32-byte digest
    fn digest(&self, bytes: &[u8]) -> [u8; BlobId::SIZE];

    /// Hash `bytes` into a blob id
    fn blob_id(&self, bytes: &[u8]) -> BlobId {
        BlobId::new(self.digest(bytes))
    }
}

/// SHA-256
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl BlobHasher for Sha256Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha256
    }

    fn digest(&self, bytes: &[u8]) -> [u8; BlobId::SIZE] {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = hasher.finalize();

        let mut out = [0u8; BlobId::SIZE];
        out.copy_from_slice(&hash);
        out
    }
}

/// Keccak-256 (pre-standard SHA-3 padding)
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl BlobHasher for Keccak256Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Keccak256
    }

    fn digest(&self, bytes: &[u8]) -> [u8; BlobId::SIZE] {
        let mut hasher = Keccak256::new();
        hasher.update(bytes);
        let hash = hasher.finalize();

        let mut out = [0u8; BlobId::SIZE];
        out.copy_from_slice(&hash);
        out
    }
}

/// BLAKE3 with the default 32-byte output
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl BlobHasher for Blake3Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Blake3
    }

    fn digest(&self, bytes: &[u8]) -> [u8; BlobId::SIZE] {
        *blake3::hash(bytes).as_bytes()
    }
}

/// Hasher implementing `algorithm`
pub fn hasher_for(algorithm: HashAlgorithm) -> &'static dyn BlobHasher {
    match algorithm {
        HashAlgorithm::Sha256 => &Sha256Hasher,
        HashAlgorithm::Keccak256 => &Keccak256Hasher,
        HashAlgorithm::Blake3 => &Blake3Hasher,
    }
}
