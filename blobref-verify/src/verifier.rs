//! # Loader Verifier
//!
//! Checks that a loader's embedded blob id is the digest of a full program's
//! code section.
//!
//! Shape problems with the full program (a layout that does not fit the
//! image, or a duplicate section offset under [`DuplicateOffsetPolicy::Reject`])
//! are errors. A loader that is malformed or points somewhere else is an
//! ordinary negative answer.

use crate::blob::compute_blob_id_with;
use crate::error::{Result, VerifyError};
use crate::hasher::hasher_for;
use crate::parser::{check_section_length, parse_loader};
use blobref_format::{BlobId, HashAlgorithm, LayoutDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What to do when several configurables share the section offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateOffsetPolicy {
    /// Any of the entries is a valid split point
    #[default]
    Allow,
    /// Fail with `FormatError::DuplicateOffset`
    Reject,
}

/// Verifier configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Hash used to derive blob ids
    pub hash: HashAlgorithm,

    /// Handling of layouts with a shared section offset
    pub duplicate_offsets: DuplicateOffsetPolicy,

    /// Reject loaders whose section length does not match the bytes after
    /// the header
    pub strict_section_length: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            hash: HashAlgorithm::Sha256,
            duplicate_offsets: DuplicateOffsetPolicy::Allow,
            strict_section_length: false,
        }
    }
}

/// Outcome of verifying a loader against a full program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The loader references the program's blob id
    Match,

    /// The loader references a different blob
    Mismatch { expected: BlobId, found: BlobId },

    /// The loader image is shorter than the loader header
    NotALoader { len: usize },

    /// The section length is inconsistent (strict mode only)
    SectionLengthMismatch { declared: u64, actual: usize },
}

impl Verification {
    pub fn is_match(&self) -> bool {
        matches!(self, Verification::Match)
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::Match => write!(f, "match"),
            Verification::Mismatch { expected, found } => {
                write!(f, "mismatch: expected {expected}, found {found}")
            }
            Verification::NotALoader { len } => write!(f, "not a loader ({len} bytes)"),
            Verification::SectionLengthMismatch { declared, actual } => write!(
                f,
                "section length mismatch: declared {declared}, found {actual}"
            ),
        }
    }
}

/// Loader verifier
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Blob id of a full program under this verifier's configuration
    pub fn blob_id(&self, image: &[u8], layout: &LayoutDescriptor) -> Result<BlobId> {
        if self.config.duplicate_offsets == DuplicateOffsetPolicy::Reject {
            layout.ensure_unique_section_offset()?;
        }
        compute_blob_id_with(hasher_for(self.config.hash), image, layout)
    }

    /// Verify `loader_image` against the full program and report why it failed
    pub fn verify_detailed(
        &self,
        full_image: &[u8],
        full_layout: &LayoutDescriptor,
        loader_image: &[u8],
    ) -> Result<Verification> {
        let expected = self.blob_id(full_image, full_layout)?;

        let outcome = match parse_loader(loader_image) {
            None => Verification::NotALoader {
                len: loader_image.len(),
            },
            Some(loader) => match check_section_length(&loader) {
                Err(VerifyError::SectionLengthMismatch { declared, actual })
                    if self.config.strict_section_length =>
                {
                    Verification::SectionLengthMismatch { declared, actual }
                }
                _ if loader.blob_id == expected => Verification::Match,
                _ => Verification::Mismatch {
                    expected,
                    found: loader.blob_id,
                },
            },
        };

        debug!(%expected, %outcome, "verified loader");
        Ok(outcome)
    }

    /// True iff the loader's embedded blob id equals the program's blob id
    pub fn verify(
        &self,
        full_image: &[u8],
        full_layout: &LayoutDescriptor,
        loader_image: &[u8],
    ) -> Result<bool> {
        Ok(self
            .verify_detailed(full_image, full_layout, loader_image)?
            .is_match())
    }
}

/// Verify a loader with the default configuration (SHA-256, lenient)
pub fn verify(
    full_image: &[u8],
    full_layout: &LayoutDescriptor,
    loader_image: &[u8],
) -> Result<bool> {
    Verifier::default().verify(full_image, full_layout, loader_image)
}
