//! # Loader Image Layout
//!
//! A loader is a small program that jumps into a blob referenced by id.
//!
//! Binary format (all offsets in bytes):
//! ```text
//! Offset  Size  Field
//! ──────────────────────────────────
//! 0x00    48    bootstrap instructions
//! 0x30    32    blob id
//! 0x50    8     section length (big-endian u64)
//! 0x58    N     configurables (N = section length)
//! ```

use crate::blob_id::BlobId;
use std::fmt;

/// Size of the bootstrap instruction block
pub const INSTRUCTIONS_LEN: usize = 48;

/// Offset of the embedded blob id
pub const BLOB_ID_OFFSET: usize = INSTRUCTIONS_LEN;

/// Offset of the big-endian section length
pub const SECTION_LENGTH_OFFSET: usize = BLOB_ID_OFFSET + BlobId::SIZE;

/// Size of the section length field
pub const SECTION_LENGTH_LEN: usize = 8;

/// Fixed header size; shorter images are not loaders
pub const HEADER_LEN: usize = SECTION_LENGTH_OFFSET + SECTION_LENGTH_LEN;

/// Bootstrap instruction block of a loader
pub type LoaderInstructions = [u8; INSTRUCTIONS_LEN];

/// Positional decomposition of a loader image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderComponents {
    /// Bootstrap code that loads and jumps into the blob
    pub instructions: LoaderInstructions,

    /// Blob this loader delegates execution to
    pub blob_id: BlobId,

    /// Declared length of the loader's configurables section
    pub section_length: u64,

    /// Configurables bytes, at most `section_length` of them
    pub configurables: Vec<u8>,

    /// Bytes past the declared section, if any
    pub trailing: Vec<u8>,
}

impl LoaderComponents {
    /// Serialize back to a loader image
    ///
    /// The declared section length is written as is; `configurables` and
    /// `trailing` follow the header unchanged.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(HEADER_LEN + self.configurables.len() + self.trailing.len());

        bytes.extend_from_slice(&self.instructions);
        bytes.extend_from_slice(self.blob_id.as_bytes());
        bytes.extend_from_slice(&self.section_length.to_be_bytes());
        bytes.extend_from_slice(&self.configurables);
        bytes.extend_from_slice(&self.trailing);

        bytes
    }

    /// Total image length
    pub fn image_len(&self) -> usize {
        HEADER_LEN + self.configurables.len() + self.trailing.len()
    }

    /// True when the section length accounts for exactly the bytes after the header
    pub fn is_section_length_consistent(&self) -> bool {
        self.trailing.is_empty() && self.configurables.len() as u64 == self.section_length
    }
}

impl fmt::Display for LoaderComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loader")?;
        writeln!(f, "  Blob id:        {}", self.blob_id)?;
        writeln!(f, "  Section length: {} bytes", self.section_length)?;
        writeln!(f, "  Configurables:  {} bytes", self.configurables.len())?;
        writeln!(f, "  Trailing:       {} bytes", self.trailing.len())?;
        Ok(())
    }
}
