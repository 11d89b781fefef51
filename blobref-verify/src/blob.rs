//! # Blob Identifier
//!
//! Splits a program image into its code and configurables sections and
//! derives the blob id from the code section alone.
//!
//! ```text
//! 0                     section_offset             len
//! ├──────── code ─────────────┼───── configurables ───┤
//! └── hashed into BlobId ─────┘
//! ```
//!
//! Two images with byte-identical code sections always share a blob id,
//! whatever their configurables contain.

use crate::error::Result;
use crate::hasher::{BlobHasher, Sha256Hasher};
use blobref_format::{BlobId, FormatError, LayoutDescriptor};
use tracing::{debug, trace};

/// Code and configurables sections of a program image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramSections<'a> {
    /// Executable instructions, `[0, offset)`
    pub code: &'a [u8],
    /// Constant data patched per deployment, `[offset, len)`
    pub configurables: &'a [u8],
}

impl ProgramSections<'_> {
    /// Offset where the configurables section starts
    pub fn offset(&self) -> usize {
        self.code.len()
    }
}

/// Start of the configurables section for `layout`
///
/// Emptiness is ruled out when the [`LayoutDescriptor`] is built, so this
/// never fails.
#[inline]
pub fn section_offset(layout: &LayoutDescriptor) -> usize {
    layout.section_offset()
}

/// Split `image` at the section offset of `layout`
///
/// # Errors
/// - [`FormatError::OffsetOutOfRange`] if the offset lies past the end of `image`
pub fn split<'a>(image: &'a [u8], layout: &LayoutDescriptor) -> Result<ProgramSections<'a>> {
    let offset = section_offset(layout);
    if offset > image.len() {
        return Err(FormatError::OffsetOutOfRange {
            offset,
            len: image.len(),
        }
        .into());
    }

    let (code, configurables) = image.split_at(offset);
    trace!(
        offset,
        code_len = code.len(),
        configurables_len = configurables.len(),
        "split program image"
    );

    Ok(ProgramSections {
        code,
        configurables,
    })
}

/// Blob id of `image` using SHA-256
pub fn compute_blob_id(image: &[u8], layout: &LayoutDescriptor) -> Result<BlobId> {
    compute_blob_id_with(&Sha256Hasher, image, layout)
}

/// Blob id of `image` using an explicit hash primitive
pub fn compute_blob_id_with<H>(hasher: &H, image: &[u8], layout: &LayoutDescriptor) -> Result<BlobId>
where
    H: BlobHasher + ?Sized,
{
    let sections = split(image, layout)?;
    let blob_id = hasher.blob_id(sections.code);

    debug!(
        algorithm = %hasher.algorithm(),
        code_len = sections.code.len(),
        %blob_id,
        "computed blob id"
    );

    Ok(blob_id)
}
