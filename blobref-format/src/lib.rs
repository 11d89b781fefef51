//! # Blob Reference Format
//!
//! Core data model for content-addressed predicate blobs and the loaders
//! that reference them.
//!
//! ## Key Types
//! - [`BlobId`]: 32-byte digest of a program's code section
//! - [`LayoutDescriptor`]: non-empty list of configurable offsets from the ABI
//! - [`LoaderComponents`]: fixed-layout decomposition of a loader image
//! - [`HashAlgorithm`]: selectable 256-bit content hash
//!
//! All external values are lowercase hex strings with a `0x` prefix, see
//! [`encoding`].

pub mod blob_id;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod layout;
pub mod loader;

pub use blob_id::BlobId;
pub use encoding::{decode_hex, decode_hex_array, encode_hex, HEX_PREFIX};
pub use error::{FormatError, Result};
pub use hash::HashAlgorithm;
pub use layout::{ConfigurableEntry, LayoutDescriptor};
pub use loader::{
    LoaderComponents, LoaderInstructions, BLOB_ID_OFFSET, HEADER_LEN, INSTRUCTIONS_LEN,
    SECTION_LENGTH_LEN, SECTION_LENGTH_OFFSET,
};
