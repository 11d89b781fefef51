//! # Blob Reference Verification
//!
//! Content-addressed blob identification and loader verification.
//!
//! A full program image is split at the first configurable offset; the code
//! section is hashed into a [`BlobId`](blobref_format::BlobId). A loader is a
//! small image whose header embeds that id, and verification checks the two
//! agree byte for byte.
//!
//! ## Example
//!
//! ```rust
//! use blobref_format::{ConfigurableEntry, LayoutDescriptor, INSTRUCTIONS_LEN};
//! use blobref_verify::{build_loader, compute_blob_id, parse_loader, verify};
//!
//! let program = vec![0u8; 256];
//! let layout = LayoutDescriptor::new(vec![ConfigurableEntry::new("OWNER", 224)]).unwrap();
//!
//! let blob_id = compute_blob_id(&program, &layout).unwrap();
//! let loader = build_loader(&[0u8; INSTRUCTIONS_LEN], blob_id, &program[224..]);
//!
//! assert_eq!(parse_loader(&loader).unwrap().blob_id, blob_id);
//! assert!(verify(&program, &layout, &loader).unwrap());
//! ```

pub mod blob;
pub mod builder;
pub mod error;
pub mod hasher;
pub mod parser;
pub mod verifier;

pub use blob::{compute_blob_id, compute_blob_id_with, section_offset, split, ProgramSections};
pub use builder::{build_loader, build_loader_for};
pub use error::{Result, VerifyError};
pub use hasher::{hasher_for, Blake3Hasher, BlobHasher, Keccak256Hasher, Sha256Hasher};
pub use parser::{check_section_length, parse_loader};
pub use verifier::{verify, DuplicateOffsetPolicy, Verification, Verifier, VerifierConfig};
