//! # Compact Signature Normalization
//!
//! Converts 65-byte recoverable ECDSA signatures (EIP-191 personal sign) into
//! the 64-byte compact form expected by predicate verifiers, where the
//! recovery bit lives in the top bit of `s`.
//!
//! ## Example
//!
//! ```rust
//! use blobref_sig::to_compact;
//!
//! let mut signature = vec![0x11; 64];
//! signature.push(28);
//!
//! let compact = to_compact(&signature).unwrap();
//! assert_eq!(compact.as_bytes().len(), 64);
//! assert_eq!(compact.parity(), 1);
//! assert_eq!(compact.to_recoverable().v, 28);
//! ```

pub mod error;
pub mod normalize;
pub mod signature;

pub use error::{Result, SignatureError};
pub use normalize::{to_compact, to_compact_with, RecoveryMode};
pub use signature::{
    CompactSignature, RecoverableSignature, COMPACT_LEN, PARITY_MASK, RECOVERABLE_LEN,
    SCALAR_LEN,
};
