//! # Error Types for blob reference formats

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    // Layout errors
    #[error("Empty layout: at least one configurable entry is required")]
    EmptyLayout,

    #[error("Duplicate configurable offset: {offset} is shared by more than one entry")]
    DuplicateOffset { offset: usize },

    #[error("Configurables offset out of range: offset {offset} exceeds image length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    // Encoding errors
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Invalid length: expected {expected} bytes, found {found} bytes")]
    InvalidLength { expected: usize, found: usize },

    #[error("Invalid ABI JSON: {0}")]
    AbiJson(#[from] serde_json::Error),
}

impl FormatError {
    /// Check if this error describes a layout that does not fit its image
    pub fn is_layout_mismatch(&self) -> bool {
        matches!(
            self,
            FormatError::OffsetOutOfRange { .. } | FormatError::DuplicateOffset { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
