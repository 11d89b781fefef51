//! Verification error types

use blobref_format::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Section length mismatch: declared {declared} bytes, found {actual} bytes after the header")]
    SectionLengthMismatch { declared: u64, actual: usize },
}

pub type Result<T> = std::result::Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_wraps() {
        let err: VerifyError = FormatError::EmptyLayout.into();
        assert!(matches!(err, VerifyError::Format(FormatError::EmptyLayout)));
        assert!(err.to_string().starts_with("Format error: Empty layout"));
    }

    #[test]
    fn test_section_length_display() {
        let err = VerifyError::SectionLengthMismatch {
            declared: 64,
            actual: 32,
        };
        assert_eq!(
            err.to_string(),
            "Section length mismatch: declared 64 bytes, found 32 bytes after the header"
        );
    }
}
