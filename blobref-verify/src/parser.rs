//! Loader image parser
//!
//! Strictly positional: 48 bytes of instructions, a 32-byte blob id and a
//! big-endian `u64` section length, followed by the configurables. Images
//! shorter than the 88-byte header are simply not loaders.

use crate::error::{Result, VerifyError};
use blobref_format::{BlobId, LoaderComponents, LoaderInstructions, HEADER_LEN, INSTRUCTIONS_LEN};
use nom::bytes::complete::take;
use nom::number::complete::be_u64;
use nom::sequence::tuple;
use nom::IResult;
use tracing::trace;

/// Raw header fields: instructions, blob id, section length
fn header(input: &[u8]) -> IResult<&[u8], (&[u8], &[u8], u64)> {
    tuple((take(INSTRUCTIONS_LEN), take(BlobId::SIZE), be_u64))(input)
}

/// Decompose a loader image
///
/// Returns `None` when `image` is too short to hold the loader header. This
/// is the expected answer for any image that is not a loader, not an error.
///
/// The configurables are the first `section_length` bytes after the header,
/// or fewer if the image ends early. Bytes past the declared section are
/// kept in [`LoaderComponents::trailing`]; neither case is rejected here.
pub fn parse_loader(image: &[u8]) -> Option<LoaderComponents> {
    let (rest, (instructions, blob_id, section_length)) = match header(image) {
        Ok(parsed) => parsed,
        Err(_) => {
            trace!(len = image.len(), min_len = HEADER_LEN, "not a loader");
            return None;
        }
    };

    let instructions = LoaderInstructions::try_from(instructions).ok()?;
    let blob_id = BlobId::from_slice(blob_id).ok()?;

    let declared = usize::try_from(section_length).unwrap_or(usize::MAX);
    let (configurables, trailing) = rest.split_at(declared.min(rest.len()));

    Some(LoaderComponents {
        instructions,
        blob_id,
        section_length,
        configurables: configurables.to_vec(),
        trailing: trailing.to_vec(),
    })
}

/// Require the section length to cover exactly the bytes after the header
pub fn check_section_length(loader: &LoaderComponents) -> Result<()> {
    if !loader.is_section_length_consistent() {
        return Err(VerifyError::SectionLengthMismatch {
            declared: loader.section_length,
            actual: loader.configurables.len() + loader.trailing.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_bytes(blob_id: [u8; 32], section_length: u64, tail: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x5A; INSTRUCTIONS_LEN];
        bytes.extend_from_slice(&blob_id);
        bytes.extend_from_slice(&section_length.to_be_bytes());
        bytes.extend_from_slice(tail);
        bytes
    }

    #[test]
    fn test_parse_fields() {
        let image = loader_bytes([0x33; 32], 4, &[1, 2, 3, 4]);
        let loader = parse_loader(&image).unwrap();

        assert_eq!(loader.instructions, [0x5A; INSTRUCTIONS_LEN]);
        assert_eq!(loader.blob_id, BlobId::new([0x33; 32]));
        assert_eq!(loader.section_length, 4);
        assert_eq!(loader.configurables, vec![1, 2, 3, 4]);
        assert!(loader.trailing.is_empty());
        assert!(check_section_length(&loader).is_ok());
    }

    #[test]
    fn test_section_length_is_big_endian() {
        let mut image = loader_bytes([0; 32], 0, &[]);
        image[80..88].copy_from_slice(&[0, 0, 0, 0, 0, 0, 0x01, 0x02]);
        let loader = parse_loader(&image).unwrap();
        assert_eq!(loader.section_length, 0x0102);
    }

    #[test]
    fn test_header_only() {
        let image = loader_bytes([0; 32], 0, &[]);
        assert_eq!(image.len(), HEADER_LEN);

        let loader = parse_loader(&image).unwrap();
        assert!(loader.configurables.is_empty());
        assert!(loader.is_section_length_consistent());
    }

    #[test]
    fn test_short_input() {
        assert!(parse_loader(&[]).is_none());
        assert!(parse_loader(&[0u8; HEADER_LEN - 1]).is_none());
    }

    #[test]
    fn test_excess_bytes_kept_as_trailing() {
        let image = loader_bytes([0; 32], 2, &[1, 2, 3]);
        let loader = parse_loader(&image).unwrap();

        assert_eq!(loader.configurables, vec![1, 2]);
        assert_eq!(loader.trailing, vec![3]);
        assert!(matches!(
            check_section_length(&loader),
            Err(VerifyError::SectionLengthMismatch { declared: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_deficit_is_not_rejected() {
        let image = loader_bytes([0; 32], u64::MAX, &[9, 9]);
        let loader = parse_loader(&image).unwrap();

        assert_eq!(loader.configurables, vec![9, 9]);
        assert!(loader.trailing.is_empty());
        assert!(check_section_length(&loader).is_err());
    }

    #[test]
    fn test_reencode_matches_input() {
        let image = loader_bytes([0x7F; 32], 3, &[4, 5, 6, 7]);
        let loader = parse_loader(&image).unwrap();
        assert_eq!(loader.to_bytes(), image);
    }
}
