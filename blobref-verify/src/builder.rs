//! Loader image builder

use crate::blob::{compute_blob_id_with, split};
use crate::error::Result;
use crate::hasher::BlobHasher;
use blobref_format::{BlobId, LayoutDescriptor, LoaderComponents, LoaderInstructions};
use tracing::debug;

/// Assemble a loader image pointing at `blob_id`
///
/// The section length is set to `configurables.len()`.
pub fn build_loader(
    instructions: &LoaderInstructions,
    blob_id: BlobId,
    configurables: &[u8],
) -> Vec<u8> {
    LoaderComponents {
        instructions: *instructions,
        blob_id,
        section_length: configurables.len() as u64,
        configurables: configurables.to_vec(),
        trailing: Vec::new(),
    }
    .to_bytes()
}

/// Assemble the loader for a full program image
///
/// The loader references the blob id of the program's code section and
/// carries the program's configurables section as its own.
pub fn build_loader_for<H>(
    hasher: &H,
    instructions: &LoaderInstructions,
    image: &[u8],
    layout: &LayoutDescriptor,
) -> Result<Vec<u8>>
where
    H: BlobHasher + ?Sized,
{
    let blob_id = compute_blob_id_with(hasher, image, layout)?;
    let sections = split(image, layout)?;
    let loader = build_loader(instructions, blob_id, sections.configurables);

    debug!(
        %blob_id,
        loader_len = loader.len(),
        program_len = image.len(),
        "built loader"
    );

    Ok(loader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Sha256Hasher;
    use crate::parser::parse_loader;
    use blobref_format::{ConfigurableEntry, HEADER_LEN, INSTRUCTIONS_LEN};

    const INSTRUCTIONS: LoaderInstructions = [0x1A; INSTRUCTIONS_LEN];

    #[test]
    fn test_build_loader_parses_back() {
        let blob_id = BlobId::new([0x44; 32]);
        let image = build_loader(&INSTRUCTIONS, blob_id, &[1, 2, 3]);

        assert_eq!(image.len(), HEADER_LEN + 3);
        let loader = parse_loader(&image).unwrap();
        assert_eq!(loader.blob_id, blob_id);
        assert_eq!(loader.section_length, 3);
        assert_eq!(loader.configurables, vec![1, 2, 3]);
    }

    #[test]
    fn test_build_loader_for_program() {
        let mut program = vec![0xC0; 100];
        program[80..].fill(0xDA);
        let layout = LayoutDescriptor::new(vec![ConfigurableEntry::new("X", 80)]).unwrap();

        let image = build_loader_for(&Sha256Hasher, &INSTRUCTIONS, &program, &layout).unwrap();
        let loader = parse_loader(&image).unwrap();

        assert_eq!(loader.blob_id, Sha256Hasher.blob_id(&program[..80]));
        assert_eq!(loader.configurables, vec![0xDA; 20]);
        assert!(loader.is_section_length_consistent());
    }

    #[test]
    fn test_build_loader_for_bad_layout() {
        let layout = LayoutDescriptor::new(vec![ConfigurableEntry::new("X", 500)]).unwrap();
        assert!(build_loader_for(&Sha256Hasher, &INSTRUCTIONS, &[0u8; 10], &layout).is_err());
    }
}
