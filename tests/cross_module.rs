//! Cross-crate interaction tests
//!
//! Format types flowing through verification, and signature normalization
//! alongside the hex conventions of the format crate.

use blobref_format::{decode_hex, BlobId, FormatError, HashAlgorithm, LayoutDescriptor};
use blobref_sig::{to_compact, CompactSignature, RecoveryMode};
use blobref_verify::{
    build_loader, parse_loader, DuplicateOffsetPolicy, Verification, Verifier, VerifierConfig,
    VerifyError,
};
use proptest::prelude::*;

// ============================================================================
// Format -> Verify
// ============================================================================

#[test]
fn test_empty_abi_never_reaches_verifier() {
    let err = LayoutDescriptor::from_abi_json(r#"{ "configurables": [] }"#).unwrap_err();
    assert!(matches!(err, FormatError::EmptyLayout));
}

#[test]
fn test_blob_id_hex_flows_into_loader() {
    let hex = format!("0x{}", "5e".repeat(32));
    let blob_id: BlobId = hex.parse().unwrap();
    let loader = build_loader(&[0; 48], blob_id, &[]);

    assert_eq!(parse_loader(&loader).unwrap().blob_id.to_hex(), hex);
}

#[test]
fn test_config_loaded_from_json_drives_verifier() {
    let config: VerifierConfig = serde_json::from_str(
        r#"{ "hash": "sha256", "duplicate_offsets": "reject", "strict_section_length": true }"#,
    )
    .unwrap();
    assert_eq!(config.hash, HashAlgorithm::Sha256);
    assert_eq!(config.duplicate_offsets, DuplicateOffsetPolicy::Reject);

    let layout = LayoutDescriptor::from_abi_json(
        r#"{ "configurables": [{ "name": "A", "offset": 8 }, { "name": "B", "offset": 8 }] }"#,
    )
    .unwrap();
    let verifier = Verifier::new(config);
    let err = verifier.verify(&[0u8; 16], &layout, &[0u8; 88]).unwrap_err();
    assert!(matches!(
        err,
        VerifyError::Format(FormatError::DuplicateOffset { offset: 8 })
    ));
}

#[test]
fn test_every_hash_algorithm_verifies_own_loader() {
    let program = vec![0x90; 300];
    let layout =
        LayoutDescriptor::from_abi_json(r#"{ "configurables": [{ "name": "A", "offset": 256 }] }"#)
            .unwrap();

    for hash in HashAlgorithm::ALL {
        let verifier = Verifier::new(VerifierConfig {
            hash,
            ..VerifierConfig::default()
        });
        let blob_id = verifier.blob_id(&program, &layout).unwrap();
        let loader = build_loader(&[0; 48], blob_id, &program[256..]);

        assert_eq!(
            verifier.verify_detailed(&program, &layout, &loader).unwrap(),
            Verification::Match,
            "{hash}"
        );
    }
}

// ============================================================================
// Signatures with format hex
// ============================================================================

#[test]
fn test_compact_signature_hex_decodes_with_format_codec() {
    let mut raw = vec![0x42; 64];
    raw.push(1);
    let compact = to_compact(&raw).unwrap();

    let bytes = decode_hex(&compact.to_hex()).unwrap();
    assert_eq!(bytes.len(), 64);
    assert_eq!(bytes[32], 0xC2);
}

proptest! {
    #[test]
    fn test_strict_and_lenient_agree_on_canonical_v(
        body in prop::collection::vec(any::<u8>(), 64),
        v in prop::sample::select(vec![0u8, 1, 27, 28]),
    ) {
        let mut raw = body;
        raw.push(v);
        let lenient = to_compact(&raw).unwrap();
        let strict = blobref_sig::to_compact_with(&raw, RecoveryMode::Strict).unwrap();
        prop_assert_eq!(lenient, strict);
        prop_assert_eq!(CompactSignature::from_hex(&strict.to_hex()).unwrap(), strict);
    }
}
