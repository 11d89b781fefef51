use blobref_format::{ConfigurableEntry, HashAlgorithm, LayoutDescriptor};
use blobref_verify::{compute_blob_id_with, hasher_for};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_blob_id(c: &mut Criterion) {
    // Typical predicate size with a 184-byte configurables section
    let image: Vec<u8> = (0..4112u32).map(|i| (i % 251) as u8).collect();
    let layout = LayoutDescriptor::new(vec![ConfigurableEntry::new("SIGNER", 3928)])
        .expect("non-empty layout");

    let mut group = c.benchmark_group("blob_id");
    for algorithm in HashAlgorithm::ALL {
        let hasher = hasher_for(algorithm);
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| compute_blob_id_with(hasher, black_box(&image), &layout))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_blob_id);
criterion_main!(benches);
