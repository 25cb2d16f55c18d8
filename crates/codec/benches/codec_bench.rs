use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use helixvault_codec::{ChecksumRule, Codec, MappingStrategy, RedundancyLevel, PARALLEL_THRESHOLD};
use rand::Rng;
use std::hint::black_box;

fn bench_codecs(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let strategies = [MappingStrategy::Sequential, MappingStrategy::Parallel];

    // Test Cases (Name, Size in bytes)
    let sizes = vec![
        ("Small", 1024),
        ("Below_Threshold", PARALLEL_THRESHOLD - 1),
        ("Above_Threshold", PARALLEL_THRESHOLD),
        ("Large", 8 * PARALLEL_THRESHOLD),
    ];

    for level in [1u8, 10] {
        let level = RedundancyLevel::new(level).unwrap();

        for (size_name, size) in &sizes {
            let input: Vec<u8> = (0..*size).map(|_| rng.gen()).collect();

            let mut group_encode = c.benchmark_group(format!("Encode_L{level}_{size_name}"));
            group_encode.throughput(Throughput::Bytes(*size as u64));
            for strategy in strategies {
                let codec = Codec::new(strategy, ChecksumRule::Length);
                group_encode.bench_with_input(
                    BenchmarkId::new(strategy.to_string(), size),
                    &input,
                    |b, i| b.iter(|| codec.encode(black_box(i), level)),
                );
            }
            group_encode.finish();

            let mut group_decode = c.benchmark_group(format!("Decode_L{level}_{size_name}"));
            group_decode.throughput(Throughput::Bytes(*size as u64));
            for strategy in strategies {
                let codec = Codec::new(strategy, ChecksumRule::Length);
                let encoded = codec.encode(&input, level);
                group_decode.bench_with_input(
                    BenchmarkId::new(strategy.to_string(), size),
                    &encoded,
                    |b, e| b.iter(|| codec.decode(black_box(e.as_str())).unwrap()),
                );
            }
            group_decode.finish();
        }
    }
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
