// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use rand::{thread_rng, Rng};

const RING_SIZES: [usize; 5] = [2, 4, 8, 16, 32];

use sm2ring::{
    common::*,
    nonce::SimpleNonce,
    signature::{
        RingSignature,
        LinkableRingSignature
    }
};

fn random_ring(n: usize) -> (Vec<KeyPair>, Ring) {
    let mut members: Vec<KeyPair> = Vec::new();
    let mut ring: Ring = Ring::new();
    for _ in 0..n {
        let keys = KeyPair::random(&mut thread_rng()).unwrap();
        ring.push(*keys.public_key());
        members.push(keys);
    }
    return (members, ring)
}

fn ring_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("RingSignature");
    group.sample_size(20);

    //sign
    for x in RING_SIZES {
        let (members, ring) = random_ring(x);
        let signer = &members[thread_rng().gen::<usize>() % x];

        group.bench_with_input(BenchmarkId::new("sign", format!("Ring size: {x}")), &ring,
            |b, ring| b.iter(|| {
                RingSignature::sign(&mut thread_rng(), &SimpleNonce, signer, ring, b"abcdef").unwrap()
            }));
    }

    //verify
    for x in RING_SIZES {
        let (members, ring) = random_ring(x);
        let signer = &members[thread_rng().gen::<usize>() % x];
        let sig = RingSignature::sign(&mut thread_rng(), &SimpleNonce, signer, &ring, b"abcdef").unwrap();

        let params = (sig, ring);
        group.bench_with_input(BenchmarkId::new("verify", format!("Ring size: {x}")), &params,
            |b, (sig, ring)| b.iter(|| {
                assert!(sig.verify(ring, b"abcdef"))
            }));
    }
}

fn linkable_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("LinkableRingSignature");
    group.sample_size(20);

    //sign
    for x in RING_SIZES {
        let (members, ring) = random_ring(x);
        let signer = &members[thread_rng().gen::<usize>() % x];

        group.bench_with_input(BenchmarkId::new("sign", format!("Ring size: {x}")), &ring,
            |b, ring| b.iter(|| {
                LinkableRingSignature::sign(&mut thread_rng(), &SimpleNonce, signer, ring, b"abcdef").unwrap()
            }));
    }

    //verify
    for x in RING_SIZES {
        let (members, ring) = random_ring(x);
        let signer = &members[thread_rng().gen::<usize>() % x];
        let sig = LinkableRingSignature::sign(&mut thread_rng(), &SimpleNonce, signer, &ring, b"abcdef").unwrap();

        let params = (sig, ring);
        group.bench_with_input(BenchmarkId::new("verify", format!("Ring size: {x}")), &params,
            |b, (sig, ring)| b.iter(|| {
                assert!(sig.verify(ring, b"abcdef"))
            }));
    }
}


criterion_group!(signature_sm2ring, ring_benchmark, linkable_benchmark);
criterion_main!(signature_sm2ring);
