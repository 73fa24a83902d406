// SPDX short identifier: Unlicense

use rand::thread_rng;

use sm2ring::{
    KeyPair,
    Ring,
    nonce::Sm2Nonce,
    signature::LinkableRingSignature
};

const RINGSIZE: usize = 8;

fn main() {
    //Create the signer's key pair and a ring of decoys.
    let signer = KeyPair::random(&mut thread_rng())
        .expect("Real software should have proper error handling.");

    let mut ring: Ring = Ring::new();
    ring.push(*signer.public_key());
    for _ in 0..(RINGSIZE - 1) {
        let decoy = KeyPair::random(&mut thread_rng()).unwrap();
        ring.push(*decoy.public_key());
    }

    //Sign two different messages with the same key over the same ring.
    //The responses here are drawn SM2-signature-style; a plain uniform
    //strategy (`SimpleNonce`) verifies just the same.
    let first = LinkableRingSignature::sign(
        &mut thread_rng(), &Sm2Nonce, &signer, &ring, b"vote: option A"
    ).expect("Real software should have proper error handling.");

    let second = LinkableRingSignature::sign(
        &mut thread_rng(), &Sm2Nonce, &signer, &ring, b"vote: option B"
    ).unwrap();

    assert!(first.verify(&ring, b"vote: option A"));
    assert!(second.verify(&ring, b"vote: option B"));

    //Both signatures carry the same linking tag, so a verifier can tell
    //the same member signed twice, without learning which member.
    assert!(first.links_to(&second));
    println!("double signing detected; signer still anonymous among {RINGSIZE}");

    //A different ring member's signature does not link.
    let other = KeyPair::random(&mut thread_rng()).unwrap();
    let mut other_ring = ring.clone();
    other_ring.0[RINGSIZE - 1] = *other.public_key();
    let third = LinkableRingSignature::sign(
        &mut thread_rng(), &Sm2Nonce, &other, &other_ring, b"vote: option A"
    ).unwrap();
    assert!(third.verify(&other_ring, b"vote: option A"));
    assert!(!third.links_to(&first));
}
