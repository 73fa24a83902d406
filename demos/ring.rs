// SPDX short identifier: Unlicense

use rand::thread_rng;

use sm2ring::{
    KeyPair,
    Ring,
    ToBytes,
    nonce::SimpleNonce,
    signature::RingSignature
};

const RINGSIZE: usize = 8;

fn main() {
    //Create the signer's key pair.
    let signer = KeyPair::random(&mut thread_rng())
        .expect("Real software should have proper error handling.");

    //Build a ring containing the signer's public key along with decoys.
    //In practice the decoys would be other people's published SM2 keys;
    //for demonstration they are just freshly generated ones.
    let mut ring: Ring = Ring::new();
    ring.push(*signer.public_key());
    for _ in 0..(RINGSIZE - 1) {
        let decoy = KeyPair::random(&mut thread_rng()).unwrap();
        ring.push(*decoy.public_key());
    }

    //The message to be signed and verified
    let message = b"this is a test";

    //Create a ring signature. Any verifier can check that one of the
    //ring members signed, but not which one.
    let signature = RingSignature::sign(
        &mut thread_rng(),
        &SimpleNonce,
        &signer,
        &ring,
        message
    ).expect("Real software should have proper error handling.");

    //Verify the signature
    assert!(signature.verify(&ring, message));

    //Signatures travel as fixed-width 32-byte big-endian fields:
    //the seed challenge followed by one response per ring member.
    let encoded = signature.to_bytes();
    println!("ring of {RINGSIZE} keys, signature of {} bytes", encoded.len());

    let decoded = RingSignature::from_bytes(&encoded).unwrap();
    assert!(decoded.verify(&ring, message));

    //A different message does not verify.
    assert!(!decoded.verify(&ring, b"another message"));
}
