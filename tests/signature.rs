// SPDX short identifier: Unlicense

use rand::thread_rng;

use sm2ring::{
    common::*,
    nonce::{NonceStrategy, SimpleNonce, Sm2Nonce},
    signature::RingSignature
};

const RING_SIZES: [usize; 4] = [2, 3, 5, 10];

///Generate `n` key pairs and the ring of their public keys.
fn random_members(n: usize) -> (Vec<KeyPair>, Ring) {
    let mut members: Vec<KeyPair> = Vec::new();
    let mut ring: Ring = Ring::new();
    for _ in 0..n {
        let keys = KeyPair::random(&mut thread_rng()).unwrap();
        ring.push(*keys.public_key());
        members.push(keys);
    }
    return (members, ring)
}

fn two_keys(strategy: &impl NonceStrategy) {
    let signer = KeyPair::random(&mut thread_rng()).unwrap();
    let participant = KeyPair::random(&mut thread_rng()).unwrap();
    let msg = b"hello world";

    let ring = Ring(vec![*signer.public_key(), *participant.public_key()]);
    let sig = RingSignature::sign(&mut thread_rng(), strategy, &signer, &ring, msg).unwrap();
    assert!(sig.verify(&ring, msg));

    //the ring in the other order is a different transcript
    let swapped = Ring(vec![*participant.public_key(), *signer.public_key()]);
    assert!(!sig.verify(&swapped, msg));

    //re-signing over the swapped ring verifies again
    let sig = RingSignature::sign(&mut thread_rng(), strategy, &signer, &swapped, msg).unwrap();
    assert!(sig.verify(&swapped, msg));
}

#[test]
fn two_keys_simple() {
    two_keys(&SimpleNonce);
}

#[test]
fn two_keys_sm2() {
    two_keys(&Sm2Nonce);
}

fn three_keys(strategy: &impl NonceStrategy) {
    let signer = KeyPair::random(&mut thread_rng()).unwrap();
    let (_, decoys) = random_members(2);
    let msg = b"hello world";

    //the signer verifies from every slot of the rotated ring
    let rotations = [
        vec![decoys.0[0], *signer.public_key(), decoys.0[1]],
        vec![decoys.0[0], decoys.0[1], *signer.public_key()],
        vec![*signer.public_key(), decoys.0[0], decoys.0[1]]
    ];
    for keys in rotations {
        let ring = Ring(keys);
        let sig = RingSignature::sign(&mut thread_rng(), strategy, &signer, &ring, msg).unwrap();
        assert!(sig.verify(&ring, msg));
    }
}

#[test]
fn three_keys_simple() {
    three_keys(&SimpleNonce);
}

#[test]
fn three_keys_sm2() {
    three_keys(&Sm2Nonce);
}

fn all_signer_positions(strategy: &impl NonceStrategy) {
    for n in RING_SIZES {
        let (members, ring) = random_members(n);
        let mut sizes: Vec<usize> = Vec::new();
        for pi in 0..n {
            let sig = RingSignature::sign(
                &mut thread_rng(), strategy, &members[pi], &ring, b"abcdef").unwrap();
            assert!(sig.verify(&ring, b"abcdef"));

            //wrong message
            assert!(!sig.verify(&ring, b"123456"));

            sizes.push(sig.to_bytes().len());
        }
        //the signature layout depends only on the ring size,
        //never on the signer's slot
        assert!(sizes.iter().all(|len| *len == (n + 1) * 32));
    }
}

#[test]
fn all_signer_positions_simple() {
    all_signer_positions(&SimpleNonce);
}

#[test]
fn all_signer_positions_sm2() {
    all_signer_positions(&Sm2Nonce);
}

#[test]
fn reordered_ring() {
    let (members, ring) = random_members(5);
    let msg = b"hello world";

    let sig = RingSignature::sign(&mut thread_rng(), &SimpleNonce, &members[2], &ring, msg).unwrap();
    assert!(sig.verify(&ring, msg));

    let mut reversed = ring.clone();
    reversed.0.reverse();
    //the old signature does not carry over, but re-signing does
    assert!(!sig.verify(&reversed, msg));
    let sig = RingSignature::sign(&mut thread_rng(), &SimpleNonce, &members[2], &reversed, msg).unwrap();
    assert!(sig.verify(&reversed, msg));
}

#[test]
fn replaced_ring_member() {
    let (members, ring) = random_members(4);
    let msg = b"hello world";
    let sig = RingSignature::sign(&mut thread_rng(), &SimpleNonce, &members[1], &ring, msg).unwrap();

    for i in 0..4 {
        let stranger = KeyPair::random(&mut thread_rng()).unwrap();
        let mut tampered = ring.clone();
        tampered.0[i] = *stranger.public_key();
        assert!(!sig.verify(&tampered, msg));
    }
}

#[test]
fn tampered_message() {
    let (members, ring) = random_members(3);
    let sig = RingSignature::sign(
        &mut thread_rng(), &SimpleNonce, &members[0], &ring, b"hello world").unwrap();

    //flipping any single bit of the message breaks the chain
    let mut msg = *b"hello world";
    for byte in 0..msg.len() {
        for bit in 0..8 {
            msg[byte] ^= 1 << bit;
            assert!(!sig.verify(&ring, &msg));
            msg[byte] ^= 1 << bit;
        }
    }
    assert!(sig.verify(&ring, &msg));
}

#[test]
fn tampered_response() {
    let (members, ring) = random_members(3);
    let msg = b"hello world";
    let sig = RingSignature::sign(&mut thread_rng(), &SimpleNonce, &members[2], &ring, msg).unwrap();

    //bump each response scalar to (s + 1) mod n in the encoded form
    let bytes = sig.to_bytes();
    for i in 1..4 {
        let mut tampered = bytes.clone();
        let field = &bytes[i * 32..(i + 1) * 32];
        let bumped = Scalar::from_repr(FieldBytes::clone_from_slice(field)).unwrap() + Scalar::ONE;
        tampered[i * 32..(i + 1) * 32].copy_from_slice(&bumped.to_bytes());

        let tampered = RingSignature::from_bytes(&tampered).unwrap();
        assert!(!tampered.verify(&ring, msg));
    }
}

#[test]
fn serialization() {
    let (members, ring) = random_members(3);
    let msg = b"hello world";
    let sig = RingSignature::sign(&mut thread_rng(), &SimpleNonce, &members[0], &ring, msg).unwrap();

    let bytes = sig.to_bytes();
    assert_eq!(bytes.len(), 4 * 32);
    let decoded = RingSignature::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, sig);
    assert!(decoded.verify(&ring, msg));

    //not a whole number of fields
    assert!(RingSignature::from_bytes(&bytes[1..]).is_err());
    //too few fields for any ring
    assert!(RingSignature::from_bytes(&bytes[..64]).is_err());
    //a field at or above the group order is not a scalar
    let mut oversized = bytes;
    oversized[32..64].copy_from_slice(&[0xFF; 32]);
    assert!(RingSignature::from_bytes(&oversized).is_err());
}

#[test]
fn degenerate_rings() {
    let signer = KeyPair::random(&mut thread_rng()).unwrap();
    let msg = b"hello world";

    //a ring of one is not a ring
    let ring = Ring(vec![*signer.public_key()]);
    assert!(matches!(
        RingSignature::sign(&mut thread_rng(), &SimpleNonce, &signer, &ring, msg),
        Err(SignatureError::RingTooSmall)
    ));

    //the signer must be a member
    let (_, ring) = random_members(3);
    assert!(matches!(
        RingSignature::sign(&mut thread_rng(), &SimpleNonce, &signer, &ring, msg),
        Err(SignatureError::SignerNotInRing)
    ));

    //a verifier fed the wrong-size ring rejects rather than panics
    let sig = {
        let (members, ring) = random_members(3);
        RingSignature::sign(&mut thread_rng(), &SimpleNonce, &members[0], &ring, msg).unwrap()
    };
    let (_, smaller) = random_members(2);
    assert!(!sig.verify(&smaller, msg));
    assert!(!sig.verify(&Ring::new(), msg));
}
