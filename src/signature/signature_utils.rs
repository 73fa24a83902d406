/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sm3::{Sm3, Digest};

use crate::internal_common::*;

///Locate the signer's slot in the ring.
///
///Fails if the ring is shorter than two keys or the signer's public key
///is not a member. Returns the first matching position.
pub(crate) fn find_signer_index(keys: &KeyPair, ring: &Ring) -> Result<usize, SignatureError> {
    if ring.len() < 2 {
        return Err(SignatureError::RingTooSmall)
    }
    return ring.position_of(keys.public_key())
        .ok_or(SignatureError::SignerNotInRing)
}

///Solve the signer's response with the SM2-style closing equation:
///`s = (k - c*d) * (d + 1)^-1 mod n`.
pub(crate) fn close_response(k_pi: &Scalar, c: &Scalar, keys: &KeyPair) -> Result<Scalar, SignatureError> {
    let d = **keys.secret();
    //KeyPair::new already rejects d = n - 1, so this inversion succeeds
    //for every key this crate can construct
    let inverse = Option::<Scalar>::from((d + Scalar::ONE).invert())
        .ok_or(SignatureError::InvalidKey)?;
    return Ok((k_pi - &(c * &d)) * inverse)
}

///A hasher primed with every ring key's coordinates,
///each zero-padded to 32 bytes big-endian.
///
///Every transcript starts from this prefix; per-step hashers clone it
///instead of re-absorbing the ring.
pub(crate) fn ring_hasher(ring: &Ring) -> Sm3 {
    let mut hasher = Sm3::new();
    for key in &ring.0 {
        hasher.update(encode_affine(key.as_affine()));
    }
    return hasher
}

///`ring_hasher` followed by the linking tag's coordinates.
pub(crate) fn tagged_ring_hasher(ring: &Ring, tag: &AffinePoint) -> Sm3 {
    let mut hasher = ring_hasher(ring);
    hasher.update(encode_affine(tag));
    return hasher
}

///Finish a transcript into a challenge scalar.
pub(crate) fn finalize_scalar(hasher: Sm3) -> Scalar {
    return hash_to_scalar(hasher.finalize().into())
}
