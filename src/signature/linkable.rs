/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand_core::CryptoRngCore;
use sm3::{Sm3, Digest};
use zeroize::Zeroize;

use crate::internal_common::*;
use super::*;

///Derive the challenge for up to two chain points:
///ring keys, linking tag, message, then each point's padded coordinates.
fn tagged_challenge(prefix: &Sm3, msg: &[u8], points: &[&ProjectivePoint]) -> Scalar {
    let mut hasher = prefix.clone();
    hasher.update(msg);
    for point in points {
        hasher.update(encode_point(point));
    }
    return finalize_scalar(hasher)
}

///The x-coordinate of a point as a scalar mod `n`.
///The point at infinity counts as zero.
fn x_scalar(point: &ProjectivePoint) -> Scalar {
    let encoded = encode_point(point);
    return Scalar::reduce_bytes(&FieldBytes::clone_from_slice(&encoded[..FIELD_BYTES]))
}

///One chain step of the dual-transcript scheme:
///`c' = c + s mod n`, then both the key chain point `v = s*G + c'*P`
///and the tag chain point `w = s*R + c'*Q` enter the hash.
fn dual_step(
    prefix: &Sm3, msg: &[u8], c: Scalar, s: Scalar,
    key: &PublicKey, sum: &ProjectivePoint, tag: &ProjectivePoint
) -> Scalar {
    let c = c + s;
    let v = ProjectivePoint::lincomb(
        &ProjectivePoint::generator(), &s,
        &ProjectivePoint::from(key), &c
    );
    let w = ProjectivePoint::lincomb(sum, &s, tag, &c);
    return tagged_challenge(prefix, msg, &[&v, &w])
}

///One chain step of the folded scheme:
///a single point `v = s*R' + c'*(P + Q)` enters the hash,
///with the tag folded into the slot key.
fn folded_step(
    prefix: &Sm3, msg: &[u8], c: Scalar, s: Scalar,
    folded_key: &ProjectivePoint, shifted_sum: &ProjectivePoint
) -> Scalar {
    let c = c + s;
    let v = ProjectivePoint::lincomb(shifted_sum, &s, folded_key, &c);
    return tagged_challenge(prefix, msg, &[&v])
}

///One chain step of the compact scheme:
///no point enters the hash at all. The chain advances by adding the
///synthesized point's x-coordinate to the fixed base challenge.
fn compact_step(
    c_base: Scalar, c: Scalar, s: Scalar,
    folded_key: &ProjectivePoint, shifted_sum: &ProjectivePoint
) -> Scalar {
    let c = c + s;
    let v = ProjectivePoint::lincomb(shifted_sum, &s, folded_key, &c);
    return c_base + x_scalar(&v)
}

///A linkable ring signature.
///
///Like a plain ring signature, but carrying a linking tag `Q = d * sum(ring)`:
///two signatures by the same private key over the same ring share the tag
///and can be detected as such with `links_to`, while the signer stays
///anonymous within the ring.
///
///Three transcript flavors are provided. Each `sign_*` has a matching
///`verify_*`; a signature only verifies under the flavor that produced it,
///but tags are comparable across all three.
/// * `sign`/`verify`: two chain points per slot (key chain and tag chain)
///   are hashed each step.
/// * `sign_folded`/`verify_folded`: the tag is folded into each slot key
///   and a single chain point is hashed, over the shifted sum `R + G`.
/// * `sign_compact`/`verify_compact`: no points are hashed; the chain
///   advances by x-coordinate arithmetic on a fixed base challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkableRingSignature {
    pub linking_tag: AffinePoint,
    c0: Scalar,
    s: Vec<Scalar>

} impl LinkableRingSignature {
    ///Sign `msg` under the dual-transcript scheme.
    pub fn sign(
        rng: &mut impl CryptoRngCore, strategy: &impl NonceStrategy,
        keys: &KeyPair, ring: &Ring, msg: &[u8]
    ) -> Result<Self, SignatureError> {
        let n = ring.len();
        let pi = find_signer_index(keys, ring)?;

        let sum = ring.sum();
        let tag_point = sum * **keys.secret();
        let linking_tag = tag_point.to_affine();
        let prefix = tagged_ring_hasher(ring, &linking_tag);

        let mut k_pi = random_scalar(&mut *rng)?;
        let mut c = tagged_challenge(&prefix, msg, &[
            &ProjectivePoint::mul_by_generator(&k_pi),
            &(sum * k_pi)
        ]);

        let mut s = vec![Scalar::ZERO; n];
        //walk the tail segment [pi+1, n)
        for i in pi + 1..n {
            s[i] = strategy.response(&mut *rng, &ring.0[i], msg)?;
            c = dual_step(&prefix, msg, c, s[i], &ring.0[i], &sum, &tag_point);
        }
        //the challenge at the wrap-around is the signature's seed
        let c0 = c;
        //wrap through [0, pi)
        for i in 0..pi {
            s[i] = strategy.response(&mut *rng, &ring.0[i], msg)?;
            c = dual_step(&prefix, msg, c, s[i], &ring.0[i], &sum, &tag_point);
        }

        s[pi] = close_response(&k_pi, &c, keys)?;
        k_pi.zeroize();

        return Ok(Self{linking_tag, c0, s})
    }

    ///Check a dual-transcript signature against a ring and message.
    pub fn verify(&self, ring: &Ring, msg: &[u8]) -> bool {
        if ring.len() < 2 || self.s.len() != ring.len() {
            return false
        }
        let sum = ring.sum();
        let tag_point = ProjectivePoint::from(self.linking_tag);
        let prefix = tagged_ring_hasher(ring, &self.linking_tag);

        let mut c = self.c0;
        for (i, key) in ring.0.iter().enumerate() {
            c = dual_step(&prefix, msg, c, self.s[i], key, &sum, &tag_point);
        }
        return c == self.c0
    }

    ///Sign `msg` under the folded scheme.
    pub fn sign_folded(
        rng: &mut impl CryptoRngCore, strategy: &impl NonceStrategy,
        keys: &KeyPair, ring: &Ring, msg: &[u8]
    ) -> Result<Self, SignatureError> {
        let n = ring.len();
        let pi = find_signer_index(keys, ring)?;

        let sum = ring.sum();
        let tag_point = sum * **keys.secret();
        let linking_tag = tag_point.to_affine();
        //the walk runs over the shifted sum, not the plain one
        let shifted_sum = sum + ProjectivePoint::generator();
        let prefix = tagged_ring_hasher(ring, &linking_tag);

        let mut k_pi = random_scalar(&mut *rng)?;
        let mut c = tagged_challenge(&prefix, msg, &[&(shifted_sum * k_pi)]);

        let mut s = vec![Scalar::ZERO; n];
        for i in pi + 1..n {
            s[i] = strategy.response(&mut *rng, &ring.0[i], msg)?;
            let folded_key = ProjectivePoint::from(&ring.0[i]) + tag_point;
            c = folded_step(&prefix, msg, c, s[i], &folded_key, &shifted_sum);
        }
        let c0 = c;
        for i in 0..pi {
            s[i] = strategy.response(&mut *rng, &ring.0[i], msg)?;
            let folded_key = ProjectivePoint::from(&ring.0[i]) + tag_point;
            c = folded_step(&prefix, msg, c, s[i], &folded_key, &shifted_sum);
        }

        s[pi] = close_response(&k_pi, &c, keys)?;
        k_pi.zeroize();

        return Ok(Self{linking_tag, c0, s})
    }

    ///Check a folded-scheme signature against a ring and message.
    pub fn verify_folded(&self, ring: &Ring, msg: &[u8]) -> bool {
        if ring.len() < 2 || self.s.len() != ring.len() {
            return false
        }
        let sum = ring.sum();
        let tag_point = ProjectivePoint::from(self.linking_tag);
        let shifted_sum = sum + ProjectivePoint::generator();
        let prefix = tagged_ring_hasher(ring, &self.linking_tag);

        let mut c = self.c0;
        for (i, key) in ring.0.iter().enumerate() {
            let folded_key = ProjectivePoint::from(key) + tag_point;
            c = folded_step(&prefix, msg, c, self.s[i], &folded_key, &shifted_sum);
        }
        return c == self.c0
    }

    ///Sign `msg` under the compact scheme.
    pub fn sign_compact(
        rng: &mut impl CryptoRngCore, strategy: &impl NonceStrategy,
        keys: &KeyPair, ring: &Ring, msg: &[u8]
    ) -> Result<Self, SignatureError> {
        let n = ring.len();
        let pi = find_signer_index(keys, ring)?;

        let sum = ring.sum();
        let tag_point = sum * **keys.secret();
        let linking_tag = tag_point.to_affine();
        let shifted_sum = sum + ProjectivePoint::generator();
        let prefix = tagged_ring_hasher(ring, &linking_tag);

        //the base challenge binds ring, tag and message once;
        //every step reuses it
        let c_base = tagged_challenge(&prefix, msg, &[]);

        let mut k_pi = random_scalar(&mut *rng)?;
        let mut c = c_base + x_scalar(&(shifted_sum * k_pi));

        let mut s = vec![Scalar::ZERO; n];
        for i in pi + 1..n {
            s[i] = strategy.response(&mut *rng, &ring.0[i], msg)?;
            let folded_key = ProjectivePoint::from(&ring.0[i]) + tag_point;
            c = compact_step(c_base, c, s[i], &folded_key, &shifted_sum);
        }
        let c0 = c;
        for i in 0..pi {
            s[i] = strategy.response(&mut *rng, &ring.0[i], msg)?;
            let folded_key = ProjectivePoint::from(&ring.0[i]) + tag_point;
            c = compact_step(c_base, c, s[i], &folded_key, &shifted_sum);
        }

        s[pi] = close_response(&k_pi, &c, keys)?;
        k_pi.zeroize();

        return Ok(Self{linking_tag, c0, s})
    }

    ///Check a compact-scheme signature against a ring and message.
    pub fn verify_compact(&self, ring: &Ring, msg: &[u8]) -> bool {
        if ring.len() < 2 || self.s.len() != ring.len() {
            return false
        }
        let sum = ring.sum();
        let tag_point = ProjectivePoint::from(self.linking_tag);
        let shifted_sum = sum + ProjectivePoint::generator();
        let prefix = tagged_ring_hasher(ring, &self.linking_tag);

        let c_base = tagged_challenge(&prefix, msg, &[]);

        let mut c = self.c0;
        for (i, key) in ring.0.iter().enumerate() {
            let folded_key = ProjectivePoint::from(key) + tag_point;
            c = compact_step(c_base, c, self.s[i], &folded_key, &shifted_sum);
        }
        return c == self.c0
    }

    ///Whether two signatures were produced by the same private key over
    ///the same ring: true iff their linking tags are identical.
    ///
    ///Tags from the same `(key, ring)` pair are identical regardless of
    ///message, signer slot, or transcript flavor.
    pub fn links_to(&self, other: &Self) -> bool {
        return self.linking_tag == other.linking_tag
    }

    ///Internal constructor for deserialization.
    pub(crate) fn from_parts(linking_tag: AffinePoint, c0: Scalar, s: Vec<Scalar>) -> Self {
        return Self{linking_tag, c0, s}
    }

    ///The scalars of this signature in wire order: `c0`, then each response.
    ///The linking tag travels separately as a point.
    pub(crate) fn scalars(&self) -> impl Iterator<Item = &Scalar> {
        return std::iter::once(&self.c0).chain(self.s.iter())
    }
}
