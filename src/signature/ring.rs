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

///Derive the challenge for one chain point:
///ring keys, message, then the point's padded coordinates.
fn challenge(prefix: &Sm3, msg: &[u8], point: &ProjectivePoint) -> Scalar {
    let mut hasher = prefix.clone();
    hasher.update(msg);
    hasher.update(encode_point(point));
    return finalize_scalar(hasher)
}

///Advance the chain past one ring slot:
///`c' = c + s mod n`, `T = s*G + c'*P`, then hash `T` into the next challenge.
fn chain_step(prefix: &Sm3, msg: &[u8], c: Scalar, s: Scalar, key: &PublicKey) -> Scalar {
    let c = c + s;
    let t = ProjectivePoint::lincomb(
        &ProjectivePoint::generator(), &s,
        &ProjectivePoint::from(key), &c
    );
    return challenge(prefix, msg, &t)
}

///A plain (unlinkable) ring signature.
///
///Proves that the message was signed by the holder of one of the ring's
///private keys, without revealing which one. Signatures by the same key
///cannot be correlated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingSignature {
    c0: Scalar,
    s: Vec<Scalar>

} impl RingSignature {
    ///Sign `msg` with one of the ring member's private keys.
    ///
    ///`strategy` generates the response scalars for the other slots;
    ///any strategy verifies, and the verifier cannot tell which was used.
    pub fn sign(
        rng: &mut impl CryptoRngCore, strategy: &impl NonceStrategy,
        keys: &KeyPair, ring: &Ring, msg: &[u8]
    ) -> Result<Self, SignatureError> {
        let n = ring.len();
        let pi = find_signer_index(keys, ring)?;
        let prefix = ring_hasher(ring);

        let mut k_pi = random_scalar(&mut *rng)?;
        let mut c = challenge(&prefix, msg, &ProjectivePoint::mul_by_generator(&k_pi));

        let mut s = vec![Scalar::ZERO; n];
        //walk the tail segment [pi+1, n)
        for i in pi + 1..n {
            s[i] = strategy.response(&mut *rng, &ring.0[i], msg)?;
            c = chain_step(&prefix, msg, c, s[i], &ring.0[i]);
        }
        //the challenge at the wrap-around is the signature's seed
        let c0 = c;
        //wrap through [0, pi)
        for i in 0..pi {
            s[i] = strategy.response(&mut *rng, &ring.0[i], msg)?;
            c = chain_step(&prefix, msg, c, s[i], &ring.0[i]);
        }

        s[pi] = close_response(&k_pi, &c, keys)?;
        k_pi.zeroize();

        return Ok(Self{c0, s})
    }

    ///Check the signature against a ring and message.
    ///
    ///Replays the chain for one full revolution and accepts iff it
    ///closes back on the seed. Malformed shapes simply return `false`.
    pub fn verify(&self, ring: &Ring, msg: &[u8]) -> bool {
        if ring.len() < 2 || self.s.len() != ring.len() {
            return false
        }
        let prefix = ring_hasher(ring);

        let mut c = self.c0;
        for (i, key) in ring.0.iter().enumerate() {
            c = chain_step(&prefix, msg, c, self.s[i], key);
        }
        //check if we end up back where we started
        return c == self.c0
    }

    ///Internal constructor for deserialization.
    pub(crate) fn from_parts(c0: Scalar, s: Vec<Scalar>) -> Self {
        return Self{c0, s}
    }

    ///The scalars of this signature in wire order: `c0`, then each response.
    pub(crate) fn scalars(&self) -> impl Iterator<Item = &Scalar> {
        return std::iter::once(&self.c0).chain(self.s.iter())
    }
}
