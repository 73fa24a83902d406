/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Response scalar strategies for the non-signer ring slots.
//!
//! Every walk step needs a pseudo-response `s_i` for the ring member at
//! slot `i`. Any distribution over `[1, n-1]` verifies; which one to use
//! is a policy choice, so it is pluggable.

use rand_core::CryptoRngCore;
use sm3::{Sm3, Digest};

use crate::curve::*;
use crate::errors::SignatureError;
use crate::hashes::{hash_to_scalar, identity_hash};

///A strategy producing the response scalars `s_i` for non-signer slots.
pub trait NonceStrategy {
    ///Produce a response scalar for the ring member `public`.
    ///
    ///`msg` is the message being signed; strategies that do not bind to
    ///it are free to ignore it.
    fn response(
        &self, rng: &mut impl CryptoRngCore, public: &PublicKey, msg: &[u8]
    ) -> Result<Scalar, SignatureError>;
}

///Uniformly random responses in `[1, n-1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleNonce;

impl NonceStrategy for SimpleNonce {
    fn response(
        &self, rng: &mut impl CryptoRngCore, _public: &PublicKey, _msg: &[u8]
    ) -> Result<Scalar, SignatureError> {
        return random_scalar(rng)
    }
}

///Responses derived the way SM2 signing derives its `r` component,
///so that a slot's scalar is shaped like a signature the ring member
///could have produced over `msg` themselves.
///
///Computes `e = H(Z || msg)` with the member's identity hash `Z` under
///the default identifier, then draws `k` until `r = (x(k*G) + e) mod n`
///is nonzero and `r + k` is nonzero mod `n`, and returns `r + k`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sm2Nonce;

impl NonceStrategy for Sm2Nonce {
    fn response(
        &self, rng: &mut impl CryptoRngCore, public: &PublicKey, msg: &[u8]
    ) -> Result<Scalar, SignatureError> {
        let mut hasher = Sm3::new();
        hasher.update(identity_hash(public));
        hasher.update(msg);
        let e = hash_to_scalar(hasher.finalize().into());

        loop {
            let k = random_scalar(&mut *rng)?;
            let x = ProjectivePoint::mul_by_generator(&k).to_affine().x();
            let r = e + Scalar::reduce_bytes(&x);
            if bool::from(r.is_zero() | (r + k).is_zero()) {
                continue
            }
            return Ok(r + k)
        }
    }
}
