/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{self, Debug};

use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::curve::*;
use crate::errors::SignatureError;

///A ring signature key pair: a secret scalar `d` and its public key `d*G`.
///
///Keys with `d = n - 1` are rejected, since the closing response divides
///by `d + 1`. The secret scalar is cleared from memory on drop.
#[derive(Clone)]
pub struct KeyPair {
    d: NonZeroScalar,
    public: PublicKey

} impl KeyPair {
    ///Generate a new key pair from the given random source.
    pub fn random(rng: &mut impl CryptoRngCore) -> Result<Self, SignatureError> {
        loop {
            let scalar = random_scalar(rng)?;
            let nonzero = Option::<NonZeroScalar>::from(NonZeroScalar::new(scalar));
            if let Some(d) = nonzero {
                if let Ok(keys) = Self::new(d) {
                    return Ok(keys)
                }
            }
        }
    }

    ///Create a key pair from an existing secret scalar.
    pub fn new(d: NonZeroScalar) -> Result<Self, SignatureError> {
        if bool::from((*d + Scalar::ONE).is_zero()) {
            return Err(SignatureError::InvalidKey)
        }
        let public = PublicKey::from_secret_scalar(&d);
        return Ok(Self{d, public})
    }

    ///Create a key pair from an SM2 secret key.
    pub fn from_secret_key(secret: &SecretKey) -> Result<Self, SignatureError> {
        return Self::new(secret.to_nonzero_scalar())
    }

    ///The public key of this key pair.
    pub fn public_key(&self) -> &PublicKey {
        return &self.public
    }

    ///Borrow the secret scalar.
    pub(crate) fn secret(&self) -> &NonZeroScalar {
        return &self.d
    }

} impl Drop for KeyPair {
    fn drop(&mut self) {
        //clear the secret scalar from memory
        self.d.zeroize()
    }

} impl Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

///A Ring represents the ordered set of candidate signer public keys.
///
///Order is significant: the transcript hashes bind to it, so a verifier
///must be given the ring in the exact order it was signed with.
///
///This is a wrapper type for `Vec<PublicKey>`.
///The internal `Vec` can be accessed with `ring.0`.
#[derive(Clone, Debug, Default)]
pub struct Ring(pub Vec<PublicKey>);
impl Ring {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Appends a public key to the ring.
    pub fn push(&mut self, key: PublicKey) {
        self.0.push(key);
    }

    ///Inserts a public key at position `index` within the ring,
    ///shifting all keys after it to the right.
    pub fn insert(&mut self, index: usize, key: PublicKey) {
        self.0.insert(index, key);
    }

    ///The number of keys in the ring.
    pub fn len(&self) -> usize {
        return self.0.len()
    }

    ///Whether the ring holds no keys at all.
    pub fn is_empty(&self) -> bool {
        return self.0.is_empty()
    }

    ///The EC sum of all ring keys.
    ///
    ///The linkable schemes use this sum where a hash-to-curve of the ring
    ///would normally stand; the plain point sum is part of the transcript
    ///contract and is reproduced as-is, without any cofactor handling.
    pub fn sum(&self) -> ProjectivePoint {
        return self.0.iter().map(ProjectivePoint::from).sum()
    }

    ///The first position of `public` within the ring, if any.
    pub(crate) fn position_of(&self, public: &PublicKey) -> Option<usize> {
        return self.0.iter().position(|key| key == public)
    }

} impl From<Vec<PublicKey>> for Ring {
    fn from(keys: Vec<PublicKey>) -> Self {
        return Self(keys)
    }
}
