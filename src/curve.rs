/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants

use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::errors::SignatureError;

pub use sm2::{
    Sm2,
    Scalar,
    AffinePoint,
    ProjectivePoint,
    NonZeroScalar,
    PublicKey,
    SecretKey,
    FieldBytes,
    EncodedPoint
};
pub use elliptic_curve::{
    Field,
    PrimeField,
    Group,
    ops::{
        Reduce,
        MulByGenerator,
        LinearCombination
    },
    point::AffineCoordinates,
    sec1::{
        ToEncodedPoint,
        FromEncodedPoint
    }
};

///Width of one coordinate or scalar field in the transcript and wire encodings.
pub const FIELD_BYTES: usize = 32;

///Return a uniformly random scalar in `[1, n-1]` by rejection sampling,
///per FIPS 186-4, Appendix B.5.2.
///
///The SM2 group order is exactly 256 bits wide, so each candidate is a
///full 32-byte draw with no excess high bits to mask off.
pub fn random_scalar(rng: &mut impl CryptoRngCore) -> Result<Scalar, SignatureError> {
    let mut bytes = FieldBytes::default();
    loop {
        rng.try_fill_bytes(bytes.as_mut_slice())
            .map_err(|_| SignatureError::RandomSource)?;

        //rejects candidates >= n
        let candidate = Option::<Scalar>::from(Scalar::from_repr(bytes.clone()));
        if let Some(scalar) = candidate {
            if !bool::from(scalar.is_zero()) {
                bytes.as_mut_slice().zeroize();
                return Ok(scalar)
            }
        }
    }
}

///Encode a point as its two affine coordinates,
///each zero-padded to 32 bytes big-endian.
///
///The point at infinity has no affine coordinates and is written as
///64 zero bytes, matching the all-zero placeholder the transcripts expect.
pub fn encode_point(point: &ProjectivePoint) -> [u8; 2 * FIELD_BYTES] {
    return encode_affine(&point.to_affine())
}

///Affine flavor of `encode_point`.
pub fn encode_affine(point: &AffinePoint) -> [u8; 2 * FIELD_BYTES] {
    let mut encoded = [0u8; 2 * FIELD_BYTES];
    let sec1 = point.to_encoded_point(false);
    if let (Some(x), Some(y)) = (sec1.x(), sec1.y()) {
        encoded[..FIELD_BYTES].copy_from_slice(x);
        encoded[FIELD_BYTES..].copy_from_slice(y);
    }
    return encoded
}
