/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! SM3 hashing helpers

use sm3::{Sm3, Digest};
use crate::curve::*;

///The default SM2 distinguishing identifier, `"1234567812345678"`.
///
///Used by the user identity hash when no other identifier is agreed on.
pub const DEFAULT_UID: &[u8] = b"1234567812345678";

//SM2 curve equation coefficients, big-endian.
//The generator coordinates are taken from the curve backend instead.
const SM2_A: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC
];
const SM2_B: [u8; 32] = [
    0x28, 0xE9, 0xFA, 0x9E, 0x9D, 0x9F, 0x5E, 0x34,
    0x4D, 0x5A, 0x9E, 0x4B, 0xCF, 0x65, 0x09, 0xA7,
    0xF3, 0x97, 0x89, 0xF5, 0x15, 0xAB, 0x8F, 0x92,
    0xDD, 0xBC, 0xBD, 0x41, 0x4D, 0x94, 0x0E, 0x93
];

///Hash bytes to bytes.
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sm3::new();
    hasher.update(msg);
    return hasher.finalize().into()
}

///Hash bytes to scalar.
pub fn h_scalar(msg: &[u8]) -> Scalar {
    let mut hasher = Sm3::new();
    hasher.update(msg);
    return hash_to_scalar(hasher.finalize().into())
}

///Convert a digest to a scalar using the left-most bits of the hash,
///per FIPS 186-4, Section 6.4 (step 5 of SEC 1, Version 2.0, Section 4.1.3).
///
///SM3 output and the SM2 group order are both exactly 256 bits wide,
///so the truncate-and-shift step is the identity here and the digest
///enters scalar arithmetic through a single reduction.
pub fn hash_to_scalar(digest: [u8; 32]) -> Scalar {
    return Scalar::reduce_bytes(&FieldBytes::from(digest))
}

///The SM2 user identity hash `Z = SM3(ENTL || ID || a || b || xG || yG || xA || yA)`
///of a public key under the default identifier (GB/T 32918.2).
pub fn identity_hash(public: &PublicKey) -> [u8; 32] {
    let entl = (DEFAULT_UID.len() * 8) as u16;
    let generator = encode_point(&ProjectivePoint::generator());
    let key = encode_affine(public.as_affine());

    let mut hasher = Sm3::new();
    hasher.update(entl.to_be_bytes());
    hasher.update(DEFAULT_UID);
    hasher.update(SM2_A);
    hasher.update(SM2_B);
    hasher.update(generator);
    hasher.update(key);
    return hasher.finalize().into()
}
