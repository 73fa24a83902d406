/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::curve::*;
use crate::errors::SerializationError;
use crate::signature::{RingSignature, LinkableRingSignature};

///Implements functions to convert to (`to_bytes`) and from (`from_bytes`)
///bytes for the signature types in this crate.
///
///The encoding is a sequence of 32-byte big-endian fields. A plain ring
///signature over a ring of `n` keys is `c0` followed by the `n` responses;
///a linkable one is preceded by the linking tag's two coordinates.
pub trait ToBytes: Sized {
    fn to_bytes(&self) -> Vec<u8>;
    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError>;
}

///Parse one 32-byte field as a scalar, rejecting values outside `[0, n-1]`.
fn read_scalar(field: &[u8]) -> Result<Scalar, SerializationError> {
    return Option::<Scalar>::from(Scalar::from_repr(FieldBytes::clone_from_slice(field)))
        .ok_or(SerializationError::InvalidEncoding)
}

///Split a byte string into 32-byte fields,
///requiring room for at least `min_fields` of them.
fn read_fields(bytes: &[u8], min_fields: usize) -> Result<Vec<&[u8]>, SerializationError> {
    if bytes.len() % FIELD_BYTES != 0 || bytes.len() / FIELD_BYTES < min_fields {
        return Err(SerializationError::InvalidLength)
    }
    return Ok(bytes.chunks_exact(FIELD_BYTES).collect())
}

impl ToBytes for RingSignature {
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        for scalar in self.scalars() {
            bytes.extend_from_slice(&scalar.to_bytes());
        }
        return bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        //c0 plus one response per ring key, and rings hold at least two keys
        let fields = read_fields(bytes, 3)?;
        let mut scalars = fields.into_iter().map(read_scalar);
        let c0 = scalars.next().expect("at least three fields")?;
        let s = scalars.collect::<Result<Vec<Scalar>, SerializationError>>()?;
        return Ok(Self::from_parts(c0, s))
    }
}

impl ToBytes for LinkableRingSignature {
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&encode_affine(&self.linking_tag));
        for scalar in self.scalars() {
            bytes.extend_from_slice(&scalar.to_bytes());
        }
        return bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        //tag coordinates, c0, and one response per ring key
        let fields = read_fields(bytes, 5)?;

        let sec1 = EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(fields[0]),
            FieldBytes::from_slice(fields[1]),
            false
        );
        let linking_tag = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&sec1))
            .ok_or(SerializationError::InvalidEncoding)?;

        let mut scalars = fields[2..].iter().map(|field| read_scalar(field));
        let c0 = scalars.next().expect("at least three scalar fields")?;
        let s = scalars.collect::<Result<Vec<Scalar>, SerializationError>>()?;
        return Ok(Self::from_parts(linking_tag, c0, s))
    }
}
