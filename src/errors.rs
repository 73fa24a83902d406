/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone)]
pub enum SerializationError {
    ///The byte string is not a whole number of fields,
    ///or encodes the wrong number of fields.
    InvalidLength,
    ///A field does not decode to a valid scalar or curve point.
    InvalidEncoding,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::InvalidLength => "Wrong byte length.",
            Self::InvalidEncoding => "Invalid field encoding."
        })
    }

} impl Error for SerializationError {}

///Ring signature errors
#[derive(Debug, Clone)]
pub enum SignatureError {
    ///A ring needs at least two public keys.
    RingTooSmall,
    ///The signer's public key is not a member of the ring.
    SignerNotInRing,
    ///The private key has no closing response (`d + 1` is not invertible).
    InvalidKey,
    ///The random source failed to produce bytes.
    RandomSource,

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::RingTooSmall => "The ring needs at least two public keys.",
            Self::SignerNotInRing => "The signer's public key is not in the ring.",
            Self::InvalidKey => "This private key cannot produce a closing response.",
            Self::RandomSource => "The random source failed.",
        })
    }

} impl Error for SignatureError {}
