/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!SM2 ring signatures, plain and linkable

mod ring;
mod linkable;
mod signature_utils;

pub use ring::RingSignature;
pub use linkable::LinkableRingSignature;

pub(crate) use signature_utils::{
    find_signer_index,
    close_response,
    ring_hasher,
    tagged_ring_hasher,
    finalize_scalar
};
