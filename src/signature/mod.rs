/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Ring signatures
//!
//!Each scheme closes a cycle of Schnorr-style challenges around the ring,
//!with the real signer's response computed last:
//! * `SAGSignature` proves knowledge of one private key in the ring, and nothing more
//! * `BLSAGSignature` additionally outputs a key image, so two signatures by the same key can be linked
//! * `MLSAGSignature` does the same for a row of several keys at once, outputting one key image per key
//!
//!Signing takes the random number generator as a parameter;
//!use a cryptographically secure one, such as `rand::rngs::OsRng`.

mod sag;
mod blsag;
mod mlsag;
mod signature_utils;

pub use sag::SAGSignature;
pub use blsag::BLSAGSignature;
pub use mlsag::MLSAGSignature;
