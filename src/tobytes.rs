/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use serde::{
    Serialize,
    Deserialize,
};
pub use crate::errors::SerializationError;

///Implements functions to convert to (`to_bytes`) and from (`from_bytes`) the raw,
///fixed-width byte layouts used by this crate.
///
///Scalars are 32 bytes little-endian, points are 32-byte compressed Edwards-Y encodings,
///and signatures are a challenge scalar followed by every response scalar.
///There are no length prefixes.
pub trait ToBytes: Sized {
    fn to_bytes(&self) -> Vec<u8>;

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError>;
}
