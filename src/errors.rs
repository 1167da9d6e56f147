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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to deserialize: wrong length, or bytes that don't encode a valid value.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}

///Ring signature errors
///
///Note that an invalid signature is *not* an error:
///verification returns `Ok(false)` for those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///A ring member or key image is not a canonical encoding of a curve point.
    InvalidPoint,
    ///The ring has no members.
    EmptyRing,
    ///The signer's index is not a position in the ring.
    IndexOutOfRange,
    ///The number of private keys does not match the number of ring columns.
    KeyCountMismatch,
    ///The rows of a multilayer ring do not all have the same, nonzero, number of columns.
    RaggedRing,

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::InvalidPoint => "Invalid curve point encoding.",
            Self::EmptyRing => "The ring is empty.",
            Self::IndexOutOfRange => "Signer index is out of range.",
            Self::KeyCountMismatch => "Private key count does not match the ring columns.",
            Self::RaggedRing => "Ring rows have inconsistent widths.",
        })
    }

} impl Error for SignatureError {}

impl From<SerializationError> for SignatureError {
    fn from(err: SerializationError) -> Self {
        return match err {
            SerializationError::DecodingError => Self::InvalidPoint
        }
    }
}
