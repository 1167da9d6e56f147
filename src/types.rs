/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::curve::*;
use crate::errors::SignatureError;
use crate::tobytes::*;

///A public key `k * G`, in its 32 byte compressed encoding.
pub type PublicKey = CompressedEdwardsY;

///A key image `k * Hp(K)`, in its 32 byte compressed encoding.
///
///Two linkable signatures made with the same private key always carry the same key image,
///regardless of the ring, the message or the randomness used.
pub type KeyImage = CompressedEdwardsY;

///A Ring represents the ordered public keys of a single-layer ring signature.
///
///This is a wrapper type for `Vec<PublicKey>`.
///The internal `Vec` can be accessed with `ring.0`.
///The order matters: it is committed to by the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring(pub Vec<PublicKey>);
impl Ring {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Appends a public key to the ring.
    pub fn push(&mut self, value: PublicKey) {
        self.0.push(value);
    }

    ///Inserts a public key at position `index` within the ring, shifting all keys after it to the right.
    pub fn insert(&mut self, index: usize, element: PublicKey) {
        self.0.insert(index, element);
    }

    ///Number of members in the ring.
    pub fn len(&self) -> usize {
        return self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty()
    }

    ///Position of `key` within the ring, if it is a member.
    pub fn position(&self, key: &PublicKey) -> Option<usize> {
        return self.0.iter().position(|member| member == key)
    }

    ///All members' encodings, concatenated in ring order.
    pub(crate) fn encoded(&self) -> Vec<u8> {
        return self.0.iter().flat_map(|key| key.to_bytes()).collect()
    }

} impl From<Vec<PublicKey>> for Ring {
    fn from(keys: Vec<PublicKey>) -> Self {
        return Self(keys)
    }
}

///A RingMatrix holds the public keys of a multilayer ring signature:
///one row per ring member, one column per layer.
///
///This is a wrapper type for `Vec<Vec<PublicKey>>`, indexed as `ring.0[row][column]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingMatrix(pub Vec<Vec<PublicKey>>);
impl RingMatrix {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Appends a row of public keys to the ring.
    pub fn push(&mut self, row: Vec<PublicKey>) {
        self.0.push(row);
    }

    ///Inserts a row at position `index`, shifting all rows after it down.
    pub fn insert(&mut self, index: usize, row: Vec<PublicKey>) {
        self.0.insert(index, row);
    }

    ///Number of rows (ring members).
    pub fn rows(&self) -> usize {
        return self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty()
    }

    ///Number of columns (layers).
    ///
    ///Returns `SignatureError::EmptyRing` if there are no rows,
    ///and `SignatureError::RaggedRing` if rows differ in width or have no columns.
    pub fn columns(&self) -> Result<usize, SignatureError> {
        let columns = match self.0.first() {
            Some(row) => row.len(),
            None => return Err(SignatureError::EmptyRing)
        };
        if columns == 0 || self.0.iter().any(|row| row.len() != columns) {
            return Err(SignatureError::RaggedRing)
        }
        return Ok(columns)
    }

} impl From<Vec<Vec<PublicKey>>> for RingMatrix {
    fn from(rows: Vec<Vec<PublicKey>>) -> Self {
        return Self(rows)
    }
}
