/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Ed25519 private keys

use std::fmt::Debug;

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use crate::internal_common::*;

///An Ed25519 private key: a 32 byte seed.
///
///The signing scalar is derived the same way Ed25519 does it:
///the first half of `SHA-512(seed)`, clamped, reduced modulo the group order.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    ///Wrap an existing seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        return Self(seed)
    }

    ///Generate a new random private key.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        return Self(seed)
    }

    ///Return the seed bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        return &self.0
    }

    ///Derive the signing scalar `k`.
    pub fn to_scalar(&self) -> Scalar {
        let hashed = Sha512::digest(self.0);
        let mut head = [0u8; 32];
        head.copy_from_slice(&hashed[..32]);
        head[0] &= 248;
        head[31] &= 127;
        head[31] |= 64;

        let scalar = reduce_bytes_le_to_scalar(head);
        head.zeroize();
        return scalar
    }

    ///Return the public key `k * G`.
    pub fn public_key(&self) -> PublicKey {
        return (&self.to_scalar() * G).compress()
    }

    ///Return the key image `k * Hp(K)`, where `K` is this key's own public key.
    ///
    ///This is the key image a linkable signature produces when this key signs at its own ring position.
    pub fn key_image(&self) -> Result<KeyImage, SignatureError> {
        let generator = h_key_image_point(&self.public_key())?;
        return Ok((self.to_scalar() * generator).compress())
    }

} impl Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey(..)")
    }

} impl Drop for PrivateKey {
    fn drop(&mut self) {
        //clear the key from memory to improve security
        self.0.zeroize()
    }

} impl ToBytes for PrivateKey {
    fn to_bytes(&self) -> Vec<u8> {
        return self.0.to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(seed) => Ok(Self(seed)),
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}
