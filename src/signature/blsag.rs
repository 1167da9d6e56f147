/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::internal_common::*;
use super::signature_utils::*;

///Challenge for one ring position: `H(msg || left || right)`.
///Unlike SAG, the ring itself is not hashed.
fn challenge(msg: &[u8], left: &EdwardsPoint, right: &EdwardsPoint) -> Scalar {
    return h_scalar(&[msg, &encode_point(left), &encode_point(right)]);
}

///A linkable ring signature with a single key image.
///
///bLSAG stands for "Back's Linkable Spontaneous Anonymous Group (signature)"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BLSAGSignature {
    c_0: Scalar,
    s: Vec<Scalar>,

} impl BLSAGSignature {
    ///Create a signature given a ring, a private key, the position of that key's public key in the ring, and a message.
    ///
    ///The key image is computed against `ring[index]`, and is not part of the signature bytes.
    ///
    ///Return the signature and its key image if signing was successful,
    ///or `SignatureError` if the ring or index are unusable.
    pub fn sign<R: RngCore + CryptoRng>(
        ring: &Ring, private_key: &PrivateKey, index: usize, msg: &[u8], rng: &mut R
    ) -> Result<(Self, KeyImage), SignatureError> {
        let n = ring.len();
        check_signer(n, index)?;
        let ring_points = decode_ring(&ring.0)?;
        let key_image_points = get_key_image_points(&ring.0)?;
        trace!(ring_size = n, "creating bLSAG signature");

        let mut k = private_key.to_scalar();
        //calculate the key image
        let key_image = k * key_image_points[index];

        let mut alpha = random_scalar(rng);

        let mut c: Vec<Scalar> = vec!(Scalar::zero(); n);
        let mut s: Vec<Scalar> = vec!(Scalar::zero(); n);

        let mut i = (index + 1) % n;
        c[i] = challenge(msg, &(&alpha * G), &(alpha * key_image_points[index]));
        while i != index {
            s[i] = random_scalar(rng);
            let next = (i + 1) % n;

            //(s[i] * G) + (c[i] * ring[i])
            let left = EdwardsPoint::multiscalar_mul(
                vec!(s[i], c[i]), vec!(G_POINT, ring_points[i])
            );
            //(s[i] * key_image_points[i]) + (c[i] * key_image)
            let right = EdwardsPoint::multiscalar_mul(
                vec!(s[i], c[i]), vec!(key_image_points[i], key_image)
            );

            c[next] = challenge(msg, &left, &right);
            i = next;
        }
        s[index] = alpha - (c[index] * k);

        k.zeroize();
        alpha.zeroize();

        return Ok((
            Self{c_0: c[0], s},
            key_image.compress()
        ))
    }

    ///Given a bLSAG signature, the ring it was made over, and its key image, check if it's valid.
    ///
    ///The key image must lie in the prime-order subgroup;
    ///one with a torsion component makes the signature invalid.
    ///
    ///Returns `Ok(true)` if the signature is valid and `Ok(false)` if it's invalid
    ///or doesn't fit the ring.
    ///Returns `Err(SignatureError)` if a ring member or the key image isn't a valid point.
    pub fn verify(&self, ring: &Ring, key_image: &KeyImage, msg: &[u8]) -> Result<bool, SignatureError> {
        let n = ring.len();
        if n == 0 || self.s.len() != n {
            debug!(ring_size = n, responses = self.s.len(), "bLSAG signature does not fit the ring");
            return Ok(false)
        }

        let key_image = match decode_key_image(key_image)? {
            Some(key_image) => key_image,
            None => {
                debug!("bLSAG key image is not in the prime-order subgroup");
                return Ok(false)
            }
        };
        let ring_points = decode_ring(&ring.0)?;
        let key_image_points = get_key_image_points(&ring.0)?;

        //travel around the ring
        let mut c_i = self.c_0;
        for i in 0..n {
            //(s[i] * G) + (c[i] * ring[i])
            let left = G_MULTISCALAR_MUL.vartime_mixed_multiscalar_mul(
                vec!(self.s[i]), vec!(c_i), vec!(ring_points[i])
            );
            //(s[i] * key_image_points[i]) + (c[i] * key_image)
            let right = EdwardsPoint::vartime_multiscalar_mul(
                vec!(self.s[i], c_i), vec!(key_image_points[i], key_image)
            );
            c_i = challenge(msg, &left, &right);
        }
        //check if we end up back where we started
        if c_i != self.c_0 {
            debug!(ring_size = n, "bLSAG challenge cycle does not close");
            return Ok(false)
        }
        return Ok(true)
    }

    ///Verify a signature in its raw byte layout (see `ToBytes`).
    ///
    ///Bytes which can't be a signature are treated as an invalid signature.
    pub fn verify_bytes(sig: &[u8], ring: &Ring, key_image: &KeyImage, msg: &[u8]) -> Result<bool, SignatureError> {
        return match Self::from_bytes(sig) {
            Ok(signature) => signature.verify(ring, key_image, msg),
            Err(_) => {
                debug!(length = sig.len(), "malformed bLSAG signature bytes");
                Ok(false)
            }
        }
    }

    ///Number of ring members this signature is for.
    pub fn ring_size(&self) -> usize {
        return self.s.len()
    }

} impl ToBytes for BLSAGSignature {
    ///`c_0 || s[0] || ... || s[n - 1]`
    fn to_bytes(&self) -> Vec<u8> {
        return scalars_to_bytes(&self.c_0, &self.s)
    }

    ///The ring size is implied by the length.
    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let (c_0, s) = scalars_from_bytes(bytes)?;
        return Ok(Self{c_0, s})
    }
}
