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

///Challenge for one ring row: `H(msg || left[0] || right[0] || ... || left[J - 1] || right[J - 1])`.
fn challenge(msg: &[u8], points: &[(EdwardsPoint, EdwardsPoint)]) -> Scalar {
    let encoded_points: Vec<[u8; 32]> = points.iter()
        .flat_map(|(left, right)| [encode_point(left), encode_point(right)])
        .collect();
    return h_scalar(&[msg, &encoded_points.concat()]);
}

///A multilayer linkable ring signature.
///
///MLSAG stands for "Multilayered Linkable Spontaneous Anonymous Group (signature)"
///
///Each ring member is a row of `J` public keys, and the signer proves knowledge of all `J`
///private keys of one row at once, producing one key image per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MLSAGSignature {
    c_0: Scalar,
    s: Vec<Vec<Scalar>>,

} impl MLSAGSignature {
    ///Create a signature given a ring, one private key per column, the signer's row, and a message.
    ///
    ///Key images are computed against `ring[index][j]`, and are not part of the signature bytes.
    ///
    ///Return the signature and its key images (one per column) if signing was successful,
    ///or `SignatureError` if the ring, keys or index are unusable.
    pub fn sign<R: RngCore + CryptoRng>(
        ring: &RingMatrix, private_keys: &[PrivateKey], index: usize, msg: &[u8], rng: &mut R
    ) -> Result<(Self, Vec<KeyImage>), SignatureError> {
        let n = ring.rows();
        check_signer(n, index)?;
        let columns = ring.columns()?;
        if private_keys.len() != columns {
            return Err(SignatureError::KeyCountMismatch)
        }
        trace!(ring_size = n, columns, "creating MLSAG signature");

        let ring_points: Vec<Vec<EdwardsPoint>> = ring.0.iter()
            .map(|row| decode_ring(row)).collect::<Result<_, _>>()?;
        let key_image_points: Vec<Vec<EdwardsPoint>> = ring.0.iter()
            .map(|row| get_key_image_points(row)).collect::<Result<_, _>>()?;

        let mut k: Vec<Scalar> = private_keys.iter().map(|key| key.to_scalar()).collect();
        //calculate the key images
        let key_images: Vec<EdwardsPoint> = (0..columns)
            .map(|j| k[j] * key_image_points[index][j]).collect();

        let mut alpha: Vec<Scalar> = (0..columns).map(|_| random_scalar(rng)).collect();

        let mut c: Vec<Scalar> = vec!(Scalar::zero(); n);
        let mut s: Vec<Vec<Scalar>> = vec!(vec!(Scalar::zero(); columns); n);

        let mut i = (index + 1) % n;
        let start: Vec<(EdwardsPoint, EdwardsPoint)> = (0..columns)
            .map(|j| (&alpha[j] * G, alpha[j] * key_image_points[index][j])).collect();
        c[i] = challenge(msg, &start);

        while i != index {
            let mut points: Vec<(EdwardsPoint, EdwardsPoint)> = Vec::with_capacity(columns);
            for j in 0..columns {
                s[i][j] = random_scalar(rng);
                //(s[i][j] * G) + (c[i] * ring[i][j])
                let left = EdwardsPoint::multiscalar_mul(
                    vec!(s[i][j], c[i]), vec!(G_POINT, ring_points[i][j])
                );
                //(s[i][j] * key_image_points[i][j]) + (c[i] * key_images[j])
                let right = EdwardsPoint::multiscalar_mul(
                    vec!(s[i][j], c[i]), vec!(key_image_points[i][j], key_images[j])
                );
                points.push((left, right));
            }
            let next = (i + 1) % n;
            c[next] = challenge(msg, &points);
            i = next;
        }
        for j in 0..columns {
            s[index][j] = alpha[j] - (c[index] * k[j]);
        }

        k.zeroize();
        alpha.zeroize();

        return Ok((
            Self{c_0: c[0], s},
            key_images.iter().map(|key_image| key_image.compress()).collect()
        ))
    }

    ///Given an MLSAG signature, the ring it was made over, and its key images, check if it's valid.
    ///
    ///Every key image must lie in the prime-order subgroup;
    ///one with a torsion component makes the signature invalid.
    ///
    ///Returns `Ok(true)` if the signature is valid and `Ok(false)` if it's invalid
    ///or its dimensions don't fit the ring and key images (including an empty ring).
    ///Returns `Err(SignatureError)` if the ring is ragged, or a ring member or key image isn't a valid point.
    pub fn verify(&self, ring: &RingMatrix, key_images: &[KeyImage], msg: &[u8]) -> Result<bool, SignatureError> {
        let n = ring.rows();
        if n == 0 {
            debug!("MLSAG ring is empty");
            return Ok(false)
        }
        let columns = ring.columns()?;
        if self.s.len() != n
            || key_images.len() != columns
            || self.s.iter().any(|row| row.len() != columns) {
            debug!(ring_size = n, columns, key_images = key_images.len(), "MLSAG signature does not fit the ring");
            return Ok(false)
        }

        let mut decoded_key_images: Vec<EdwardsPoint> = Vec::with_capacity(columns);
        for key_image in key_images {
            match decode_key_image(key_image)? {
                Some(key_image) => decoded_key_images.push(key_image),
                None => {
                    debug!("MLSAG key image is not in the prime-order subgroup");
                    return Ok(false)
                }
            }
        }
        let ring_points: Vec<Vec<EdwardsPoint>> = ring.0.iter()
            .map(|row| decode_ring(row)).collect::<Result<_, _>>()?;
        let key_image_points: Vec<Vec<EdwardsPoint>> = ring.0.iter()
            .map(|row| get_key_image_points(row)).collect::<Result<_, _>>()?;

        //travel around the ring
        let mut c_i = self.c_0;
        for i in 0..n {
            let points: Vec<(EdwardsPoint, EdwardsPoint)> = (0..columns).map(|j| {
                //(s[i][j] * G) + (c[i] * ring[i][j])
                let left = G_MULTISCALAR_MUL.vartime_mixed_multiscalar_mul(
                    vec!(self.s[i][j]), vec!(c_i), vec!(ring_points[i][j])
                );
                //(s[i][j] * key_image_points[i][j]) + (c[i] * key_images[j])
                let right = EdwardsPoint::vartime_multiscalar_mul(
                    vec!(self.s[i][j], c_i), vec!(key_image_points[i][j], decoded_key_images[j])
                );
                (left, right)
            }).collect();
            c_i = challenge(msg, &points);
        }
        //check if we end up back where we started
        if c_i != self.c_0 {
            debug!(ring_size = n, columns, "MLSAG challenge cycle does not close");
            return Ok(false)
        }
        return Ok(true)
    }

    ///Verify a signature in its raw byte layout (see `to_bytes`).
    ///
    ///The number of columns is recovered from the length and the number of ring rows;
    ///bytes which can't be a signature for this ring are treated as an invalid signature.
    pub fn verify_bytes(
        sig: &[u8], ring: &RingMatrix, key_images: &[KeyImage], msg: &[u8]
    ) -> Result<bool, SignatureError> {
        return match Self::from_bytes(sig, ring.rows()) {
            Ok(signature) => signature.verify(ring, key_images, msg),
            Err(_) => {
                debug!(length = sig.len(), ring_size = ring.rows(), "malformed MLSAG signature bytes");
                Ok(false)
            }
        }
    }

    ///Number of ring rows this signature is for.
    pub fn ring_size(&self) -> usize {
        return self.s.len()
    }

    ///Number of columns (and key images) this signature is for.
    pub fn columns(&self) -> usize {
        return self.s.first().map_or(0, |row| row.len())
    }

    ///Encode as `c_0 || s[0][0] || s[0][1] || ... || s[n - 1][J - 1]`, row-major.
    pub fn to_bytes(&self) -> Vec<u8> {
        return scalars_to_bytes(&self.c_0, self.s.iter().flatten())
    }

    ///Decode a signature over a ring of `ring_size` rows.
    ///
    ///The number of columns is `(length - 32) / (32 * ring_size)`, which must divide exactly.
    pub fn from_bytes(bytes: &[u8], ring_size: usize) -> Result<Self, SerializationError> {
        let (c_0, responses) = scalars_from_bytes(bytes)?;
        if ring_size == 0 || responses.len() % ring_size != 0 {
            return Err(SerializationError::DecodingError)
        }
        let columns = responses.len() / ring_size;
        let s = responses.chunks_exact(columns)
            .map(|row| row.to_vec()).collect();
        return Ok(Self{c_0, s})
    }
}
