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

///Challenge for one ring position: `H(ring || msg || point)`.
fn challenge(encoded_ring: &[u8], msg: &[u8], point: &EdwardsPoint) -> Scalar {
    return h_scalar(&[encoded_ring, msg, &encode_point(point)]);
}

///A non-linkable ring signature.
///
///SAG stands for "Spontaneous Anonymous Group (signature)"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SAGSignature {
    c_0: Scalar,
    s: Vec<Scalar>,

} impl SAGSignature {
    ///Create a signature given a ring, a private key, the position of that key's public key in the ring, and a message.
    ///
    ///The private key is not checked against `ring[index]`:
    ///a signature made with the wrong key or index is produced, but will not verify.
    ///
    ///Return a SAG signature if signing was successful,
    ///or `SignatureError` if the ring or index are unusable.
    pub fn sign<R: RngCore + CryptoRng>(
        ring: &Ring, private_key: &PrivateKey, index: usize, msg: &[u8], rng: &mut R
    ) -> Result<Self, SignatureError> {
        let n = ring.len();
        check_signer(n, index)?;
        let ring_points = decode_ring(&ring.0)?;
        let encoded_ring = ring.encoded();
        trace!(ring_size = n, "creating SAG signature");

        let mut k = private_key.to_scalar();
        let mut alpha = random_scalar(rng);

        let mut c: Vec<Scalar> = vec!(Scalar::zero(); n);
        let mut s: Vec<Scalar> = vec!(Scalar::zero(); n);

        let mut i = (index + 1) % n;
        c[i] = challenge(&encoded_ring, msg, &(&alpha * G));
        while i != index {
            s[i] = random_scalar(rng);
            let next = (i + 1) % n;
            //(s[i] * G) + (c[i] * ring[i])
            c[next] = challenge(&encoded_ring, msg, &EdwardsPoint::multiscalar_mul(
                vec!(s[i], c[i]), vec!(G_POINT, ring_points[i])
            ));
            i = next;
        }
        s[index] = alpha - (c[index] * k);

        k.zeroize();
        alpha.zeroize();

        return Ok(Self{c_0: c[0], s})
    }

    ///Given a SAG signature and the ring it was made over, check if it's valid.
    ///
    ///Returns `Ok(true)` if the signature is valid and `Ok(false)` if it's invalid
    ///or doesn't fit the ring.
    ///Returns `Err(SignatureError)` if a ring member isn't a valid point.
    pub fn verify(&self, ring: &Ring, msg: &[u8]) -> Result<bool, SignatureError> {
        let n = ring.len();
        if n == 0 || self.s.len() != n {
            debug!(ring_size = n, responses = self.s.len(), "SAG signature does not fit the ring");
            return Ok(false)
        }
        let ring_points = decode_ring(&ring.0)?;
        let encoded_ring = ring.encoded();

        //travel around the ring
        let mut c_i = self.c_0;
        for i in 0..n {
            //(s[i] * G) + (c[i] * ring[i])
            let point = G_MULTISCALAR_MUL.vartime_mixed_multiscalar_mul(
                vec!(self.s[i]), vec!(c_i), vec!(ring_points[i])
            );
            c_i = challenge(&encoded_ring, msg, &point);
        }
        //check if we end up back where we started
        if c_i != self.c_0 {
            debug!(ring_size = n, "SAG challenge cycle does not close");
            return Ok(false)
        }
        return Ok(true)
    }

    ///Verify a signature in its raw byte layout (see `ToBytes`).
    ///
    ///Bytes which can't be a signature are treated as an invalid signature.
    pub fn verify_bytes(sig: &[u8], ring: &Ring, msg: &[u8]) -> Result<bool, SignatureError> {
        return match Self::from_bytes(sig) {
            Ok(signature) => signature.verify(ring, msg),
            Err(_) => {
                debug!(length = sig.len(), "malformed SAG signature bytes");
                Ok(false)
            }
        }
    }

    ///Number of ring members this signature is for.
    pub fn ring_size(&self) -> usize {
        return self.s.len()
    }

} impl ToBytes for SAGSignature {
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
