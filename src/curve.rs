/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants

use crate::errors::SerializationError;
use crate::tobytes::*;

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    edwards::{
        EdwardsPoint,
        CompressedEdwardsY,
        EdwardsBasepointTable,
        VartimeEdwardsPrecomputation
    },
    traits::{
        Identity,
        IsIdentity,
        MultiscalarMul,
        VartimeMultiscalarMul,
        VartimePrecomputedMultiscalarMul
    }
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &EdwardsBasepointTable = &constants::ED25519_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: EdwardsPoint = PARAMS.base_point;

lazy_static! {
    pub(crate) static ref G_MULTISCALAR_MUL: VartimeEdwardsPrecomputation = VartimeEdwardsPrecomputation::new(vec!(G_POINT));
}

///Fixed parameters of Ed25519.
///
///These never change; `PARAMS` is the only instance.
#[derive(Debug, Clone, Copy)]
pub struct CurveParams {
    ///Order `N` of the prime-order subgroup generated by the basepoint.
    pub order: Scalar,
    ///Cofactor of the full curve group.
    pub cofactor: u8,
    ///The `A` coefficient of the birationally equivalent Montgomery curve (Curve25519).
    pub montgomery_a: u64,
    ///The basepoint `G`.
    pub base_point: EdwardsPoint,
}

///Ed25519 curve parameters.
pub const PARAMS: CurveParams = CurveParams {
    order: constants::BASEPOINT_ORDER,
    cofactor: 8,
    montgomery_a: 486662,
    base_point: constants::ED25519_BASEPOINT_POINT,
};

///Encode a point to its standard 32-byte compressed form.
pub fn encode_point(point: &EdwardsPoint) -> [u8; 32] {
    return point.compress().to_bytes()
}

///Decode a compressed point.
///
///Only canonical encodings are accepted:
///the point must re-encode to exactly the same bytes.
pub fn decode_point(encoded: &CompressedEdwardsY) -> Result<EdwardsPoint, SerializationError> {
    let point = match encoded.decompress() {
        Some(point) => point,
        None => return Err(SerializationError::DecodingError)
    };
    if &point.compress() != encoded {
        return Err(SerializationError::DecodingError)
    }
    return Ok(point)
}

///Interpret 32 little-endian bytes as an integer and reduce it modulo the group order.
pub fn reduce_bytes_le_to_scalar(bytes: [u8; 32]) -> Scalar {
    return Scalar::from_bytes_mod_order(bytes)
}

///Interpret 64 little-endian bytes as an integer and reduce it modulo the group order.
pub fn reduce_to_scalar(bytes: &[u8; 64]) -> Scalar {
    return Scalar::from_bytes_mod_order_wide(bytes)
}

///return a random scalar
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    let mut scalar_bytes = [0u8; 64];
    rng.fill_bytes(&mut scalar_bytes);
    let scalar = reduce_to_scalar(&scalar_bytes);
    scalar_bytes.zeroize();
    return scalar
}

///return a random point in the prime-order subgroup
pub fn random_point<R: RngCore + CryptoRng>(rng: &mut R) -> EdwardsPoint {
    return &random_scalar(rng) * G;
}

///Check that `N * point` is the identity, where `N` is the group order.
///
///This rejects points with a torsion component, such as maliciously crafted key images.
///The multiplication is a plain double-and-add over the bits of `N`,
///so it does not rely on `point` already being in the prime-order subgroup.
pub fn verify_key_image_order(point: &EdwardsPoint) -> bool {
    let mut result = EdwardsPoint::identity();
    let mut doubled = *point;
    for byte in PARAMS.order.as_bytes() {
        for bit in 0..8 {
            if (byte >> bit) & 1 == 1 {
                result += doubled;
            }
            doubled = doubled + doubled;
        }
    }
    return result.is_identity()
}

impl ToBytes for Scalar {
    fn to_bytes(&self) -> Vec<u8> {
        return self.reduce().to_bytes().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(bytes) => {
                match Scalar::from_canonical_bytes(bytes) {
                    Some(scalar) => Ok(scalar),
                    None => Err(SerializationError::DecodingError)
                }
            },
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

impl ToBytes for EdwardsPoint {
    fn to_bytes(&self) -> Vec<u8> {
        return encode_point(self).to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != 32 {
            return Err(SerializationError::DecodingError)
        }
        return decode_point(&CompressedEdwardsY::from_slice(bytes));
    }
}
