/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Transcript hashing and hashing to the curve

use sha3::{
    Digest,
    Keccak256
};
use crate::curve::*;
use crate::errors::SerializationError;
use crate::field::FieldElement;

///Hash the concatenation of `parts` to bytes, with Keccak-256.
///
///This is the original Keccak padding used by Monero and Ethereum, not FIPS-202 SHA3.
pub fn h_bytes(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    return hasher.finalize().into();
}

///Hash the concatenation of `parts` to a scalar.
///Every challenge of every signature scheme in this crate is computed with this.
pub fn h_scalar(parts: &[&[u8]]) -> Scalar {
    return reduce_bytes_le_to_scalar(h_bytes(parts));
}

//Constants of the map, all derived from the Montgomery coefficient A = 486662.
//The square roots are the ones chosen by `FieldElement::sqrt`; see the tests below.
const A: FieldElement = FieldElement::from_u64(PARAMS.montgomery_a);
///sqrt(-1), as chosen by Atkin's algorithm (this is -SQRT_M1)
const ATKIN_SQRT_M1: FieldElement = FieldElement::from_be_hex("547cdb7fb03e20f4d4b2ff66c2042858d0bce7f952d01b873b11e4d8b5f15f3d");
///sqrt(-2 * A * (A + 2))
const SQRT_NEG_2A_A2: FieldElement = FieldElement::from_be_hex("7e71fbefdad61b1720a9c53741fb19e3d19404a8b92a738d22a76975321c41ee");
///sqrt(2 * A * (A + 2))
const SQRT_2A_A2: FieldElement = FieldElement::from_be_hex("4d061e0a045a2cf691d451b7c0165fbe51de03460456f7dfd2de6483607c9ae0");
///sqrt(-sqrt(-1) * A * (A + 2))
const SQRT_NEG_SQRTM1_A_A2: FieldElement = FieldElement::from_be_hex("1a43f3031067dbf926c0f4887ef7432eee46fc08a13f4a49853d1903b6b39186");
///sqrt(sqrt(-1) * A * (A + 2))
const SQRT_SQRTM1_A_A2: FieldElement = FieldElement::from_be_hex("18b5eef2eb3df710476ab9bfc0f25d12bfdb00b15a69bdd6a7e48278e8cfd387");

///Which half of the map a field element lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    ///The candidate `x` already works; `rx` has been rescaled accordingly.
    Positive { rx: FieldElement },
    ///The candidate `x` must be twisted by sqrt(-1).
    Negative { rx: FieldElement, x: FieldElement },
}

///Decide the branch from `w - x` and `w + x`.
fn choose_branch(w: FieldElement, x: FieldElement, rx: FieldElement) -> Branch {
    if (w - x).is_zero() {
        return Branch::Positive { rx: -(rx * SQRT_2A_A2) }
    }
    if (w + x).is_zero() {
        return Branch::Positive { rx: -(rx * SQRT_NEG_2A_A2) }
    }
    return Branch::Negative { rx, x }
}

///Compute `w = 2u^2 + 1` and the branch the map takes for `u`.
fn map_branch(u: FieldElement) -> (FieldElement, Branch) {
    let u2 = u.square();
    let two = FieldElement::from_u64(2);

    //w = 2u^2 + 1, xp = w^2 - 2A^2u^2
    let w = two * u2 + FieldElement::ONE;
    let xp = w.square() - two * A.square() * u2;

    let (_, rx) = FieldElement::uv_ratio(&w, &xp);
    let x = rx.square() * xp;
    return (w, choose_branch(w, x, rx))
}

///Map a 32 byte hash to a point in the prime-order subgroup.
///
///This is Monero's `ge_fromfe_frombytes_vartime` followed by a multiplication by the cofactor,
///an Elligator 2 style map through the Montgomery form of the curve.
///Every step, including the choice of square roots and signs, must be exactly as below:
///any other encoding of the same map produces different key images.
///
///See:
///* <https://web.getmonero.org/resources/research-lab/pubs/ge_fromfe.pdf>
///* Ulas, "Rational points on certain hyperelliptic curves over finite fields"
pub fn hash_to_point(hash: &[u8; 32]) -> Result<EdwardsPoint, SerializationError> {
    let u = FieldElement::from_bytes_le(hash);
    let u2 = u.square();
    let two = FieldElement::from_u64(2);
    let (w, branch) = map_branch(u);

    let (rx, z, sign) = match branch {
        Branch::Positive { rx } => {
            (rx * u, -(two * A * u2), false)
        },
        Branch::Negative { rx, x } => {
            let x = x * ATKIN_SQRT_M1;
            let rx = match (w - x).is_zero() {
                false => rx * SQRT_NEG_SQRTM1_A_A2,
                true => -(rx * SQRT_SQRTM1_A_A2)
            };
            (rx, -A, true)
        }
    };
    let rx = match rx.is_negative() == sign {
        true => rx,
        false => -rx
    };

    //projective (rx : ry : rz) to affine
    let rz = z + w;
    let ry = z - w;
    let z_inv = rz.invert();
    let x = rx * rz * z_inv;
    let y = ry * z_inv;

    let mut encoded = y.to_bytes_le();
    encoded[31] |= (x.is_negative() as u8) << 7;
    let point = decode_point(&CompressedEdwardsY(encoded))?;

    return Ok(Scalar::from(PARAMS.cofactor) * point)
}

///Hash a public key to the generator of its key image, `Hp(K) = hash_to_point(Keccak256(K))`.
pub fn h_key_image_point(public_key: &CompressedEdwardsY) -> Result<EdwardsPoint, SerializationError> {
    return hash_to_point(&h_bytes(&[public_key.as_bytes()]));
}
