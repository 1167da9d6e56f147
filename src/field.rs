/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Arithmetic in the base field GF(2<sup>255</sup> - 19)
//!
//! `curve25519-dalek` keeps its field elements private,
//! so the handful of operations needed by `hash_to_point` are built on `crypto-bigint`.

use std::ops::{Add, Sub, Mul, Neg};

use crypto_bigint::{
    impl_modulus,
    modular::constant_mod::Residue,
    Encoding,
    U256
};

impl_modulus!(Curve25519Prime, U256, "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");

type FieldResidue = Residue<Curve25519Prime, { U256::LIMBS }>;

///p - 2, the inversion exponent
const P_MINUS_2: U256 = U256::from_be_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeb");
///(p - 5) / 8
const P_MINUS_5_DIV_8: U256 = U256::from_be_hex("0ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd");

///sqrt(-1) as used by the RFC 8032 point decoding procedure (the even root).
pub const SQRT_M1: FieldElement = FieldElement::from_be_hex("2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b0");

///An element of GF(2<sup>255</sup> - 19).
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(FieldResidue);

impl FieldElement {
    pub const ZERO: Self = Self(FieldResidue::ZERO);
    pub const ONE: Self = Self(FieldResidue::ONE);

    ///Create a field element from a big-endian hex string of exactly 64 characters.
    pub const fn from_be_hex(hex: &str) -> Self {
        return Self(FieldResidue::new(&U256::from_be_hex(hex)))
    }

    pub const fn from_u64(value: u64) -> Self {
        return Self(FieldResidue::new(&U256::from_u64(value)))
    }

    ///Interpret all 256 bits as a little-endian integer and reduce it modulo p.
    pub fn from_bytes_le(bytes: &[u8; 32]) -> Self {
        return Self(FieldResidue::new(&U256::from_le_bytes(*bytes)))
    }

    ///Canonical little-endian encoding.
    pub fn to_bytes_le(&self) -> [u8; 32] {
        return self.0.retrieve().to_le_bytes()
    }

    pub fn is_zero(&self) -> bool {
        return self == &Self::ZERO
    }

    ///An element is "negative" if its canonical encoding is odd.
    pub fn is_negative(&self) -> bool {
        return self.to_bytes_le()[0] & 1 == 1
    }

    pub fn square(&self) -> Self {
        return Self(self.0.square())
    }

    pub fn pow(&self, exponent: &U256) -> Self {
        return Self(self.0.pow(exponent))
    }

    ///Multiplicative inverse. Zero maps to zero.
    pub fn invert(&self) -> Self {
        return self.pow(&P_MINUS_2)
    }

    ///self<sup>(p - 5) / 8</sup>
    pub fn pow_p58(&self) -> Self {
        return self.pow(&P_MINUS_5_DIV_8)
    }

    ///Square root using Atkin's algorithm for p = 5 mod 8.
    ///
    ///Returns `None` if `self` is not a square.
    ///Which of the two roots comes out is fixed by the algorithm, not by sign,
    ///and constants derived from it must be reproduced with this exact procedure.
    pub fn sqrt(&self) -> Option<Self> {
        let n2 = *self + *self;
        let v = n2.pow_p58();
        let nv = *self * v;
        let i = (nv + nv) * v;
        let root = nv * (i - Self::ONE);
        if root.square() != *self {
            return None
        }
        return Some(root)
    }

    ///Compute sqrt(u / v).
    ///
    ///Returns whether `u / v` was a square, and the non-negative root candidate.
    ///When it isn't a square the returned value is sqrt(sqrt(-1) * u / v).
    pub fn uv_ratio(u: &Self, v: &Self) -> (bool, Self) {
        let v3 = v.square() * *v;
        let v7 = v3.square() * *v;
        let mut x = *u * v3 * (*u * v7).pow_p58();
        let vx2 = *v * x.square();

        let root1 = x;
        let root2 = x * SQRT_M1;
        let use_root1 = vx2 == *u;
        let use_root2 = vx2 == -*u;
        let no_root = vx2 == -(*u * SQRT_M1);
        if use_root1 {
            x = root1;
        }
        if use_root2 || no_root {
            x = root2;
        }
        if x.is_negative() {
            x = -x;
        }
        return (use_root1 || use_root2, x)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        return self.0.retrieve() == other.0.retrieve()
    }
}

impl Eq for FieldElement {}

impl Add for FieldElement {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        return Self(self.0 + rhs.0)
    }
}

impl Sub for FieldElement {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        return Self(self.0 - rhs.0)
    }
}

impl Mul for FieldElement {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        return Self(self.0 * rhs.0)
    }
}

impl Neg for FieldElement {
    type Output = Self;
    fn neg(self) -> Self {
        return Self::ZERO - self
    }
}
