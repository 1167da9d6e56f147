/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;

///Make sure `index` names a position in a ring of `n` members
pub(crate) fn check_signer(n: usize, index: usize) -> Result<(), SignatureError> {
    if n == 0 {
        return Err(SignatureError::EmptyRing)
    }
    if index >= n {
        return Err(SignatureError::IndexOutOfRange)
    }
    return Ok(())
}

///decode every member of a ring
pub(crate) fn decode_ring(keys: &[PublicKey]) -> Result<Vec<EdwardsPoint>, SignatureError> {
    return keys.iter()
        .map(|key| decode_point(key).map_err(SignatureError::from))
        .collect();
}

///decode a key image, and check that it lies in the prime-order subgroup
///
///Returns `Ok(None)` if the key image decodes but has a torsion component.
pub(crate) fn decode_key_image(key_image: &KeyImage) -> Result<Option<EdwardsPoint>, SignatureError> {
    let point = decode_point(key_image)?;
    if !verify_key_image_order(&point) {
        return Ok(None)
    }
    return Ok(Some(point))
}

///return the key image points for a slice of encoded public keys
pub(crate) fn get_key_image_points(keys: &[PublicKey]) -> Result<Vec<EdwardsPoint>, SignatureError> {
    return keys.iter()
        .map(|key| h_key_image_point(key).map_err(SignatureError::from))
        .collect();
}

///encode a challenge followed by responses, 32 bytes each
pub(crate) fn scalars_to_bytes<'a, I>(c_0: &Scalar, s: I) -> Vec<u8>
where I: IntoIterator<Item = &'a Scalar> {
    let mut bytes = c_0.to_bytes().to_vec();
    for scalar in s {
        bytes.extend_from_slice(scalar.as_bytes());
    }
    return bytes
}

///split raw bytes into a challenge and at least one response
///
///Scalars are reduced rather than required to be canonical.
pub(crate) fn scalars_from_bytes(bytes: &[u8]) -> Result<(Scalar, Vec<Scalar>), SerializationError> {
    if bytes.len() < 64 || bytes.len() % 32 != 0 {
        return Err(SerializationError::DecodingError)
    }
    let mut scalars = bytes.chunks_exact(32).map(|chunk| {
        let mut scalar = [0u8; 32];
        scalar.copy_from_slice(chunk);
        reduce_bytes_le_to_scalar(scalar)
    });
    let c_0 = match scalars.next() {
        Some(c_0) => c_0,
        None => return Err(SerializationError::DecodingError)
    };
    return Ok((c_0, scalars.collect()))
}
