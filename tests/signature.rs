// SPDX short identifier: Unlicense

use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use ringsig::{
    common::*,
    signature::{
        SAGSignature,
        BLSAGSignature,
        MLSAGSignature
    }
};

const RING_SIZES: [usize; 7] = [1, 2, 3, 4, 8, 11, 16];
const MSG: &[u8] = b"Hello World!";

fn random_public_key() -> PublicKey {
    return PrivateKey::generate(&mut thread_rng()).public_key()
}

///a ring of `size` random keys, with `key`'s public key at `index`
fn ring_with(key: &PrivateKey, size: usize, index: usize) -> Ring {
    let mut ring = Ring::new();
    for _ in 0..size {
        ring.push(random_public_key());
    }
    ring.0[index] = key.public_key();
    return ring
}

///a `rows` x `columns` ring of random keys, with `keys`' public keys in row `index`
fn matrix_with(keys: &[PrivateKey], rows: usize, index: usize) -> RingMatrix {
    let mut ring = RingMatrix::new();
    for _ in 0..rows {
        ring.push(keys.iter().map(|_| random_public_key()).collect());
    }
    ring.0[index] = keys.iter().map(|key| key.public_key()).collect();
    return ring
}

fn random_keys(columns: usize) -> Vec<PrivateKey> {
    return (0..columns).map(|_| PrivateKey::generate(&mut thread_rng())).collect()
}

///a key image with a small-order component added
fn torsioned(key_image: &KeyImage) -> KeyImage {
    let point = key_image.decompress().unwrap();
    return (point + constants::EIGHT_TORSION[1]).compress()
}

#[test]
fn sag_test() {
    let mut rng = thread_rng();
    for x in RING_SIZES {
        //include the last position, where the cycle wraps straight around to 0
        for index in [rng.gen::<usize>() % x, x - 1] {
            let key = PrivateKey::generate(&mut rng);
            let ring = ring_with(&key, x, index);

            //sign
            let sig = SAGSignature::sign(&ring, &key, index, MSG, &mut rng).unwrap();
            assert_eq!(sig.ring_size(), x);

            //serialize
            let serialized = sig.to_bytes();
            assert_eq!(serialized.len(), 32 + 32 * x);
            let deserialized = SAGSignature::from_bytes(&serialized).unwrap();
            assert_eq!(deserialized, sig);

            //verify
            assert!(deserialized.verify(&ring, MSG).unwrap());
            assert!(SAGSignature::verify_bytes(&serialized, &ring, MSG).unwrap());

            //wrong message
            assert!(!deserialized.verify(&ring, b"123456").unwrap());
        }
    }
}

#[test]
fn blsag_test() {
    let mut rng = thread_rng();
    for x in RING_SIZES {
        for index in [rng.gen::<usize>() % x, x - 1] {
            let key = PrivateKey::generate(&mut rng);
            let ring = ring_with(&key, x, index);

            //sign
            let (sig, key_image) = BLSAGSignature::sign(&ring, &key, index, MSG, &mut rng).unwrap();

            //sanity check the key image
            assert_eq!(key_image, key.key_image().unwrap());

            //serialize
            let serialized = sig.to_bytes();
            assert_eq!(serialized.len(), 32 + 32 * x);
            let deserialized = BLSAGSignature::from_bytes(&serialized).unwrap();

            //verify
            assert!(deserialized.verify(&ring, &key_image, MSG).unwrap());
            assert!(BLSAGSignature::verify_bytes(&serialized, &ring, &key_image, MSG).unwrap());

            //wrong message
            assert!(!deserialized.verify(&ring, &key_image, b"123456").unwrap());

            //someone else's key image
            let other = PrivateKey::generate(&mut rng).key_image().unwrap();
            assert!(!deserialized.verify(&ring, &other, MSG).unwrap());
        }
    }
}

#[test]
fn mlsag_test() {
    let mut rng = thread_rng();
    for x in RING_SIZES {
        for columns in [1, 3] {
            let index = rng.gen::<usize>() % x;
            let keys = random_keys(columns);
            let ring = matrix_with(&keys, x, index);

            //sign
            let (sig, key_images) = MLSAGSignature::sign(&ring, &keys, index, MSG, &mut rng).unwrap();
            assert_eq!(sig.ring_size(), x);
            assert_eq!(sig.columns(), columns);

            //sanity check the key images
            for (key, key_image) in keys.iter().zip(&key_images) {
                assert_eq!(key_image, &key.key_image().unwrap());
            }

            //serialize
            let serialized = sig.to_bytes();
            assert_eq!(serialized.len(), 32 + 32 * x * columns);
            let deserialized = MLSAGSignature::from_bytes(&serialized, x).unwrap();
            assert_eq!(deserialized, sig);

            //verify
            assert!(deserialized.verify(&ring, &key_images, MSG).unwrap());
            assert!(MLSAGSignature::verify_bytes(&serialized, &ring, &key_images, MSG).unwrap());

            //wrong message
            assert!(!deserialized.verify(&ring, &key_images, b"123456").unwrap());

            //key images in the wrong order
            if columns > 1 {
                let mut swapped = key_images.clone();
                swapped.swap(0, 1);
                assert!(!deserialized.verify(&ring, &swapped, MSG).unwrap());
            }
        }
    }
}

#[test]
fn sag_scenario() {
    let mut rng = thread_rng();
    let index = 2;
    let key = PrivateKey::generate(&mut rng);
    let mut ring = ring_with(&key, 10, index);

    let sig = SAGSignature::sign(&ring, &key, index, MSG, &mut rng).unwrap();
    assert!(sig.verify(&ring, MSG).unwrap());

    //wrong index
    let sig = SAGSignature::sign(&ring, &key, index + 1, MSG, &mut rng).unwrap();
    assert!(!sig.verify(&ring, MSG).unwrap());

    //the signer's key is not in the ring
    let sig = SAGSignature::sign(&ring, &key, index, MSG, &mut rng).unwrap();
    ring.0[index] = random_public_key();
    assert!(!sig.verify(&ring, MSG).unwrap());
    let sig = SAGSignature::sign(&ring, &key, index, MSG, &mut rng).unwrap();
    assert!(!sig.verify(&ring, MSG).unwrap());
}

#[test]
fn blsag_scenario() {
    let mut rng = thread_rng();
    let index = 2;
    let key = PrivateKey::generate(&mut rng);
    let mut ring = ring_with(&key, 10, index);

    let (sig, key_image) = BLSAGSignature::sign(&ring, &key, index, MSG, &mut rng).unwrap();
    assert!(sig.verify(&ring, &key_image, MSG).unwrap());

    //wrong index
    let (sig, key_image) = BLSAGSignature::sign(&ring, &key, index + 1, MSG, &mut rng).unwrap();
    assert!(!sig.verify(&ring, &key_image, MSG).unwrap());

    //wrong private key
    let wrong_key = PrivateKey::generate(&mut rng);
    let (sig, key_image) = BLSAGSignature::sign(&ring, &wrong_key, index, MSG, &mut rng).unwrap();
    assert!(!sig.verify(&ring, &key_image, MSG).unwrap());

    //the signer's key is not in the ring
    ring.0[index] = random_public_key();
    let (sig, key_image) = BLSAGSignature::sign(&ring, &key, index, MSG, &mut rng).unwrap();
    assert!(!sig.verify(&ring, &key_image, MSG).unwrap());
}

#[test]
fn mlsag_scenario() {
    let mut rng = thread_rng();
    let index = 2;
    let keys = random_keys(5);
    let mut ring = matrix_with(&keys, 10, index);

    let (sig, key_images) = MLSAGSignature::sign(&ring, &keys, index, MSG, &mut rng).unwrap();
    assert!(sig.verify(&ring, &key_images, MSG).unwrap());

    //wrong index
    let (bad_sig, bad_key_images) = MLSAGSignature::sign(&ring, &keys, index + 1, MSG, &mut rng).unwrap();
    assert!(!bad_sig.verify(&ring, &bad_key_images, MSG).unwrap());

    //wrong private key in one column, while the row keeps the original public keys
    let mut wrong_keys = keys.clone();
    wrong_keys[3] = PrivateKey::generate(&mut rng);
    let (bad_sig, bad_key_images) = MLSAGSignature::sign(&ring, &wrong_keys, index, MSG, &mut rng).unwrap();
    assert!(!bad_sig.verify(&ring, &bad_key_images, MSG).unwrap());
    assert!(!bad_sig.verify(&ring, &key_images, MSG).unwrap());

    //the signer's keys are no longer in the ring
    ring.0[index] = (0..5).map(|_| random_public_key()).collect();
    assert!(!sig.verify(&ring, &key_images, MSG).unwrap());
    let (sig, key_images) = MLSAGSignature::sign(&ring, &keys, index, MSG, &mut rng).unwrap();
    assert!(!sig.verify(&ring, &key_images, MSG).unwrap());
}

#[test]
fn ring_tampering() {
    let mut rng = thread_rng();
    let index = 4;
    let key = PrivateKey::generate(&mut rng);
    let ring = ring_with(&key, 8, index);

    let sag = SAGSignature::sign(&ring, &key, index, MSG, &mut rng).unwrap();
    let (blsag, key_image) = BLSAGSignature::sign(&ring, &key, index, MSG, &mut rng).unwrap();

    //replacing any member breaks both signatures
    for i in 0..ring.len() {
        let mut tampered = ring.clone();
        tampered.0[i] = random_public_key();
        assert!(!sag.verify(&tampered, MSG).unwrap());
        assert!(!blsag.verify(&tampered, &key_image, MSG).unwrap());
    }

    //so does reordering
    let mut reordered = ring.clone();
    reordered.0.swap(0, 1);
    assert!(!sag.verify(&reordered, MSG).unwrap());
    assert!(!blsag.verify(&reordered, &key_image, MSG).unwrap());
}

#[test]
fn key_image_determinism() {
    let key = PrivateKey::generate(&mut thread_rng());

    //different rings, messages and nonces, same key image
    let mut key_images: Vec<KeyImage> = Vec::new();
    for seed in 0..4u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let index = seed as usize;
        let ring = ring_with(&key, 5, index);
        let (sig, key_image) = BLSAGSignature::sign(&ring, &key, index, &seed.to_le_bytes(), &mut rng).unwrap();
        assert!(sig.verify(&ring, &key_image, &seed.to_le_bytes()).unwrap());
        key_images.push(key_image);
    }
    assert!(key_images.windows(2).all(|pair| pair[0] == pair[1]));

    //the same holds for each column of an MLSAG
    let keys = vec!(key.clone(), PrivateKey::generate(&mut thread_rng()));
    let ring = matrix_with(&keys, 4, 1);
    let (_, mlsag_images) = MLSAGSignature::sign(&ring, &keys, 1, MSG, &mut thread_rng()).unwrap();
    assert_eq!(mlsag_images[0], key_images[0]);
}

#[test]
fn deterministic_rng_reproduces_signatures() {
    let key = PrivateKey::from_seed([7u8; 32]);
    let ring = ring_with(&key, 6, 3);

    let sign = |seed: u64| {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        return BLSAGSignature::sign(&ring, &key, 3, MSG, &mut rng).unwrap()
    };
    assert_eq!(sign(1), sign(1));
    assert_ne!(sign(1).0, sign(2).0);
    assert_eq!(sign(1).1, sign(2).1);
}

#[test]
fn torsioned_key_images_are_rejected() {
    let mut rng = thread_rng();
    let key = PrivateKey::generate(&mut rng);
    let ring = ring_with(&key, 5, 0);

    let (sig, key_image) = BLSAGSignature::sign(&ring, &key, 0, MSG, &mut rng).unwrap();
    assert!(!sig.verify(&ring, &torsioned(&key_image), MSG).unwrap());

    let keys = random_keys(2);
    let matrix = matrix_with(&keys, 5, 0);
    let (sig, mut key_images) = MLSAGSignature::sign(&matrix, &keys, 0, MSG, &mut rng).unwrap();
    key_images[1] = torsioned(&key_images[1]);
    assert!(!sig.verify(&matrix, &key_images, MSG).unwrap());
}

#[test]
fn preconditions() {
    let mut rng = thread_rng();
    let key = PrivateKey::generate(&mut rng);
    let ring = ring_with(&key, 3, 0);

    assert_eq!(SAGSignature::sign(&Ring::new(), &key, 0, MSG, &mut rng), Err(SignatureError::EmptyRing));
    assert_eq!(SAGSignature::sign(&ring, &key, 3, MSG, &mut rng), Err(SignatureError::IndexOutOfRange));
    assert_eq!(BLSAGSignature::sign(&ring, &key, 3, MSG, &mut rng), Err(SignatureError::IndexOutOfRange));

    let keys = random_keys(2);
    let matrix = matrix_with(&keys, 3, 0);
    assert_eq!(
        MLSAGSignature::sign(&matrix, &keys[..1], 0, MSG, &mut rng),
        Err(SignatureError::KeyCountMismatch)
    );
    assert_eq!(
        MLSAGSignature::sign(&RingMatrix::new(), &keys, 0, MSG, &mut rng),
        Err(SignatureError::EmptyRing)
    );
    let mut ragged = matrix.clone();
    ragged.0[1].pop();
    assert_eq!(MLSAGSignature::sign(&ragged, &keys, 0, MSG, &mut rng), Err(SignatureError::RaggedRing));
}

#[test]
fn invalid_points_are_errors() {
    let mut rng = thread_rng();
    let key = PrivateKey::generate(&mut rng);
    let mut ring = ring_with(&key, 3, 0);
    let (sig, key_image) = BLSAGSignature::sign(&ring, &key, 0, MSG, &mut rng).unwrap();

    //y = 2 is not the y coordinate of any point on the curve
    let mut bytes = [0u8; 32];
    bytes[0] = 2;
    let not_a_point = CompressedEdwardsY(bytes);
    assert!(not_a_point.decompress().is_none());

    assert_eq!(sig.verify(&ring, &not_a_point, MSG), Err(SignatureError::InvalidPoint));
    ring.0[1] = not_a_point;
    assert_eq!(sig.verify(&ring, &key_image, MSG), Err(SignatureError::InvalidPoint));
    assert_eq!(
        SAGSignature::sign(&ring, &key, 0, MSG, &mut rng),
        Err(SignatureError::InvalidPoint)
    );
}

#[test]
fn structural_mismatches_fail_closed() {
    let mut rng = thread_rng();
    let key = PrivateKey::generate(&mut rng);
    let ring = ring_with(&key, 4, 1);

    let sig = SAGSignature::sign(&ring, &key, 1, MSG, &mut rng).unwrap();
    let bytes = sig.to_bytes();
    //one response short
    assert!(!SAGSignature::verify_bytes(&bytes[..bytes.len() - 32], &ring, MSG).unwrap());
    //not a whole number of scalars
    assert!(!SAGSignature::verify_bytes(&bytes[..bytes.len() - 1], &ring, MSG).unwrap());
    assert!(!SAGSignature::verify_bytes(&[], &ring, MSG).unwrap());

    let keys = random_keys(3);
    let matrix = matrix_with(&keys, 4, 1);
    let (sig, key_images) = MLSAGSignature::sign(&matrix, &keys, 1, MSG, &mut rng).unwrap();
    let bytes = sig.to_bytes();
    //(length - 32) is not a multiple of 32 * rows
    assert!(!MLSAGSignature::verify_bytes(&bytes[..bytes.len() - 32], &matrix, &key_images, MSG).unwrap());
    assert!(MLSAGSignature::from_bytes(&bytes, 5).is_err());
    //missing key image
    assert!(!sig.verify(&matrix, &key_images[..2], MSG).unwrap());
}

#[test]
fn empty_rings_fail_closed() {
    let mut rng = thread_rng();
    let key = PrivateKey::generate(&mut rng);
    let ring = ring_with(&key, 3, 0);
    let sag = SAGSignature::sign(&ring, &key, 0, MSG, &mut rng).unwrap();
    let (blsag, key_image) = BLSAGSignature::sign(&ring, &key, 0, MSG, &mut rng).unwrap();

    let keys = random_keys(2);
    let matrix = matrix_with(&keys, 3, 0);
    let (mlsag, key_images) = MLSAGSignature::sign(&matrix, &keys, 0, MSG, &mut rng).unwrap();

    //all three schemes treat an empty ring as an invalid signature, not an error
    assert_eq!(sag.verify(&Ring::new(), MSG), Ok(false));
    assert_eq!(blsag.verify(&Ring::new(), &key_image, MSG), Ok(false));
    assert_eq!(mlsag.verify(&RingMatrix::new(), &key_images, MSG), Ok(false));
    assert_eq!(MLSAGSignature::verify_bytes(&mlsag.to_bytes(), &RingMatrix::new(), &key_images, MSG), Ok(false));
}
