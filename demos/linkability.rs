// SPDX short identifier: Unlicense

use rand::rngs::OsRng;
use ringsig::{
    common::*,
    signature::{
        SAGSignature,
        BLSAGSignature,
        MLSAGSignature
    }
};

fn main() {
    //Our own key, and a handful of decoys.
    //In a real application the decoys are other people's public keys, e.g. pulled from a blockchain.
    let key = PrivateKey::generate(&mut OsRng);
    let decoys: Vec<PublicKey> = (0..7).map(|_| PrivateKey::generate(&mut OsRng).public_key()).collect();

    let mut ring = Ring::from(decoys[..3].to_vec());
    ring.insert(1, key.public_key());
    let index = ring.position(&key.public_key())
        .expect("Real software should have proper error handling.");

    //A SAG signature only proves that *someone* in the ring signed
    let sig = SAGSignature::sign(&ring, &key, index, b"hello", &mut OsRng)
        .expect("Real software should have proper error handling.");
    assert!(sig.verify(&ring, b"hello").expect("Real software should have proper error handling."));

    //bLSAG also produces a key image, which is the same every time the same key signs
    let (sig1, key_image1) = BLSAGSignature::sign(&ring, &key, index, b"first message", &mut OsRng)
        .expect("Real software should have proper error handling.");

    //Sign again, over a completely different ring
    let mut other_ring = Ring::from(decoys[3..].to_vec());
    other_ring.push(key.public_key());
    let other_index = other_ring.len() - 1;
    let (sig2, key_image2) = BLSAGSignature::sign(&other_ring, &key, other_index, b"second message", &mut OsRng)
        .expect("Real software should have proper error handling.");

    assert!(sig1.verify(&ring, &key_image1, b"first message").expect("Real software should have proper error handling."));
    assert!(sig2.verify(&other_ring, &key_image2, b"second message").expect("Real software should have proper error handling."));

    //Neither signature says which member signed, but the matching key images show they were signed by the same key.
    //This is how double-spends are detected.
    assert_eq!(key_image1, key_image2);
    assert_eq!(Some(key_image1), key.key_image().ok());
    println!("linked key image: {:02x?}", key_image1.as_bytes());

    //MLSAG does the same with several keys per ring member (for example a spend key and a commitment key),
    //producing one key image per column.
    let keys = vec!(PrivateKey::generate(&mut OsRng), PrivateKey::generate(&mut OsRng));
    let mut matrix = RingMatrix::new();
    for _ in 0..4 {
        matrix.push(vec!(
            PrivateKey::generate(&mut OsRng).public_key(),
            PrivateKey::generate(&mut OsRng).public_key()
        ));
    }
    matrix.insert(2, keys.iter().map(|key| key.public_key()).collect());
    let (sig, key_images) = MLSAGSignature::sign(&matrix, &keys, 2, b"hello", &mut OsRng)
        .expect("Real software should have proper error handling.");
    assert!(sig.verify(&matrix, &key_images, b"hello").expect("Real software should have proper error handling."));

    //Signatures can be sent around in their raw form
    let bytes = sig.to_bytes();
    assert!(MLSAGSignature::verify_bytes(&bytes, &matrix, &key_images, b"hello")
        .expect("Real software should have proper error handling."));
}
