use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, OsRng as AesOsRng},
};
use chacha20poly1305::{ChaCha20Poly1305, aead::OsRng as ChaChaOsRng};
use criterion::{Bencher, Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;

use epoch_cipher::{CipherParams, decrypt, encrypt};

const DATA_SIZE_CHARS: usize = 1024;

fn generate_message(size: usize) -> String {
    // Byte-range characters only; the partition scheme rejects anything
    // above U+00FF.
    let mut rng = rand::rng();
    (0..size).map(|_| char::from(rng.random::<u8>())).collect()
}

fn setup_epoch() -> (CipherParams, String) {
    // Six-digit primes keep the verification sequence below every key
    // element across the 1024-character payload.
    let params = CipherParams::try_with(12, 6, 1, 24).expect("build cipher params");
    let message = generate_message(DATA_SIZE_CHARS);
    (params, message)
}

fn bench_epoch_encrypt(b: &mut Bencher) {
    let (params, message) = setup_epoch();

    b.iter(|| {
        let _encryption =
            encrypt(black_box(&message), black_box(&params)).expect("epoch encryption failed");
    });
}

fn bench_epoch_decrypt(b: &mut Bencher) {
    let (params, message) = setup_epoch();

    let encryption = encrypt(&message, &params).expect("epoch encryption failed during setup");

    b.iter(|| {
        let _plaintext = decrypt(
            black_box(&encryption.encoding),
            black_box(&encryption.key_material.public_key),
            black_box(&encryption.key_material.private_key),
            params.step(),
        )
        .expect("epoch decryption failed");
    });
}

fn setup_aes() -> (Aes256Gcm, Vec<u8>) {
    let key_bytes = Aes256Gcm::generate_key(AesOsRng);
    let cipher = Aes256Gcm::new(&key_bytes);
    let data = generate_message(DATA_SIZE_CHARS).into_bytes();
    (cipher, data)
}

fn bench_aes_encrypt(b: &mut Bencher) {
    let (cipher, data) = setup_aes();

    b.iter(|| {
        let nonce = Aes256Gcm::generate_nonce(&mut AesOsRng);

        let _ciphertext = cipher
            .encrypt(black_box(&nonce), black_box(data.as_slice()))
            .expect("AES encryption failed");
    });
}

fn bench_aes_decrypt(b: &mut Bencher) {
    let (cipher, data) = setup_aes();

    let nonce = Aes256Gcm::generate_nonce(&mut AesOsRng);
    let ciphertext = cipher
        .encrypt(&nonce, data.as_slice())
        .expect("AES encryption failed during setup");

    b.iter(|| {
        let _plaintext = cipher
            .decrypt(black_box(&nonce), black_box(ciphertext.as_slice()))
            .expect("AES decryption failed");

        assert_eq!(_plaintext, data);
    });
}

fn setup_chacha() -> (ChaCha20Poly1305, Vec<u8>) {
    let key_bytes = ChaCha20Poly1305::generate_key(&mut ChaChaOsRng);
    let cipher = ChaCha20Poly1305::new(&key_bytes);
    let data = generate_message(DATA_SIZE_CHARS).into_bytes();
    (cipher, data)
}

fn bench_chacha_encrypt(b: &mut Bencher) {
    let (cipher, data) = setup_chacha();
    b.iter(|| {
        let nonce = ChaCha20Poly1305::generate_nonce(&mut ChaChaOsRng);
        let _ciphertext = cipher
            .encrypt(black_box(&nonce), black_box(data.as_slice()))
            .expect("ChaCha20Poly1305 encryption failed");
    });
}

fn bench_chacha_decrypt(b: &mut Bencher) {
    let (cipher, data) = setup_chacha();
    let nonce = ChaCha20Poly1305::generate_nonce(&mut ChaChaOsRng);
    let ciphertext = cipher
        .encrypt(&nonce, data.as_slice())
        .expect("ChaCha20Poly1305 encryption failed during setup");

    b.iter(|| {
        let _plaintext = cipher
            .decrypt(black_box(&nonce), black_box(ciphertext.as_slice()))
            .expect("ChaCha20Poly1305 decryption failed");
        assert_eq!(_plaintext, data);
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Crypto Comparison");

    group.bench_function("Epoch Encrypt", bench_epoch_encrypt);
    group.bench_function("Epoch Decrypt", bench_epoch_decrypt);

    group.bench_function("AES-256-GCM Encrypt", bench_aes_encrypt);
    group.bench_function("AES-256-GCM Decrypt", bench_aes_decrypt);

    group.bench_function("ChaCha20Poly1305 Encrypt", bench_chacha_encrypt);
    group.bench_function("ChaCha20Poly1305 Decrypt", bench_chacha_decrypt);

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
