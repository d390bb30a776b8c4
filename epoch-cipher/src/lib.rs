//! # Epoch Cipher
//!
//! A symmetric character-stream cipher whose key is a sequence of primes
//! sliced out of the fractional digits of the wall clock. Each prime is
//! split additively into a public and a private half; decryption needs both
//! halves and replays the same verification sequence the encryptor walked.

pub mod cipher;
pub mod codec;
pub mod epoch;
pub mod errors;
pub mod keys;
pub mod message;
pub mod params;
pub mod ring;
pub mod verification;

pub use cipher::{Encryption, decrypt, encrypt, encrypt_with};
pub use errors::CipherError;
pub use keys::{KeyMaterial, generate_keys};
pub use params::CipherParams;
