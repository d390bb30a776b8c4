#[derive(thiserror::Error, Debug)]
pub enum CipherError {
    /// Error when the requested key length wraps to zero under `max_key_count`.
    #[error("key_count {key_count} is a multiple of max_key_count {max_key_count}, leaving an empty key")]
    DegenerateKeyLength {
        key_count: usize,
        max_key_count: usize,
    },
    /// Error when the bounded prime search exhausts its retry budget.
    #[error("no suitable prime found at digit offset {offset} after {attempts} attempts")]
    NoSuitablePrime { offset: usize, attempts: usize },
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, k) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("character {0:?} is outside the supported range")]
    UnsupportedCharacter(char),
    #[error("MalformedPacket: {0}")]
    MalformedPacket(String),
    #[error("public key has {public} entries but private key has {private}")]
    KeyLengthMismatch { public: usize, private: usize },
    #[error("key must contain at least one prime")]
    EmptyKey,
    #[error("DecodingError: {0}")]
    DecodingError(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
