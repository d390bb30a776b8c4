use serde::{Deserialize, Serialize};

use crate::errors::CipherError;

pub const DEFAULT_KEY_COUNT: usize = 12;
pub const DEFAULT_DIGIT_LEN: u32 = 3;
pub const DEFAULT_STEP: u64 = 1;
pub const DEFAULT_MAX_KEY_COUNT: usize = 24;

/// Narrowest digit window that can still clear the `5 * 10^(digit_len - 1)`
/// primality floor with room to spare.
pub const MIN_DIGIT_LEN: u32 = 3;
/// Widest digit window whose value always fits a `u64`.
pub const MAX_DIGIT_LEN: u32 = 18;

/// Validated configuration for one encryption or key-generation call.
///
/// The constructor applies the normalization the cipher demands up front:
/// `digit_len` is clamped to [`MIN_DIGIT_LEN`], `key_count` is reduced
/// modulo `max_key_count`, and a reduction to zero is rejected so no later
/// stage can divide by an empty key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherParams {
    key_count: usize,
    digit_len: u32,
    step: u64,
    max_key_count: usize,
}

impl Default for CipherParams {
    fn default() -> Self {
        CipherParams {
            key_count: DEFAULT_KEY_COUNT,
            digit_len: DEFAULT_DIGIT_LEN,
            step: DEFAULT_STEP,
            max_key_count: DEFAULT_MAX_KEY_COUNT,
        }
    }
}

impl CipherParams {
    /// Creates a new parameter set, normalizing and validating the inputs.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateKeyLength` when `key_count` reduces to zero
    /// modulo `max_key_count`, and `InvalidParameters` for a zero
    /// `max_key_count` or a digit width beyond [`MAX_DIGIT_LEN`].
    ///
    /// # Example
    ///
    /// ```
    /// # use epoch_cipher::CipherParams;
    /// let params = CipherParams::try_with(25, 1, 1, 24).unwrap();
    /// assert_eq!(params.key_count(), 1); // 25 mod 24
    /// assert_eq!(params.digit_len(), 3); // clamped up
    /// assert!(CipherParams::try_with(24, 3, 1, 24).is_err());
    /// ```
    pub fn try_with(
        key_count: usize,
        digit_len: u32,
        step: u64,
        max_key_count: usize,
    ) -> Result<Self, CipherError> {
        if max_key_count == 0 {
            return Err(CipherError::InvalidParameters(
                "max_key_count must be positive".to_string(),
            ));
        }

        let digit_len = digit_len.max(MIN_DIGIT_LEN);
        if digit_len > MAX_DIGIT_LEN {
            return Err(CipherError::InvalidParameters(format!(
                "digit_len {} exceeds the {}-digit u64 window",
                digit_len, MAX_DIGIT_LEN
            )));
        }

        let reduced_key_count = key_count % max_key_count;
        if reduced_key_count == 0 {
            return Err(CipherError::DegenerateKeyLength {
                key_count,
                max_key_count,
            });
        }

        Ok(CipherParams {
            key_count: reduced_key_count,
            digit_len,
            step,
            max_key_count,
        })
    }

    /// Number of primes in the key, already reduced modulo `max_key_count`.
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    /// Maximum decimal digits per key prime.
    pub fn digit_len(&self) -> u32 {
        self.digit_len
    }

    /// Verification increment applied after every modular operation.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Bound the requested key length was reduced against.
    pub fn max_key_count(&self) -> usize {
        self.max_key_count
    }

    /// Lower bound every key prime must exceed: `5 * 10^(digit_len - 1)`.
    ///
    /// Keeps each prime at its full digit width and above half the maximum
    /// value of that width, so decrypted sums land back in character range.
    pub fn prime_floor(&self) -> u64 {
        5 * 10u64.pow(self.digit_len - 1)
    }
}
