//! # Key Module
//!
//! Builds the shared prime sequence from epoch digit windows and splits it
//! into the public and private halves.

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::epoch::{Clock, DEFAULT_MULTIPLIER, SystemClock, epoch_digits};
use crate::errors::CipherError;
use crate::params::CipherParams;
use crate::ring::is_prime;

/// Retry budget for a single digit window before the search is reported
/// failed instead of spinning forever.
pub const MAX_PRIME_ATTEMPTS: usize = 10_000;

/// The shared prime sequence together with its additive split.
///
/// Every index satisfies `public_key[i] + private_key[i] == key[i]`; the
/// halves are a secret-sharing split, so neither alone reveals the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMaterial {
    pub key: Vec<u64>,
    pub public_key: Vec<u64>,
    pub private_key: Vec<u64>,
}

impl KeyMaterial {
    /// Generates key material from the given clock and random source.
    ///
    /// For each index `i`, slices the digit window starting at
    /// `i * digit_len + 1` out of a fresh epoch digit stream until the
    /// window holds a prime above the floor `5 * 10^(digit_len - 1)`, then
    /// draws the public half uniformly from `[0, key[i]]`.
    ///
    /// # Errors
    ///
    /// Returns `NoSuitablePrime` if a window exhausts its retry budget.
    pub fn generate<C, R>(
        params: &CipherParams,
        clock: &C,
        rng: &mut R,
    ) -> Result<Self, CipherError>
    where
        C: Clock,
        R: Rng,
    {
        let key_count = params.key_count();
        let digit_len = params.digit_len() as usize;

        let mut key = Vec::with_capacity(key_count);
        let mut public_key = Vec::with_capacity(key_count);
        let mut private_key = Vec::with_capacity(key_count);

        for index in 0..key_count {
            let offset = index * digit_len + 1;
            let prime = prime_from_epoch(clock, offset, params)?;
            let public_half = rng.random_range(0..=prime);

            key.push(prime);
            public_key.push(public_half);
            private_key.push(prime - public_half);
        }

        Ok(KeyMaterial {
            key,
            public_key,
            private_key,
        })
    }

    /// Number of primes in the key.
    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// True when every public/private pair sums back to its key element.
    pub fn split_is_consistent(&self) -> bool {
        self.public_key.len() == self.key.len()
            && self.private_key.len() == self.key.len()
            && self
                .key
                .iter()
                .zip(self.public_key.iter().zip(&self.private_key))
                .all(|(&prime, (&public_half, &private_half))| public_half + private_half == prime)
    }

    /// Exports the key material to a JSON string.
    pub fn to_json(&self) -> Result<String, CipherError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Imports key material from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, CipherError> {
        Ok(serde_json::from_str(json_str)?)
    }
}

/// Generates key material from the wall clock and the thread RNG.
pub fn generate_keys(params: &CipherParams) -> Result<KeyMaterial, CipherError> {
    KeyMaterial::generate(params, &SystemClock, &mut rand::rng())
}

/// Searches one digit window for a qualifying prime, regenerating the
/// epoch stream on every attempt.
fn prime_from_epoch<C: Clock>(
    clock: &C,
    offset: usize,
    params: &CipherParams,
) -> Result<u64, CipherError> {
    let digit_len = params.digit_len() as usize;
    let floor = params.prime_floor();

    for _ in 0..MAX_PRIME_ATTEMPTS {
        let digits = epoch_digits(clock, params.key_count(), params.digit_len(), DEFAULT_MULTIPLIER);
        let window = &digits[offset..offset + digit_len];
        let candidate = window
            .bytes()
            .fold(0u64, |value, digit| value * 10 + u64::from(digit - b'0'));

        if candidate > floor && is_prime(candidate) {
            return Ok(candidate);
        }
    }

    Err(CipherError::NoSuitablePrime {
        offset,
        attempts: MAX_PRIME_ATTEMPTS,
    })
}
