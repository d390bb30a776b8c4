//! Implementation of ring ops using modular arithmetic.

use crate::errors::CipherError;

use super::extended_gcd;

use serde::{Deserialize, Serialize};

/// Represents the finite ring Z_k for one key prime.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1, and small enough that inverse
    /// computation can run in signed 64-bit arithmetic.
    pub fn try_with(modulus: u64) -> Result<Self, CipherError> {
        if modulus <= 1 {
            return Err(CipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > i64::MAX as u64 {
            return Err(CipherError::InvalidModulus(format!(
                "Modulus {} does not fit signed 64-bit arithmetic",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use epoch_cipher::ring::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value into the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use epoch_cipher::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.reduce(15), 5);
    /// assert_eq!(ring.reduce(10), 0);
    /// assert_eq!(ring.reduce(3), 3);
    /// ```
    pub fn reduce(&self, value: u64) -> u64 {
        value % self.modulus
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `u128` internally to prevent overflow during multiplication
    /// before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use epoch_cipher::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5); // 35 mod 10 = 5
    /// assert_eq!(ring.mul(4, 5), 0); // 20 mod 10 = 0
    /// ```
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulus as u128) as u64
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NoInverse` if `a` reduces to 0 or shares a
    /// factor with the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use epoch_cipher::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 7); // 3 * 7 = 21 = 1 mod 10
    /// assert_eq!(ring.inv(9).unwrap(), 9); // 9 * 9 = 81 = 1 mod 10
    /// assert!(ring.inv(2).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: u64) -> Result<u64, CipherError> {
        let a_norm = self.reduce(a);
        if a_norm == 0 {
            return Err(CipherError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm as i64, self.modulus as i64);
        if g != 1 {
            return Err(CipherError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(x.rem_euclid(self.modulus as i64) as u64)
    }
}
