//! The two cipher passes.

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::codec::{packet_to_string, parse_packet};
use crate::epoch::{Clock, SystemClock};
use crate::errors::CipherError;
use crate::keys::KeyMaterial;
use crate::message::{CODE_POINT_OFFSET, decompose_message};
use crate::params::CipherParams;
use crate::ring::Ring;
use crate::verification::Verification;

/// Everything the encryptor hands back: the wire encoding, the
/// verification value the sequence started from, and the key material that
/// produced it. The caller keeps the two key halves and the step to
/// decrypt later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encryption {
    pub encoding: Vec<String>,
    pub verification: u64,
    pub key_material: KeyMaterial,
}

/// Encrypts a message with the wall clock and the thread RNG.
pub fn encrypt(message: &str, params: &CipherParams) -> Result<Encryption, CipherError> {
    encrypt_with(message, params, &SystemClock, &mut rand::rng())
}

/// Encrypts a message with explicit clock and random sources.
///
/// Per character and key index, emits
/// `(verification * partition[i]) mod key[i]` and then advances the
/// verification by the step; the packets preserve character order.
pub fn encrypt_with<C, R>(
    message: &str,
    params: &CipherParams,
    clock: &C,
    rng: &mut R,
) -> Result<Encryption, CipherError>
where
    C: Clock,
    R: Rng,
{
    // 1. Split every character into key_count positive summands.
    let partitions = decompose_message(message, params.key_count(), rng)?;

    // 2. Fresh primes from the clock, split into the two halves.
    let key_material = KeyMaterial::generate(params, clock, rng)?;

    // 3. Both passes start the verification sequence from the same sum.
    let mut verification = Verification::for_key(&key_material.key, params.step())?;
    let initial_verification = verification.value();

    // 4. One residue per (character, key element), advancing after each.
    let mut encoding = Vec::with_capacity(partitions.len());
    for partition in &partitions {
        let mut residues = Vec::with_capacity(key_material.len());
        for (&part, &prime) in partition.iter().zip(&key_material.key) {
            let ring = Ring::try_with(prime)?;
            residues.push(ring.mul(verification.value(), part));
            verification.advance();
        }
        encoding.push(packet_to_string(&residues));
    }

    Ok(Encryption {
        encoding,
        verification: initial_verification,
        key_material,
    })
}

/// Decrypts an encoding from the two key halves.
///
/// Rebuilds each key prime as `public_key[i] + private_key[i]`, restarts
/// the verification sequence from the same sum the encryptor used, and per
/// residue multiplies by the modular inverse of the current verification,
/// advancing identically. Each packet sums back to `code_point + 245`.
///
/// # Errors
///
/// Fails on mismatched key halves, malformed packets, a verification value
/// with no inverse (a multiple of some key prime), or a recovered sum that
/// is not a character. Any failure aborts the whole call.
pub fn decrypt(
    encoding: &[String],
    public_key: &[u64],
    private_key: &[u64],
    step: u64,
) -> Result<String, CipherError> {
    if public_key.len() != private_key.len() {
        return Err(CipherError::KeyLengthMismatch {
            public: public_key.len(),
            private: private_key.len(),
        });
    }

    let key = public_key
        .iter()
        .zip(private_key)
        .map(|(&public_half, &private_half)| {
            public_half.checked_add(private_half).ok_or_else(|| {
                CipherError::InvalidParameters(format!(
                    "key halves {public_half} + {private_half} overflow"
                ))
            })
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let mut verification = Verification::for_key(&key, step)?;

    let mut message = String::with_capacity(encoding.len());
    for packet in encoding {
        let residues = parse_packet(packet)?;
        if residues.len() != key.len() {
            return Err(CipherError::MalformedPacket(format!(
                "packet has {} residues but the key holds {} primes",
                residues.len(),
                key.len()
            )));
        }

        let mut recovered: u128 = 0;
        for (&residue, &prime) in residues.iter().zip(&key) {
            let ring = Ring::try_with(prime)?;
            let inverse = ring.inv(verification.value())?;
            recovered += u128::from(ring.mul(inverse, residue));
            verification.advance();
        }

        let code_point = recovered
            .checked_sub(u128::from(CODE_POINT_OFFSET))
            .ok_or_else(|| {
                CipherError::DecodingError(format!(
                    "recovered sum {recovered} is below the {CODE_POINT_OFFSET} offset"
                ))
            })?;
        let character = u32::try_from(code_point)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                CipherError::DecodingError(format!(
                    "recovered code point {code_point} is not a character"
                ))
            })?;
        message.push(character);
    }

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::SteppedClock;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> (SteppedClock, StdRng) {
        (SteppedClock::new(0.283), StdRng::seed_from_u64(1337))
    }

    #[test]
    fn test_empty_message() -> Result<(), CipherError> {
        let params = CipherParams::default();
        let (clock, mut rng) = seeded();

        let encryption = encrypt_with("", &params, &clock, &mut rng)?;
        assert!(encryption.encoding.is_empty());
        // The reported value is untouched by the (empty) character loop.
        assert!((1..=params.key_count() as u64).contains(&encryption.verification));

        let decoded = decrypt(
            &encryption.encoding,
            &encryption.key_material.public_key,
            &encryption.key_material.private_key,
            params.step(),
        )?;
        assert_eq!(decoded, "");
        Ok(())
    }

    #[test]
    fn test_packet_shape() -> Result<(), CipherError> {
        let params = CipherParams::try_with(3, 4, 1, 24)?;
        let (clock, mut rng) = seeded();

        let encryption = encrypt_with("A", &params, &clock, &mut rng)?;
        assert_eq!(encryption.encoding.len(), 1);

        let residues = parse_packet(&encryption.encoding[0])?;
        assert_eq!(residues.len(), 3);
        for (&residue, &prime) in residues.iter().zip(&encryption.key_material.key) {
            assert!(residue < prime);
        }
        Ok(())
    }

    #[test]
    fn test_reported_verification_is_initial() -> Result<(), CipherError> {
        let params = CipherParams::try_with(5, 3, 7, 24)?;
        let (clock, mut rng) = seeded();

        let encryption = encrypt_with("stream", &params, &clock, &mut rng)?;
        let expected = crate::verification::verification_sum(&encryption.key_material.key)?;
        assert_eq!(encryption.verification, expected);
        Ok(())
    }

    #[test]
    fn test_mismatched_halves() {
        let result = decrypt(&[], &[1, 2, 3], &[1, 2], 1);
        assert!(matches!(
            result,
            Err(CipherError::KeyLengthMismatch {
                public: 3,
                private: 2
            })
        ));
    }

    #[test]
    fn test_packet_key_length_mismatch() -> Result<(), CipherError> {
        let params = CipherParams::try_with(4, 3, 1, 24)?;
        let (clock, mut rng) = seeded();

        let encryption = encrypt_with("x", &params, &clock, &mut rng)?;
        // Drop one prime from each half; the packet no longer fits the key.
        let public = &encryption.key_material.public_key[..3];
        let private = &encryption.key_material.private_key[..3];

        assert!(matches!(
            decrypt(&encryption.encoding, public, private, params.step()),
            Err(CipherError::MalformedPacket(_))
        ));
        Ok(())
    }

    #[test]
    fn test_unsupported_character_aborts() {
        let params = CipherParams::default();
        let (clock, mut rng) = seeded();

        assert!(matches!(
            encrypt_with("ok€", &params, &clock, &mut rng),
            Err(CipherError::UnsupportedCharacter('€'))
        ));
    }
}
