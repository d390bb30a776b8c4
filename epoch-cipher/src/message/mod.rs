//! # Message Module
//!
//! Decomposes each plaintext character into a random additive partition.

use rand::Rng;

use crate::errors::CipherError;

/// Added to every code point before partitioning. Keeps the smallest
/// target large enough to split into the longest supported key while the
/// largest stays low enough for the per-prime residues to remain
/// distinguishable from zero.
pub const CODE_POINT_OFFSET: u64 = 245;

/// Largest code point the single-byte partition scheme supports.
pub const MAX_CODE_POINT: u32 = 255;

/// Decomposes a whole message, one partition per character.
pub fn decompose_message<R: Rng>(
    message: &str,
    key_count: usize,
    rng: &mut R,
) -> Result<Vec<Vec<u64>>, CipherError> {
    message
        .chars()
        .map(|character| decompose_char(character, key_count, rng))
        .collect()
}

/// Splits `code_point + 245` into `key_count` strictly positive integers.
///
/// Each draw is uniform in `[1, ceiling]` where the ceiling halves the
/// remainder (so later slots are not forced large) and reserves one unit
/// for every slot still to fill (so the final remainder stays positive).
/// The last slot takes the leftover, making the sum exact.
///
/// # Errors
///
/// Returns `UnsupportedCharacter` for code points above 255 and for a
/// `key_count` larger than the partition target.
pub fn decompose_char<R: Rng>(
    character: char,
    key_count: usize,
    rng: &mut R,
) -> Result<Vec<u64>, CipherError> {
    if key_count == 0 {
        return Err(CipherError::InvalidParameters(
            "key_count must be positive".to_string(),
        ));
    }

    let code_point = u32::from(character);
    if code_point > MAX_CODE_POINT {
        return Err(CipherError::UnsupportedCharacter(character));
    }

    let target = u64::from(code_point) + CODE_POINT_OFFSET;
    if key_count as u64 > target {
        return Err(CipherError::UnsupportedCharacter(character));
    }

    let mut partition = Vec::with_capacity(key_count);
    let mut remaining = target;

    for filled in 1..key_count {
        let slots_left = (key_count - filled) as u64;
        let ceiling = (remaining / 2).min(remaining - slots_left);
        let draw = rng.random_range(1..=ceiling);

        partition.push(draw);
        remaining -= draw;
    }
    partition.push(remaining);

    Ok(partition)
}
