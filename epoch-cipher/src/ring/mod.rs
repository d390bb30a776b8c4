//! # Ring Module
//!
//! Provides the [`Ring`] struct for modular arithmetic over a single key
//! prime, plus the number-theory helpers shared by key generation.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd, is_prime};
pub use math::Ring;
