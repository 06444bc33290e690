//! Value codec between stored and logical cell representations.
//!
//! Cells hold an unsigned three-digit value in `0..=999`; arithmetic runs
//! on a signed logical value in `-500..=499`. The two functions here are
//! total and bijective on those ranges, and `encode` accepts any `i32` so
//! that overflowing intermediate results wrap by true modular arithmetic.

/// Number of distinct stored cell values (`0..=999`).
pub const STORED_MODULUS: u16 = 1000;

/// Smallest logical value a cell can represent.
pub const LOGICAL_MIN: i32 = -500;

/// Largest logical value a cell can represent.
pub const LOGICAL_MAX: i32 = 499;

/// Converts a stored cell value into its logical signed value.
///
/// Stored values `500..=999` map to `-500..=-1`; values `0..=499` map to
/// themselves. Inverse of [`encode`] on the stored range.
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn decode(stored: u16) -> i32 {
    if stored >= STORED_MODULUS / 2 {
        stored as i32 - STORED_MODULUS as i32
    } else {
        stored as i32
    }
}

/// Converts a logical value into stored form by reduction modulo 1000.
///
/// Uses mathematical (Euclidean) modulo, so negative inputs still land in
/// `0..=999`: `encode(-1) == 999`. Total on all of `i32`; arithmetic
/// results far outside `-500..=499` wrap rather than error.
#[must_use]
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub const fn encode(logical: i32) -> u16 {
    logical.rem_euclid(STORED_MODULUS as i32) as u16
}
