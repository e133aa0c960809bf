//! Randomization helpers shared by sprite constructors
//!
//! The generator is always passed in explicitly; a seeded
//! [`rand_chacha::ChaCha8Rng`] gives reproducible games and tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build the shared random source, seeded when a seed is configured
pub fn shared_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Uniform draw in `[0, seed)`, negated when the draw is odd
///
/// The sign follows the parity of the magnitude, so this is not a fair coin:
/// even results are always non-negative and odd results always negative.
/// Tuned sprite speeds depend on that skew. A non-positive `seed` yields `0`.
pub fn some_pos_neg_value<R: Rng + ?Sized>(rng: &mut R, seed: i32) -> i32 {
    let value = some_pos_value(rng, seed);
    if value % 2 == 0 {
        value
    } else {
        -value
    }
}

/// Uniform draw in `[0, seed)`; a non-positive `seed` yields `0`
pub fn some_pos_value<R: Rng + ?Sized>(rng: &mut R, seed: i32) -> i32 {
    if seed <= 0 {
        return 0;
    }
    rng.gen_range(0..seed)
}
