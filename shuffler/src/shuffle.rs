use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::error::{Result, ShuffleError};

/// Fisher-Yates shuffle that permutes `sequence` in place, uniformly at random.
///
/// A new generator is seeded from operating system entropy for this call and
/// dropped when it returns, so no random state is shared between calls.
///
/// # Arguments
/// * `sequence` - The sequence to shuffle. Empty and single-element sequences
///   are left unchanged.
///
/// # Panics
/// Panics if the operating system entropy source is unavailable. Use
/// [`try_shuffle`] to get an error instead.
///
/// # Example
/// ```
/// use shuffler::shuffle;
///
/// let mut values = vec![10, 20, 30, 40];
/// shuffle(&mut values);
///
/// let mut sorted = values.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![10, 20, 30, 40]);
/// ```
pub fn shuffle(sequence: &mut Vec<i32>) {
    let mut rng = StdRng::from_entropy();
    shuffle_with(sequence, &mut rng);
}

/// Fallible variant of [`shuffle`].
///
/// Returns `InvalidArgument` when no sequence is given and `Entropy` when the
/// generator cannot be seeded. Either way the sequence is not touched.
pub fn try_shuffle(sequence: Option<&mut Vec<i32>>) -> Result<()> {
    let Some(sequence) = sequence else {
        log::warn!("Shuffle requested without a sequence");
        return Err(ShuffleError::InvalidArgument(
            "sequence is absent".to_string(),
        ));
    };

    let mut rng = StdRng::from_rng(OsRng).map_err(|e| {
        log::warn!("Failed to seed shuffle generator: {}", e);
        ShuffleError::from(e)
    })?;

    shuffle_with(sequence, &mut rng);
    Ok(())
}

/// Fisher-Yates shuffle driven by a caller-supplied generator.
///
/// Draws happen in a fixed order, one per position from `len - 1` down to `1`,
/// each uniform over `[0, i]`. A seeded generator therefore always produces
/// the same permutation for the same input.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use shuffler::shuffle_with;
///
/// let mut a = vec![1, 2, 3, 4, 5];
/// let mut b = a.clone();
/// shuffle_with(&mut a, &mut StdRng::seed_from_u64(12345));
/// shuffle_with(&mut b, &mut StdRng::seed_from_u64(12345));
/// assert_eq!(a, b);
/// ```
pub fn shuffle_with<R: Rng + ?Sized>(sequence: &mut Vec<i32>, rng: &mut R) {
    log::trace!("Shuffling sequence of {} elements", sequence.len());

    // Position 0 is never the moving index: once 1..len are fixed it holds
    // the only element left.
    for i in (1..sequence.len()).rev() {
        let j = rng.gen_range(0..=i);
        sequence.swap(i, j);
    }
}
