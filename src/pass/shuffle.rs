//! Randomization helpers used by the generator.
//!
//! Neither shuffle is uniform. The array shuffle swaps every slot with a
//! position drawn from the whole range, and the string shuffle only visits
//! the first half of the positions. Both draw sequences are part of the
//! generator's observable behavior and must stay as they are.

use rand::Rng;
use zeroize::Zeroize;

/// Permute `items` in place by swapping each slot with a random slot.
#[inline]
pub fn shuffle_array<R, T>(rng: &mut R, items: &mut [T])
where
    R: Rng + ?Sized,
{
    let len = items.len();
    for i in 0..len {
        let r = rng.random_range(0..len);
        items.swap(i, r);
    }
}

/// Return `text` with up to `len / 2` random pairwise character swaps.
///
/// `len` is the character count of `text`; larger values are clamped to it.
pub fn shuffle_string<R>(rng: &mut R, text: &str, len: usize) -> String
where
    R: Rng + ?Sized,
{
    let mut chars: Vec<char> = text.chars().collect();
    let len = len.min(chars.len());

    for i in 0..len / 2 {
        let r = rng.random_range(0..len);
        if r == i {
            continue;
        }
        chars.swap(i.min(r), i.max(r));
    }

    let shuffled: String = chars.iter().collect();
    chars.zeroize();
    shuffled
}
