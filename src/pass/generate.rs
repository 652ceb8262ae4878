//! Password generation.

use rand::Rng;
use tracing::{debug, trace};
use zeroize::Zeroize;

use super::charset::Class;
use super::shuffle::{shuffle_array, shuffle_string};
use crate::error::Error;
use crate::rand::Rand;

/// Generate a password of `len` characters drawn from `num_of_items`
/// randomly chosen character classes, each of which appears at least once.
///
/// When `len` is smaller than `num_of_items` the password still carries one
/// character per class and is therefore `num_of_items` characters long.
pub fn generate<R>(rng: &mut R, num_of_items: i64, len: usize) -> Result<String, Error>
where
    R: Rng + ?Sized,
{
    let count = class_count(num_of_items)?;

    let mut types = Class::ALL;
    shuffle_array(rng, &mut types);
    let selected = &types[..count];

    let mut buf: Vec<u8> = Vec::with_capacity(len.max(count));

    // Coverage: one character from every selected class.
    for class in selected {
        buf.push(class.random_char(rng));
    }

    // Fill the remainder from the selected classes only.
    for _ in count..len {
        let class = selected[rng.random_range(0..count)];
        buf.push(class.random_char(rng));
    }

    trace!(classes = count, len, assembled = buf.len(), "password buffer assembled");

    let mut assembled: String = buf.iter().map(|&b| b as char).collect();
    buf.zeroize();

    let password = shuffle_string(rng, &assembled, len);
    assembled.zeroize();

    Ok(password)
}

/// Generate a password with a freshly seeded [`Rand`].
#[inline]
pub fn generate_custom(num_of_items: i64, len: usize) -> Result<String, Error> {
    generate(&mut Rand::new(), num_of_items, len)
}

/// Validate the requested number of classes.
pub(crate) fn class_count(num_of_items: i64) -> Result<usize, Error> {
    match usize::try_from(num_of_items) {
        Ok(n) if (1..=Class::ALL.len()).contains(&n) => Ok(n),
        _ => {
            debug!(num_of_items, "rejected class count");
            Err(Error::InvalidClassCount {
                count: num_of_items,
            })
        }
    }
}
