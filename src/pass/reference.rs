//! Long-hand versions of the shuffles and the generator. They spell out the
//! draw order one step at a time, and the real code must match them draw for
//! draw.

use rand::Rng;

const ALPHABETS: [&str; 4] = [
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "!@#$%&*?+=_-",
];

pub(crate) fn shuffle_array<R: Rng>(rng: &mut R, arr: &mut [usize]) {
    for i in 0..arr.len() {
        let r = rng.random_range(0..arr.len());
        arr.swap(i, r);
    }
}

/// Rebuilds the string around each swap: prefix, char at max, middle,
/// char at min, suffix.
pub(crate) fn shuffle_string<R: Rng>(rng: &mut R, text: &str, len: usize) -> String {
    let mut text: Vec<char> = text.chars().collect();
    for i in 0..len / 2 {
        let r = rng.random_range(0..len);
        if i == r {
            continue;
        }
        let lo = i.min(r);
        let hi = i.max(r);

        let mut next = text[..lo].to_vec();
        next.push(text[hi]);
        next.extend_from_slice(&text[lo + 1..hi]);
        next.push(text[lo]);
        next.extend_from_slice(&text[hi + 1..]);
        text = next;
    }
    text.into_iter().collect()
}

fn pick<R: Rng>(rng: &mut R, alphabet: &str) -> char {
    let idx = rng.random_range(0..alphabet.len());
    alphabet.as_bytes()[idx] as char
}

pub(crate) fn generate<R: Rng>(rng: &mut R, num_of_items: usize, len: usize) -> String {
    let mut types = [0usize, 1, 2, 3];
    shuffle_array(rng, &mut types);

    let mut password = String::new();
    for &t in &types[..num_of_items] {
        password.push(pick(rng, ALPHABETS[t]));
    }
    for _ in num_of_items..len {
        let j = rng.random_range(0..num_of_items);
        password.push(pick(rng, ALPHABETS[types[j]]));
    }

    shuffle_string(rng, &password, len)
}
