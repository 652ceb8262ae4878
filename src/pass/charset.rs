//! Character classes and their fixed alphabets.

use rand::Rng;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%&*?+=_-";

/// One of the four character classes a password draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Class {
    /// All classes in identifier order.
    pub const ALL: [Class; 4] = [Class::Uppercase, Class::Lowercase, Class::Digit, Class::Symbol];

    /// Map an identifier (0..=3) to its class.
    pub fn from_id(id: usize) -> Option<Class> {
        Self::ALL.get(id).copied()
    }

    /// Identifier of this class, the inverse of [`Class::from_id`].
    pub fn id(self) -> usize {
        match self {
            Class::Uppercase => 0,
            Class::Lowercase => 1,
            Class::Digit => 2,
            Class::Symbol => 3,
        }
    }

    /// The alphabet backing this class. Always ASCII and non-empty.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Class::Uppercase => UPPERCASE,
            Class::Lowercase => LOWERCASE,
            Class::Digit => DIGITS,
            Class::Symbol => SYMBOLS,
        }
    }

    /// The class whose alphabet contains `c`, if any.
    pub fn of(c: char) -> Option<Class> {
        if !c.is_ascii() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|class| class.alphabet().contains(&(c as u8)))
    }

    /// Draw one character uniformly from this class's alphabet.
    #[inline]
    pub fn random_char<R>(self, rng: &mut R) -> u8
    where
        R: Rng + ?Sized,
    {
        let chars = self.alphabet();
        chars[rng.random_range(0..chars.len())]
    }
}
