//! Password generation over a chosen number of character classes.
//!
//! [`generate`] picks `num_of_items` of the four classes (uppercase,
//! lowercase, digits, symbols) at random, guarantees one character from each,
//! fills the rest from the same classes and shuffles the result. The random
//! source is always a parameter; [`generate_custom`] supplies a fresh
//! [`Rand`] for callers that do not care.

mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use crate::error::Error;
pub use crate::pass::charset::Class;
pub use crate::pass::{generate, generate_custom, shuffle_array, shuffle_string};
pub use crate::rand::Rand;
pub use crate::settings::Settings;
