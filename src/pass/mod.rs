//! Password generation and the shuffles it relies on.

pub mod charset;
mod generate;
#[cfg(test)]
mod reference;
mod shuffle;

pub(crate) use generate::class_count;
pub use generate::generate;
pub use generate::generate_custom;
pub use shuffle::shuffle_array;
pub use shuffle::shuffle_string;
