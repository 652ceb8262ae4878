//! Password generation settings.

use rand::Rng;

use crate::error::Error;
use crate::pass;

/// How many character classes to draw from and how long the password is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub classes: i64,
    pub length: usize,
}

impl Settings {
    pub fn new(classes: i64, length: usize) -> Self {
        Self { classes, length }
    }

    /// Check the class count without generating anything.
    pub fn validate(&self) -> Result<(), Error> {
        pass::class_count(self.classes).map(|_| ())
    }

    /// Length of the password these settings produce.
    pub fn effective_length(&self) -> Result<usize, Error> {
        let count = pass::class_count(self.classes)?;
        Ok(self.length.max(count))
    }

    pub fn generate(&self) -> Result<String, Error> {
        pass::generate_custom(self.classes, self.length)
    }

    pub fn generate_with<R>(&self, rng: &mut R) -> Result<String, Error>
    where
        R: Rng + ?Sized,
    {
        pass::generate(rng, self.classes, self.length)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            classes: 4,
            length: 8,
        }
    }
}
