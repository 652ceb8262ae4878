//! Errors produced while generating passwords.

/// Errors produced by [`crate::pass::generate`] and [`crate::Settings`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The number of character classes is outside `1..=4`.
    #[error("Invalid, the items must be between 1 and 4")]
    InvalidClassCount { count: i64 },
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn message_is_fixed() {
        for count in [-1, 0, 5, i64::MAX] {
            assert_eq!(
                Error::InvalidClassCount { count }.to_string(),
                "Invalid, the items must be between 1 and 4"
            );
        }
    }
}
