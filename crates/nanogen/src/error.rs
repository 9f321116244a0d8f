use crate::{MAX_ALPHABET_SIZE, MAX_LENGTH, MIN_ALPHABET_SIZE, MIN_LENGTH};

/// A result type defaulting to this crate's [`Error`].
///
/// Only construction is fallible. Once a [`crate::Generator`] exists, every
/// call to [`crate::Generator::generate`] succeeds.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `nanogen` can emit.
///
/// Errors are only produced while validating a configuration. Generating an
/// ID never fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested ID length is outside of
    /// [`MIN_LENGTH`]`..=`[`MAX_LENGTH`].
    #[error(
        "invalid length {length}: must be between {} and {} (inclusive)",
        MIN_LENGTH,
        MAX_LENGTH
    )]
    InvalidLength {
        /// The rejected length.
        length: usize,
    },

    /// The alphabet cannot be sampled from.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),
}

/// Reasons an alphabet is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum AlphabetError {
    /// Fewer than [`MIN_ALPHABET_SIZE`] units.
    #[error("expected at least {} units, got {size}", MIN_ALPHABET_SIZE)]
    TooSmall {
        /// Number of units supplied.
        size: usize,
    },

    /// More units than a 32-bit mask can address.
    #[error("expected at most {} units, got {size}", MAX_ALPHABET_SIZE)]
    TooLarge {
        /// Number of units supplied.
        size: usize,
    },

    /// A unit outside of the ASCII range was found where only ASCII is
    /// allowed.
    #[error("non-ascii unit {unit:?} at position {position}")]
    NonAscii {
        /// The offending unit.
        unit: char,
        /// Its index within the alphabet.
        position: usize,
    },
}
