//! Shorthand constructors for the common generator shapes.
//!
//! Every function validates its arguments once and returns a generator that
//! can be called any number of times. The length is checked before the
//! alphabet, so when both are invalid the error is
//! [`crate::Error::InvalidLength`].
//!
//! # Example
//! ```
//! use nanogen::{custom, standard};
//!
//! let ids = standard(21).unwrap();
//! assert_eq!(ids.generate().len(), 21);
//!
//! let pins = custom("0123456789", 6).unwrap();
//! assert!(pins.generate().chars().all(|c| c.is_ascii_digit()));
//! ```

use crate::{
    Alphabet, Generator, GeneratorConfig, Result, SmallRandom, ThreadRandom, config::check_length,
};

/// Creates a generator over `alphabet` (or the default URL-safe alphabet when
/// `None`) with a secure or fast non-secure random source.
///
/// # Errors
/// - [`crate::Error::InvalidLength`] if `length` is outside `2..=255`
/// - [`crate::Error::InvalidAlphabet`] if `alphabet` has fewer than two units
///
/// # Example
/// ```
/// use nanogen::new_generator;
///
/// let generator = new_generator(None, 21, true).unwrap();
/// let id = generator.generate();
/// assert_eq!(id.len(), 21);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn new_generator(alphabet: Option<&str>, length: usize, secure: bool) -> Result<Generator> {
    check_length(length)?;
    let alphabet = alphabet.map(Alphabet::new).transpose()?.unwrap_or_default();
    let config = GeneratorConfig::new(length)
        .with_alphabet(alphabet)
        .with_secure(secure);
    Generator::new(config)
}

/// Creates a secure generator over the default 64-unit URL-safe alphabet.
///
/// 📝 The recommended length is [`crate::DEFAULT_LENGTH`] (21).
///
/// # Errors
/// Returns [`crate::Error::InvalidLength`] if `length` is outside `2..=255`.
pub fn standard(length: usize) -> Result<Generator<ThreadRandom>> {
    Generator::with_source(GeneratorConfig::new(length), ThreadRandom)
}

/// Creates a non-secure generator over the default alphabet, seeded with
/// `seed`.
///
/// ⚠️ Faster than [`standard`] but predictable. Do not use it for anything
/// that must be unguessable.
///
/// # Errors
/// Returns [`crate::Error::InvalidLength`] if `length` is outside `2..=255`.
pub fn standard_non_secure(length: usize, seed: u64) -> Result<Generator<SmallRandom>> {
    Generator::with_source(
        GeneratorConfig::new(length).with_secure(false),
        SmallRandom::from_seed_u64(seed),
    )
}

/// Creates a secure generator over a custom alphabet. Non-ASCII units are
/// allowed.
///
/// # Errors
/// - [`crate::Error::InvalidLength`] if `length` is outside `2..=255`
/// - [`crate::Error::InvalidAlphabet`] if `alphabet` has fewer than two units
pub fn custom(alphabet: &str, length: usize) -> Result<Generator<ThreadRandom>> {
    check_length(length)?;
    let config = GeneratorConfig::new(length).with_alphabet(Alphabet::new(alphabet)?);
    Generator::with_source(config, ThreadRandom)
}

/// Like [`custom`], but the alphabet must be pure ASCII.
///
/// # Errors
/// Same as [`custom`], plus [`crate::Error::InvalidAlphabet`] if any unit is
/// outside the ASCII range.
pub fn custom_ascii(alphabet: &str, length: usize) -> Result<Generator<ThreadRandom>> {
    check_length(length)?;
    let config = GeneratorConfig::new(length)
        .with_alphabet(Alphabet::new(alphabet)?)
        .with_ascii_only(true);
    Generator::with_source(config, ThreadRandom)
}

/// Creates a non-secure generator over a custom alphabet, seeded with `seed`.
///
/// ⚠️ See [`standard_non_secure`].
///
/// # Errors
/// Same as [`custom`].
pub fn custom_non_secure(alphabet: &str, length: usize, seed: u64) -> Result<Generator<SmallRandom>> {
    check_length(length)?;
    let config = GeneratorConfig::new(length)
        .with_alphabet(Alphabet::new(alphabet)?)
        .with_secure(false);
    Generator::with_source(config, SmallRandom::from_seed_u64(seed))
}
