use crate::{Alphabet, Error, Result};
use core::num::NonZeroUsize;

/// Shortest ID a generator will produce.
pub const MIN_LENGTH: usize = 2;

/// Longest ID a generator will produce.
pub const MAX_LENGTH: usize = 255;

/// Recommended ID length. With the default 64-unit alphabet this carries 126
/// bits of randomness.
pub const DEFAULT_LENGTH: usize = 21;

/// How many IDs' worth of bytes the direct-mask path buffers per
/// random-source call, as a multiple of the ID length.
pub const DEFAULT_BUFFER_FACTOR: usize = 6;

/// Upper bound, in bytes, on the direct-mask entropy pool. Larger
/// `buffer_ids` requests are clamped to fit.
pub const MAX_POOL_CAPACITY: usize = 1 << 20;

/// Construction parameters for a [`crate::Generator`].
///
/// The struct is plain data; nothing is validated until it is handed to
/// [`crate::Generator::new`] or [`crate::Generator::with_source`].
///
/// With the `serde` feature the config can be loaded from any serde format.
/// Missing fields take their [`Default`] values.
///
/// # Example
/// ```
/// use nanogen::{Alphabet, GeneratorConfig};
///
/// let config = GeneratorConfig::new(12)
///     .with_alphabet(Alphabet::numeric())
///     .with_secure(false);
///
/// assert!(config.validate().is_ok());
/// assert!(GeneratorConfig::new(256).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct GeneratorConfig {
    /// Units IDs are drawn from.
    pub alphabet: Alphabet,
    /// Number of units per ID, in [`MIN_LENGTH`]`..=`[`MAX_LENGTH`].
    pub length: usize,
    /// Use a cryptographically secure source. Only consulted by
    /// [`crate::Generator::new`]; ignored when a source is supplied.
    pub secure: bool,
    /// Reject alphabets containing non-ASCII units.
    pub ascii_only: bool,
    /// IDs served per refill on the direct-mask path. Defaults to
    /// [`DEFAULT_BUFFER_FACTOR`]` * length`. Larger values trade memory for
    /// fewer random-source calls, up to [`MAX_POOL_CAPACITY`] bytes; anything
    /// beyond is clamped.
    pub buffer_ids: Option<NonZeroUsize>,
}

impl GeneratorConfig {
    /// A secure config over the default alphabet with the given length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    pub fn with_buffer_ids(mut self, buffer_ids: NonZeroUsize) -> Self {
        self.buffer_ids = Some(buffer_ids);
        self
    }

    /// Checks the config without building a generator.
    ///
    /// # Errors
    /// - [`Error::InvalidLength`] if `length` is outside
    ///   [`MIN_LENGTH`]`..=`[`MAX_LENGTH`]
    /// - [`Error::InvalidAlphabet`] if `ascii_only` is set and the alphabet
    ///   has a non-ASCII unit
    pub fn validate(&self) -> Result<()> {
        check_length(self.length)?;
        if self.ascii_only {
            self.alphabet.require_ascii()?;
        }
        Ok(())
    }

    /// IDs per refill, clamped so the pool stays within
    /// [`MAX_POOL_CAPACITY`]. Expects a validated length.
    pub(crate) fn effective_buffer_ids(&self) -> usize {
        let length = self.length.max(1);
        let requested = self
            .buffer_ids
            .map_or(DEFAULT_BUFFER_FACTOR.saturating_mul(length), NonZeroUsize::get);
        requested.clamp(1, (MAX_POOL_CAPACITY / length).max(1))
    }
}

/// Checks `length` against [`MIN_LENGTH`]`..=`[`MAX_LENGTH`].
pub(crate) fn check_length(length: usize) -> Result<()> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(Error::InvalidLength { length })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            length: DEFAULT_LENGTH,
            secure: true,
            ascii_only: false,
            buffer_ids: None,
        }
    }
}
