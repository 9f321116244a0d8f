use crate::{AlphabetError, Result};
use alloc::sync::Arc;
use core::fmt;

/// Smallest number of units an alphabet may hold.
pub const MIN_ALPHABET_SIZE: usize = 2;

/// Largest number of units an alphabet may hold.
///
/// Indices are drawn through a 32-bit mask, so `size - 1` must fit in a
/// `u32`.
pub const MAX_ALPHABET_SIZE: u64 = 1 << 32;

/// The default URL-safe alphabet (`a-z`, `A-Z`, `0-9`, `-`, `_`).
pub const URL_SAFE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NUMERIC: &str = "0123456789";
const HEX_LOWERCASE: &str = "0123456789abcdef";

/// An ordered, validated set of display units that IDs are drawn from.
///
/// Units are Unicode scalar values, so non-ASCII alphabets are supported.
/// Duplicates are allowed; a repeated unit is simply drawn more often.
///
/// The unit storage is reference counted, so cloning an `Alphabet` is cheap.
///
/// # Example
/// ```
/// use nanogen::Alphabet;
///
/// let alphabet = Alphabet::new("0123456789").unwrap();
/// assert_eq!(alphabet.len(), 10);
/// assert!(alphabet.is_ascii());
///
/// assert!(Alphabet::new("x").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    units: Arc<[char]>,
    ascii: bool,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `units`.
    ///
    /// # Errors
    /// - [`AlphabetError::TooSmall`] if `units` has fewer than two characters
    /// - [`AlphabetError::TooLarge`] if it has more than
    ///   [`MAX_ALPHABET_SIZE`] characters
    pub fn new(units: &str) -> Result<Self> {
        Self::from_units(units.chars().collect())
    }

    /// Builds an alphabet that may only contain ASCII units.
    ///
    /// # Errors
    /// Same as [`Self::new`], plus [`AlphabetError::NonAscii`] naming the
    /// first unit outside the ASCII range.
    ///
    /// # Example
    /// ```
    /// use nanogen::{Alphabet, AlphabetError, Error};
    ///
    /// assert!(Alphabet::ascii("abc").is_ok());
    /// assert_eq!(
    ///     Alphabet::ascii("abé").unwrap_err(),
    ///     Error::InvalidAlphabet(AlphabetError::NonAscii { unit: 'é', position: 2 }),
    /// );
    /// ```
    pub fn ascii(units: &str) -> Result<Self> {
        let alphabet = Self::new(units)?;
        alphabet.require_ascii()?;
        Ok(alphabet)
    }

    /// Builds an alphabet from an explicit list of units.
    ///
    /// # Errors
    /// See [`Self::new`].
    pub fn from_units(units: Vec<char>) -> Result<Self> {
        let size = units.len();
        if size < MIN_ALPHABET_SIZE {
            return Err(AlphabetError::TooSmall { size }.into());
        }
        if size as u64 > MAX_ALPHABET_SIZE {
            return Err(AlphabetError::TooLarge { size }.into());
        }
        let ascii = units.iter().all(char::is_ascii);
        Ok(Self {
            units: units.into(),
            ascii,
        })
    }

    /// The default 64-unit URL-safe alphabet.
    pub fn url_safe() -> Self {
        Self::preset(URL_SAFE)
    }

    /// `0-9`, `A-Z` and `a-z` (62 units).
    pub fn alphanumeric() -> Self {
        Self::preset(ALPHANUMERIC)
    }

    /// `0-9` (10 units).
    pub fn numeric() -> Self {
        Self::preset(NUMERIC)
    }

    /// `0-9` and `a-f` (16 units).
    pub fn hex_lowercase() -> Self {
        Self::preset(HEX_LOWERCASE)
    }

    // Presets are known-valid constants.
    fn preset(units: &str) -> Self {
        Self {
            units: units.chars().collect(),
            ascii: true,
        }
    }

    /// Number of units.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if every unit is ASCII.
    pub fn is_ascii(&self) -> bool {
        self.ascii
    }

    /// The units in order.
    pub fn units(&self) -> &[char] {
        &self.units
    }

    /// Returns `true` if `unit` is part of this alphabet.
    pub fn contains(&self, unit: char) -> bool {
        self.units.contains(&unit)
    }

    pub(crate) fn require_ascii(&self) -> Result<()> {
        if self.ascii {
            return Ok(());
        }
        match self.units.iter().enumerate().find(|(_, c)| !c.is_ascii()) {
            Some((position, &unit)) => Err(AlphabetError::NonAscii { unit, position }.into()),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::url_safe()
    }
}

impl core::ops::Index<usize> for Alphabet {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.units[index]
    }
}

impl core::str::FromStr for Alphabet {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = crate::Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.units.iter().collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.units.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("units", &format_args!("{self}"))
            .field("len", &self.len())
            .finish()
    }
}
