use crate::RandSource;
use rand::{RngCore, SeedableRng, rngs::SmallRng};

/// A fast, **non-cryptographic** `RandSource` backed by
/// [`rand::rngs::SmallRng`].
///
/// ⚠️ The output is predictable to anyone who learns the seed or observes
/// enough IDs. Never use it for session tokens, password-reset links or any
/// other identifier that must be unguessable.
///
/// Seeding is explicit: either pass a seed with [`Self::from_seed_u64`] (for
/// reproducible sequences) or draw one from the thread-local CSPRNG with
/// [`Self::from_entropy`].
///
/// # Example
/// ```
/// use nanogen::{RandSource, SmallRandom};
///
/// let mut a = SmallRandom::from_seed_u64(7);
/// let mut b = SmallRandom::from_seed_u64(7);
/// let (mut x, mut y) = ([0u8; 8], [0u8; 8]);
/// a.fill(&mut x);
/// b.fill(&mut y);
/// assert_eq!(x, y);
/// ```
#[derive(Clone, Debug)]
pub struct SmallRandom {
    rng: SmallRng,
}

impl SmallRandom {
    /// Creates a source whose byte stream is fully determined by `seed`.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded once from the thread-local CSPRNG.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for SmallRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandSource for SmallRandom {
    fn fill(&mut self, buf: &mut [u8]) {
        self.rng.fill_bytes(buf);
    }
}
