use alloc::sync::Arc;
use core::fmt;

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::mutex::{Mutex, MutexGuard};
use crate::{
    Alphabet, Entropy, GeneratorConfig, RandSource, Result,
    sampler::{EntropyPool, Sampling},
};

/// A reusable, thread-safe ID generator.
///
/// All per-call state (the entropy pool and the output buffer) lives behind a
/// single [`Mutex`], so one generator can be shared freely across threads.
/// Calls on the same generator are serialized; distinct generators share
/// nothing.
///
/// Cloning a `Generator` is cheap and yields another handle to the **same**
/// generator (same pool, same lock). The generator is freed when the last
/// handle is dropped.
///
/// ## Sampling
/// - Alphabets whose size is a power of two up to 256 (such as the default
///   64-unit alphabet) take the *direct-mask* path: one buffered byte per unit,
///   with many IDs served per random-source call.
/// - Every other alphabet takes the *mask-and-reject* path: masked candidates
///   beyond the alphabet are discarded, which keeps the distribution flat.
///
/// ## Example
/// ```
/// use nanogen::{Generator, GeneratorConfig};
///
/// let generator = Generator::new(GeneratorConfig::default()).unwrap();
///
/// let id = generator.generate();
/// assert_eq!(id.len(), 21);
/// assert_ne!(id, generator.generate());
/// ```
pub struct Generator<R = Entropy>
where
    R: RandSource,
{
    inner: Arc<Inner<R>>,
}

struct Inner<R> {
    alphabet: Alphabet,
    length: usize,
    sampling: Sampling,
    capacity: usize,
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<Mutex<State<R>>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Mutex<State<R>>,
}

/// Everything a call mutates. Only reachable through the lock.
struct State<R> {
    pool: EntropyPool<R>,
    out: Box<[char]>,
}

impl Generator<Entropy> {
    /// Creates a generator whose random source is picked by
    /// [`GeneratorConfig::secure`]: [`crate::ThreadRandom`] when `true`, a
    /// freshly seeded [`crate::SmallRandom`] otherwise.
    ///
    /// # Errors
    /// - [`crate::Error::InvalidLength`] if the length is outside `2..=255`
    /// - [`crate::Error::InvalidAlphabet`] if `ascii_only` is set and the
    ///   alphabet contains a non-ASCII unit
    ///
    /// # Example
    /// ```
    /// use nanogen::{Alphabet, Generator, GeneratorConfig};
    ///
    /// let config = GeneratorConfig::new(10).with_alphabet(Alphabet::numeric());
    /// let generator = Generator::new(config).unwrap();
    ///
    /// let id = generator.generate();
    /// assert!(id.chars().all(|c| c.is_ascii_digit()));
    /// ```
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let source = Entropy::new(config.secure);
        Self::with_source(config, source)
    }
}

impl<R> Generator<R>
where
    R: RandSource,
{
    /// Creates a generator reading from a caller-supplied random source.
    ///
    /// [`GeneratorConfig::secure`] is ignored; the security of the output is
    /// exactly that of `source`.
    ///
    /// # Errors
    /// See [`Generator::new`].
    ///
    /// # Example
    /// ```
    /// use nanogen::{Generator, GeneratorConfig, SmallRandom};
    ///
    /// let a = Generator::with_source(GeneratorConfig::new(8), SmallRandom::from_seed_u64(1)).unwrap();
    /// let b = Generator::with_source(GeneratorConfig::new(8), SmallRandom::from_seed_u64(1)).unwrap();
    /// assert_eq!(a.generate(), b.generate());
    /// ```
    pub fn with_source(config: GeneratorConfig, source: R) -> Result<Self> {
        config.validate()?;
        let buffer_ids = config.effective_buffer_ids();
        Ok(Self::build(config.alphabet, config.length, buffer_ids, source))
    }

    /// Assembles a generator from already-validated parts and fills its pool
    /// once.
    pub(crate) fn build(alphabet: Alphabet, length: usize, buffer_ids: usize, source: R) -> Self {
        let sampling = Sampling::plan(alphabet.len(), length);
        let capacity = sampling.pool_capacity(length, buffer_ids);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            size = alphabet.len(),
            length,
            ?sampling,
            capacity,
            "created generator"
        );

        let state = Mutex::new(State {
            pool: EntropyPool::new(capacity, source),
            out: vec!['\0'; length].into_boxed_slice(),
        });

        Self {
            inner: Arc::new(Inner {
                alphabet,
                length,
                sampling,
                capacity,
                #[cfg(feature = "cache-padded")]
                state: crossbeam_utils::CachePadded::new(state),
                #[cfg(not(feature = "cache-padded"))]
                state,
            }),
        }
    }

    /// Generates a new ID.
    ///
    /// Holds the generator's lock for the whole call, including any pool
    /// refills. The returned string is a fresh copy; the internal buffer is
    /// reused by the next call.
    ///
    /// Never fails. Blocks only on the lock and on the random source.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> String {
        let mut guard = self.lock();
        let State { pool, out } = &mut *guard;
        self.inner
            .sampling
            .sample(pool, self.inner.alphabet.units(), out);
        out.iter().collect()
    }

    /// An endless iterator of fresh IDs.
    ///
    /// # Example
    /// ```
    /// use nanogen::{Generator, GeneratorConfig};
    ///
    /// let generator = Generator::new(GeneratorConfig::new(6)).unwrap();
    /// let ids: Vec<String> = generator.iter().take(3).collect();
    /// assert_eq!(ids.len(), 3);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        core::iter::repeat_with(|| self.generate())
    }

    /// The alphabet IDs are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.inner.alphabet
    }

    /// Number of units in every generated ID.
    pub fn length(&self) -> usize {
        self.inner.length
    }

    /// The bit mask applied to random bytes before indexing.
    pub fn mask(&self) -> u32 {
        self.inner.sampling.mask()
    }

    /// Returns `true` if this generator uses the direct-mask path.
    pub fn is_direct(&self) -> bool {
        matches!(self.inner.sampling, Sampling::Direct { .. })
    }

    /// Size in bytes of the entropy pool.
    pub fn pool_capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Acquires the state lock.
    ///
    /// A poisoned lock is recovered rather than reported. The pool only
    /// advances its cursor once a refill has completed, and the output buffer
    /// is overwritten in full by every call, so a panic in another call
    /// cannot leave state that breaks this one.
    #[inline]
    fn lock(&self) -> MutexGuard<'_, State<R>> {
        #[cfg(feature = "parking-lot")]
        {
            self.inner.state.lock()
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            self.inner
                .state
                .lock()
                .unwrap_or_else(super::mutex::PoisonError::into_inner)
        }
    }
}

impl<R> Clone for Generator<R>
where
    R: RandSource,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> fmt::Debug for Generator<R>
where
    R: RandSource,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("alphabet", &self.inner.alphabet)
            .field("length", &self.inner.length)
            .field("sampling", &self.inner.sampling)
            .field("capacity", &self.inner.capacity)
            .finish_non_exhaustive()
    }
}
