//! Per-thread default generator.
//!
//! Each OS thread lazily builds its own secure generator over the default
//! alphabet, so calls never contend on a shared lock.
//!
//! # Example
//! ```rust
//! use nanogen::nanoid;
//!
//! let id = nanoid();
//! assert_eq!(id.len(), 21);
//! ```

use crate::{Alphabet, DEFAULT_BUFFER_FACTOR, DEFAULT_LENGTH, Generator, ThreadRandom};

thread_local! {
    /// A thread-local generator producing default-length IDs over the
    /// URL-safe alphabet.
    static DEFAULT_GENERATOR: Generator<ThreadRandom> = Generator::build(
        Alphabet::url_safe(),
        DEFAULT_LENGTH,
        DEFAULT_BUFFER_FACTOR * DEFAULT_LENGTH,
        ThreadRandom,
    );
}

/// Generates a 21-unit ID over the default URL-safe alphabet using this
/// thread's generator.
pub fn nanoid() -> String {
    DEFAULT_GENERATOR.with(Generator::generate)
}
