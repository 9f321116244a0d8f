use crate::RandSource;
use rand::{RngCore, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded from the OS periodically.
///
/// This type does **not** store the RNG itself; it accesses the thread-local
/// generator on each fill, so it is `Send` and `Sync` and may move freely
/// between threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn fill(&mut self, buf: &mut [u8]) {
        rng().fill_bytes(buf);
    }
}
