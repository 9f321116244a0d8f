use crate::RandSource;
use rand::{RngCore, TryRngCore, rngs::OsRng};

/// A `RandSource` that reads straight from the operating system
/// (`getrandom(2)` and its platform equivalents).
///
/// Slower than [`crate::ThreadRandom`] since every fill is a system call, but
/// no userspace state is involved. Generators buffer entropy, so the number of
/// system calls stays low.
///
/// # Panics
/// Fills panic if the operating system fails to provide randomness. This is
/// treated as a fatal environment failure.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) {
        OsRng.unwrap_err().fill_bytes(buf);
    }
}
