use super::EntropyPool;
use crate::RandSource;

/// Direct-mask sampling: one byte per unit, `byte & mask` is always a valid
/// index because the alphabet size is `mask + 1`.
///
/// Reads exactly `out.len()` bytes and refills the pool at most once.
#[inline]
pub(super) fn sample<R: RandSource>(
    mask: u8,
    pool: &mut EntropyPool<R>,
    alphabet: &[char],
    out: &mut [char],
) {
    debug_assert_eq!(alphabet.len(), usize::from(mask) + 1);
    let bytes = pool.take(out.len());
    for (unit, &byte) in out.iter_mut().zip(bytes) {
        *unit = alphabet[usize::from(byte & mask)];
    }
}
