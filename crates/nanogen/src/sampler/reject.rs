use super::EntropyPool;
use crate::RandSource;

/// Mask-and-reject sampling for alphabets of any size.
///
/// Every call consumes whole blocks: bytes left over when the ID completes are
/// dropped, and the next call starts on a fresh block. Candidates are `width`
/// bytes wide and read little-endian; pool capacity is a multiple of `width`
/// so a candidate never straddles a refill.
///
/// The loop only ends once `out` is full. Each candidate is accepted with
/// probability at least one half, so it terminates almost surely.
pub(super) fn sample<R: RandSource>(
    mask: u32,
    width: usize,
    pool: &mut EntropyPool<R>,
    alphabet: &[char],
    out: &mut [char],
) {
    debug_assert_eq!(pool.capacity() % width, 0);
    let size = alphabet.len() as u64;
    let mut filled = 0;

    while filled < out.len() {
        for chunk in pool.take_remaining().chunks_exact(width) {
            let idx = read_candidate(chunk) & mask;
            if u64::from(idx) < size {
                out[filled] = alphabet[idx as usize];
                filled += 1;
                if filled == out.len() {
                    break;
                }
            }
        }
    }
}

#[inline]
fn read_candidate(chunk: &[u8]) -> u32 {
    chunk
        .iter()
        .rev()
        .fold(0, |acc, &byte| (acc << 8) | u32::from(byte))
}
