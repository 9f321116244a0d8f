/// Block inflation applied to the expected number of candidates per ID, so
/// that most IDs complete within a single block.
pub(crate) const STEP_FACTOR: f64 = 1.6;

/// Smallest `2^k - 1` that covers every index of an alphabet of `size` units.
///
/// Sets every bit at or below the highest set bit of `size - 1`. This keeps
/// `size - 1 <= mask <= 2 * size - 1`, so at least half of all masked values
/// are valid indices.
#[inline]
pub(crate) fn mask_for(size: usize) -> u32 {
    debug_assert!(size >= 2);
    let top = u32::try_from(size - 1).unwrap_or(u32::MAX) | 1;
    u32::MAX >> top.leading_zeros()
}

/// Returns `true` if a single masked byte always lands inside the alphabet.
#[inline]
pub(crate) fn is_direct(size: usize) -> bool {
    size.is_power_of_two() && size <= 1 << u8::BITS
}

/// Number of bytes needed to hold one masked candidate.
#[inline]
pub(crate) fn candidate_width(mask: u32) -> usize {
    let bits = (u32::BITS - mask.leading_zeros()) as usize;
    bits.div_ceil(8).max(1)
}

/// Number of candidates drawn per rejection block.
///
/// A candidate is accepted with probability `size / (mask + 1)`, so a block
/// must hold `length * (mask + 1) / size` candidates on average to complete
/// one ID. The result is inflated by [`STEP_FACTOR`] and never falls below
/// `length`.
pub(crate) fn step_for(mask: u32, length: usize, size: usize) -> usize {
    let expected = length as f64 * (f64::from(mask) + 1.0) / size as f64;
    let step = (STEP_FACTOR * expected).ceil() as usize;
    step.max(length)
}
