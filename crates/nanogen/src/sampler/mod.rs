mod direct;
mod mask;
mod pool;
mod reject;
#[cfg(test)]
mod tests;

pub(crate) use mask::*;
pub(crate) use pool::*;

use crate::RandSource;

/// How a generator turns random bytes into alphabet indices. Fixed at
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sampling {
    /// Alphabet size is a power of two no larger than 256: every masked byte
    /// is a valid index.
    Direct { mask: u8 },
    /// Any other alphabet size: masked candidates of `width` bytes are
    /// rejected when they land past the end of the alphabet. Each block holds
    /// `step` candidates.
    Reject { mask: u32, step: usize, width: usize },
}

impl Sampling {
    /// Picks the sampling path for an alphabet of `size` units and IDs of
    /// `length` units.
    pub(crate) fn plan(size: usize, length: usize) -> Self {
        let mask = mask_for(size);
        if is_direct(size) {
            // `is_direct` bounds size to 256, so the mask fits a byte.
            Self::Direct { mask: mask as u8 }
        } else {
            Self::Reject {
                mask,
                step: step_for(mask, length, size),
                width: candidate_width(mask),
            }
        }
    }

    /// Size in bytes of the entropy pool backing this path.
    ///
    /// The direct path buffers `buffer_ids` whole IDs. The rejection path
    /// buffers a single block of `step` candidates.
    pub(crate) fn pool_capacity(&self, length: usize, buffer_ids: usize) -> usize {
        match *self {
            Self::Direct { .. } => length * buffer_ids,
            Self::Reject { step, width, .. } => step * width,
        }
    }

    pub(crate) fn mask(&self) -> u32 {
        match *self {
            Self::Direct { mask } => u32::from(mask),
            Self::Reject { mask, .. } => mask,
        }
    }

    /// Writes `out.len()` units drawn from `alphabet` into `out`.
    pub(crate) fn sample<R: RandSource>(
        &self,
        pool: &mut EntropyPool<R>,
        alphabet: &[char],
        out: &mut [char],
    ) {
        match *self {
            Self::Direct { mask } => direct::sample(mask, pool, alphabet, out),
            Self::Reject { mask, width, .. } => reject::sample(mask, width, pool, alphabet, out),
        }
    }
}
