use crate::RandSource;

/// A block of random bytes served in sequential slices.
///
/// `offset` always stays within `0..=capacity`; `offset == capacity` means the
/// pool is exhausted and must be refilled before another byte is served.
pub(crate) struct EntropyPool<R> {
    buf: Box<[u8]>,
    offset: usize,
    source: R,
}

impl<R: RandSource> EntropyPool<R> {
    /// Allocates a pool of `capacity` bytes and fills it once.
    pub(crate) fn new(capacity: usize, source: R) -> Self {
        let mut pool = Self {
            buf: vec![0; capacity].into_boxed_slice(),
            offset: capacity,
            source,
        };
        pool.refill();
        pool
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &R {
        &self.source
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Replaces the whole pool with fresh bytes and rewinds the cursor.
    pub(crate) fn refill(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(capacity = self.buf.len(), "refilling entropy pool");

        self.source.fill(&mut self.buf);
        self.offset = 0;
    }

    /// Serves the next `n` bytes, refilling first if fewer than `n` remain.
    ///
    /// `n` must not exceed the capacity.
    pub(crate) fn take(&mut self, n: usize) -> &[u8] {
        debug_assert!(n <= self.buf.len());
        if self.remaining() < n {
            self.refill();
        }
        let start = self.offset;
        self.offset += n;
        &self.buf[start..self.offset]
    }

    /// Serves every unused byte, refilling first if the pool is exhausted.
    /// The pool is exhausted afterwards.
    pub(crate) fn take_remaining(&mut self) -> &[u8] {
        if self.remaining() == 0 {
            self.refill();
        }
        let start = self.offset;
        self.offset = self.buf.len();
        &self.buf[start..]
    }
}
