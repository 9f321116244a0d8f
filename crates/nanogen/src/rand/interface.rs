/// A trait for sources of random bytes.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. A generator owns its source and only calls it while
/// holding its lock, so implementations take `&mut self` and need no internal
/// synchronization.
///
/// Implementations must always populate the whole buffer. A source that
/// cannot produce bytes has no way to report it; it should panic.
///
/// # Example
/// ```
/// use nanogen::RandSource;
///
/// struct Zeroes;
/// impl RandSource for Zeroes {
///     fn fill(&mut self, buf: &mut [u8]) {
///         buf.fill(0);
///     }
/// }
///
/// let mut buf = [0xFF; 4];
/// Zeroes.fill(&mut buf);
/// assert_eq!(buf, [0; 4]);
/// ```
pub trait RandSource {
    /// Fills `buf` entirely with random bytes.
    fn fill(&mut self, buf: &mut [u8]);
}

impl<R: RandSource + ?Sized> RandSource for Box<R> {
    fn fill(&mut self, buf: &mut [u8]) {
        (**self).fill(buf);
    }
}
