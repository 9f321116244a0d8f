use crate::{RandSource, SmallRandom, ThreadRandom};

/// The random source selected by [`crate::GeneratorConfig::secure`].
#[derive(Clone, Debug)]
pub enum Entropy {
    /// Cryptographically secure bytes from [`ThreadRandom`].
    Secure(ThreadRandom),
    /// Fast pseudorandom bytes from [`SmallRandom`].
    NonSecure(SmallRandom),
}

impl Entropy {
    /// Picks the secure source, or a freshly seeded non-secure one.
    pub fn new(secure: bool) -> Self {
        if secure {
            Self::Secure(ThreadRandom)
        } else {
            Self::NonSecure(SmallRandom::from_entropy())
        }
    }

    /// Returns `true` for the cryptographically secure source.
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Secure(_))
    }
}

impl RandSource for Entropy {
    fn fill(&mut self, buf: &mut [u8]) {
        match self {
            Self::Secure(rng) => rng.fill(buf),
            Self::NonSecure(rng) => rng.fill(buf),
        }
    }
}
