//! # nanogen
//!
//! Short, URL-safe, collision-resistant random IDs.
//!
//! A [`Generator`] turns buffered random bytes into IDs of a fixed length over
//! any alphabet, without modulo bias:
//!
//! - alphabets whose size is a power of two up to 256 are sampled by masking
//!   each byte directly;
//! - all other alphabets use mask-and-reject sampling, discarding candidates
//!   that fall outside the alphabet.
//!
//! Generators validate their configuration once, are cheap to call, and are
//! safe to share across threads.
//!
//! ```
//! use nanogen::{Alphabet, Generator, GeneratorConfig};
//!
//! // 21 units from `A-Za-z0-9_-`, cryptographically secure.
//! let ids = nanogen::standard(21).unwrap();
//! assert_eq!(ids.generate().len(), 21);
//!
//! // Any alphabet, including non-ASCII ones.
//! let config = GeneratorConfig::new(8).with_alphabet(Alphabet::new("αβγδε").unwrap());
//! let greek = Generator::new(config).unwrap();
//! assert_eq!(greek.generate().chars().count(), 8);
//! ```
//!
//! ## Random sources
//!
//! - [`ThreadRandom`]: thread-local CSPRNG, the secure default
//! - [`OsRandom`]: reads the operating system directly
//! - [`SmallRandom`]: fast and **non-secure**, explicitly seeded
//!
//! Any type implementing [`RandSource`] can be plugged in with
//! [`Generator::with_source`].
//!
//! ## Features
//!
//! - `parking-lot`: use `parking_lot::Mutex` instead of `std::sync::Mutex`
//! - `cache-padded`: pad the generator lock to a cache line
//! - `thread-local`: per-thread [`nanoid`] convenience function
//! - `tracing`: emit `tracing` spans and events
//! - `serde`: (de)serialize [`GeneratorConfig`] and [`Alphabet`]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod alphabet;
mod config;
mod error;
mod generator;
mod rand;
mod sampler;

pub use crate::alphabet::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::rand::*;
