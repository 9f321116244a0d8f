use super::*;
use crate::RandSource;
use std::collections::HashMap;

/// Fills with an incrementing byte counter that carries over between fills.
struct CountingRand {
    next: u8,
    fills: usize,
}

impl CountingRand {
    fn new() -> Self {
        Self { next: 0, fills: 0 }
    }
}

impl RandSource for CountingRand {
    fn fill(&mut self, buf: &mut [u8]) {
        self.fills += 1;
        for byte in buf {
            *byte = self.next;
            self.next = self.next.wrapping_add(1);
        }
    }
}

/// Replays a fixed script of bytes, wrapping around at the end.
struct ScriptedRand {
    script: Vec<u8>,
    pos: usize,
    fills: usize,
}

impl ScriptedRand {
    fn new(script: &[u8]) -> Self {
        Self {
            script: script.to_vec(),
            pos: 0,
            fills: 0,
        }
    }
}

impl RandSource for ScriptedRand {
    fn fill(&mut self, buf: &mut [u8]) {
        self.fills += 1;
        for byte in buf {
            *byte = self.script[self.pos % self.script.len()];
            self.pos += 1;
        }
    }
}

fn units(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn sample_string<R: RandSource>(
    sampling: Sampling,
    pool: &mut EntropyPool<R>,
    alphabet: &[char],
    length: usize,
) -> String {
    let mut out = vec!['\0'; length];
    sampling.sample(pool, alphabet, &mut out);
    out.into_iter().collect()
}

#[test]
fn mask_covers_highest_index() {
    let cases = [
        (2, 1),
        (3, 3),
        (4, 3),
        (5, 7),
        (10, 15),
        (16, 15),
        (17, 31),
        (62, 63),
        (64, 63),
        (65, 127),
        (255, 255),
        (256, 255),
        (257, 511),
        (1 << 16, 0xFFFF),
        ((1 << 16) + 1, 0x1_FFFF),
    ];
    for (size, mask) in cases {
        assert_eq!(mask_for(size), mask, "size {size}");
    }
}

#[test]
fn mask_stays_within_twice_the_size() {
    for size in 2..=4096usize {
        let mask = mask_for(size) as usize;
        assert!(mask >= size - 1, "size {size}");
        assert!(mask < 2 * size, "size {size}");
        assert!((mask + 1).is_power_of_two(), "size {size}");
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn mask_saturates_at_u32() {
    assert_eq!(mask_for(1 << 32), u32::MAX);
    assert_eq!(candidate_width(u32::MAX), 4);
}

#[test]
fn masking_power_of_two_sizes_is_unbiased() {
    for shift in 1..=8 {
        let size = 1usize << shift;
        let mask = mask_for(size) as u8;
        let mut counts = vec![0usize; size];
        for byte in 0..=u8::MAX {
            counts[usize::from(byte & mask)] += 1;
        }
        assert!(
            counts.iter().all(|&count| count == 256 / size),
            "size {size}: {counts:?}"
        );
    }
}

#[test]
fn direct_path_only_for_byte_sized_powers_of_two() {
    assert!(is_direct(2));
    assert!(is_direct(64));
    assert!(is_direct(256));
    assert!(!is_direct(10));
    assert!(!is_direct(63));
    assert!(!is_direct(512));

    assert_eq!(Sampling::plan(64, 21), Sampling::Direct { mask: 63 });
    assert!(matches!(
        Sampling::plan(512, 21),
        Sampling::Reject { mask: 511, width: 2, .. }
    ));
}

#[test]
fn candidate_width_matches_mask_bytes() {
    assert_eq!(candidate_width(1), 1);
    assert_eq!(candidate_width(0xFF), 1);
    assert_eq!(candidate_width(0x1FF), 2);
    assert_eq!(candidate_width(0xFFFF), 2);
    assert_eq!(candidate_width(0x1_FFFF), 3);
    assert_eq!(candidate_width(0x1FF_FFFF), 4);
}

#[test]
fn step_inflates_expected_block() {
    // 10 units, mask 15: 21 * 16 / 10 * 1.6 = 53.76
    assert_eq!(step_for(15, 21, 10), 54);
    // 3 units, mask 3: 2 * 4 / 3 * 1.6 = 4.27
    assert_eq!(step_for(3, 2, 3), 5);
    // never below the ID length
    assert!(step_for(1, 255, 2) >= 255);
    for size in 2..=300usize {
        let mask = mask_for(size);
        for length in [2, 21, 255] {
            assert!(step_for(mask, length, size) >= length);
        }
    }
}

#[test]
fn pool_serves_sequential_slices() {
    let mut pool = EntropyPool::new(6, CountingRand::new());
    assert_eq!(pool.capacity(), 6);
    assert_eq!(pool.remaining(), 6);
    assert_eq!(pool.take(3), &[0, 1, 2]);
    assert_eq!(pool.take(3), &[3, 4, 5]);
    assert_eq!(pool.remaining(), 0);
    // exhausted: refills before serving
    assert_eq!(pool.take(2), &[6, 7]);
    assert_eq!(pool.remaining(), 4);
}

#[test]
fn pool_refills_when_too_few_bytes_remain() {
    let mut pool = EntropyPool::new(5, CountingRand::new());
    assert_eq!(pool.take(3), &[0, 1, 2]);
    assert_eq!(pool.take(3), &[5, 6, 7]);
    assert_eq!(pool.source().fills, 2);
}

#[test]
fn pool_take_remaining_exhausts() {
    let mut pool = EntropyPool::new(4, CountingRand::new());
    assert_eq!(pool.take(1), &[0]);
    assert_eq!(pool.take_remaining(), &[1, 2, 3]);
    assert_eq!(pool.remaining(), 0);
    assert_eq!(pool.take_remaining(), &[4, 5, 6, 7]);
    assert_eq!(pool.source().fills, 2);
}

#[test]
fn direct_sampling_consumes_one_byte_per_unit() {
    let alphabet = units(crate::URL_SAFE);
    let sampling = Sampling::plan(alphabet.len(), 4);
    let mut pool = EntropyPool::new(sampling.pool_capacity(4, 2), CountingRand::new());
    assert_eq!(pool.capacity(), 8);

    assert_eq!(sample_string(sampling, &mut pool, &alphabet, 4), "abcd");
    assert_eq!(sample_string(sampling, &mut pool, &alphabet, 4), "efgh");
    assert_eq!(pool.source().fills, 1);

    assert_eq!(sample_string(sampling, &mut pool, &alphabet, 4), "ijkl");
    assert_eq!(pool.source().fills, 2);
}

#[test]
fn direct_sampling_masks_high_bits() {
    let alphabet = units("wxyz");
    let sampling = Sampling::plan(alphabet.len(), 4);
    let mut pool = EntropyPool::new(4, ScriptedRand::new(&[0b1111_1100, 0xFD, 0x42, 0xFF]));
    assert_eq!(sample_string(sampling, &mut pool, &alphabet, 4), "wxyz");
}

#[test]
fn reject_sampling_skips_out_of_range_candidates() {
    let alphabet = units("abc");
    let sampling = Sampling::plan(alphabet.len(), 2);
    assert_eq!(
        sampling,
        Sampling::Reject {
            mask: 3,
            step: 5,
            width: 1
        }
    );
    let mut pool = EntropyPool::new(sampling.pool_capacity(2, 1), CountingRand::new());

    // block [0, 1, 2, 3, 4]
    assert_eq!(sample_string(sampling, &mut pool, &alphabet, 2), "ab");
    // leftovers dropped, block [5, 6, 7, 8, 9]
    assert_eq!(sample_string(sampling, &mut pool, &alphabet, 2), "bc");
    // block [10, 11, 12, 13, 14]: 11 & 3 == 3 is rejected
    assert_eq!(sample_string(sampling, &mut pool, &alphabet, 2), "ca");
    assert_eq!(pool.source().fills, 3);
}

#[test]
fn reject_sampling_refills_within_a_call() {
    let alphabet = units("abc");
    let sampling = Sampling::plan(alphabet.len(), 2);
    let mut pool = EntropyPool::new(
        sampling.pool_capacity(2, 1),
        ScriptedRand::new(&[3, 3, 3, 3, 3, 2, 2, 2, 2, 2]),
    );

    assert_eq!(sample_string(sampling, &mut pool, &alphabet, 2), "cc");
    assert_eq!(pool.source().fills, 2);
}

#[test]
fn reject_sampling_reads_wide_candidates() {
    let alphabet: Vec<char> = (0..300u32)
        .map(|i| char::from_u32(0x4E00 + i).unwrap())
        .collect();
    let sampling = Sampling::plan(alphabet.len(), 2);
    assert_eq!(
        sampling,
        Sampling::Reject {
            mask: 511,
            step: 6,
            width: 2
        }
    );
    let mut pool = EntropyPool::new(sampling.pool_capacity(2, 1), CountingRand::new());
    assert_eq!(pool.capacity(), 12);

    // candidates 0x0100 & 511 = 256, 0x0302 & 511 = 258
    let id: Vec<char> = sample_string(sampling, &mut pool, &alphabet, 2)
        .chars()
        .collect();
    assert_eq!(id, vec![alphabet[256], alphabet[258]]);
}

#[test]
fn reject_sampling_is_flat() {
    let alphabet = units("0123456789");
    let sampling = Sampling::plan(alphabet.len(), 10);
    let mut pool = EntropyPool::new(sampling.pool_capacity(10, 1), crate::ThreadRandom);
    let mut out = vec!['\0'; 10];
    let mut hits: HashMap<char, usize> = HashMap::new();

    const TRIES: usize = 100_000;
    for _ in 0..TRIES {
        sampling.sample(&mut pool, &alphabet, &mut out);
        for &unit in &out {
            *hits.entry(unit).or_default() += 1;
        }
    }

    let expected = (TRIES * 10 / alphabet.len()) as f64;
    assert_eq!(hits.len(), alphabet.len());
    for (unit, count) in hits {
        let drift = (count as f64 - expected).abs() / expected;
        assert!(drift < 0.03, "{unit}: {count} vs {expected}");
    }
}
