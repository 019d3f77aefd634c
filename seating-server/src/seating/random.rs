//! Seeded pseudo-random source for the occupancy simulation
//!
//! A 48-bit linear congruential generator with the classic
//! `0x5DEECE66D` multiplier. The draw algorithm is fixed so the same seed
//! always reproduces the same floor occupancy, on every platform and across
//! dependency upgrades.

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const INCREMENT: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

/// Deterministic generator, one per (table, day)
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the state and return its top `bits` bits
    fn next_bits(&mut self, bits: u32) -> i32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform draw from `[0, bound)`
    ///
    /// Power-of-two bounds take the high bits directly; other bounds reject
    /// the tail of the 31-bit range so every value stays equally likely.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0 && bound <= i32::MAX as u32);
        let bound = bound as i32;
        let mut r = self.next_bits(31);
        let m = bound - 1;
        if bound & m == 0 {
            return ((i64::from(bound) * i64::from(r)) >> 31) as u32;
        }
        let mut u = r;
        loop {
            r = u % bound;
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r as u32;
            }
            u = self.next_bits(31);
        }
    }

    /// Uniform draw from the inclusive range `[low, high]`
    pub fn next_in(&mut self, low: u32, high: u32) -> u32 {
        low + self.next_below(high - low + 1)
    }
}

/// 31-polynomial string hash over UTF-16 code units, wrapping at 32 bits
pub fn stable_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
