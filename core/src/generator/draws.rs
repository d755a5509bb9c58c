//! Derived typed draws
//!
//! Every typed draw is built from one or two 32-bit words of the core
//! engine. The only unbounded-iteration paths are the rejection loops:
//! non-power-of-two bounds, boundary-inclusive floats and the polar
//! Gaussian method. Those consume a data-dependent number of steps and
//! are therefore excluded from the exact `advance`-reversibility
//! guarantee.

use crate::guard::StateGuard;

use super::Pcg;

const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

impl<G: StateGuard> Pcg<G> {
    /// Top `bits` bits of one permuted word.
    #[inline]
    fn next_bits(&self, bits: u32) -> u32 {
        self.next_word() >> (32 - bits)
    }

    /// One full 32-bit pseudorandom word, as a signed int.
    pub fn next_int(&self) -> i32 {
        self.next_word() as i32
    }

    /// Uniform draw in `[0, bound)`.
    ///
    /// Power-of-two bounds scale a 31-bit draw with a single
    /// multiply-shift; other bounds redraw while the sample falls in the
    /// biased tail, guaranteeing exact uniformity.
    ///
    /// # Panics
    /// Panics if `bound <= 0`.
    pub fn next_int_bound(&self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive");

        if bound & bound.wrapping_neg() == bound {
            // Power of two: take the high bits of a 31-bit draw.
            return ((bound as i64).wrapping_mul(self.next_bits(31) as i64) >> 31) as i32;
        }
        loop {
            let bits = self.next_bits(31) as i32;
            let value = bits % bound;
            // Reject samples from the incomplete top interval.
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    /// Two consecutive words concatenated into 64 bits.
    ///
    /// The low word is combined as a signed 32-bit value rather than
    /// masked to unsigned. This asymmetry with [`Pcg::next_int`] is
    /// intentional, documented behavior; downstream test vectors depend
    /// on it.
    pub fn next_long(&self) -> i64 {
        let high = self.next_bits(32) as i32 as i64;
        let low = self.next_bits(32) as i32 as i64;
        (high << 32).wrapping_add(low)
    }

    /// Uniform draw in `[0, bound)` over 64 bits.
    ///
    /// # Panics
    /// Panics if `bound <= 0`.
    pub fn next_long_bound(&self, bound: i64) -> i64 {
        assert!(bound > 0, "bound must be positive");

        loop {
            let bits = (self.next_long() as u64 >> 1) as i64;
            let value = bits % bound;
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    /// Uniform boolean.
    pub fn next_bool(&self) -> bool {
        self.next_bits(1) != 0
    }

    /// Boolean that is `true` with the given probability.
    ///
    /// Probabilities 0.0 and 1.0 return immediately without consuming a
    /// draw; anything else compares a 53-bit uniform sample against the
    /// probability.
    ///
    /// # Panics
    /// Panics if `probability` is not within `[0.0, 1.0]`.
    pub fn next_bool_prob(&self, probability: f64) -> bool {
        assert!(
            (0.0..=1.0).contains(&probability),
            "probability must be in [0.0, 1.0]"
        );

        if probability == 0.0 {
            false
        } else if probability == 1.0 {
            true
        } else {
            self.next_double() < probability
        }
    }

    /// Top 8 bits of one word, as a signed byte.
    pub fn next_byte(&self) -> i8 {
        self.next_bits(8) as u8 as i8
    }

    /// Top 16 bits of one word, as a signed short.
    pub fn next_short(&self) -> i16 {
        self.next_bits(16) as u16 as i16
    }

    /// Uniform f32 in `[0.0, 1.0)` with a full 24-bit mantissa.
    pub fn next_float(&self) -> f32 {
        self.next_bits(24) as f32 * FLOAT_UNIT
    }

    /// Uniform f32 with configurable boundary inclusion.
    ///
    /// Redraws while the sample is invalid for the requested interval.
    /// When `include_one` is set, one extra bit decides whether to add
    /// exactly 1.0 to the half-open sample; the addition only survives
    /// when it lands exactly on 1.0.
    pub fn next_float_with(&self, include_zero: bool, include_one: bool) -> f32 {
        loop {
            let mut value = self.next_float();
            if include_one && self.next_bool() {
                value += 1.0;
            }
            if value > 1.0 {
                continue;
            }
            if value == 0.0 && !include_zero {
                continue;
            }
            return value;
        }
    }

    /// Uniform f64 in `[0.0, 1.0)` with a full 53-bit mantissa, built
    /// from two consecutive words.
    pub fn next_double(&self) -> f64 {
        let high = (self.next_bits(26) as u64) << 27;
        let low = self.next_bits(27) as u64;
        (high + low) as f64 * DOUBLE_UNIT
    }

    /// Uniform f64 with configurable boundary inclusion; see
    /// [`Pcg::next_float_with`].
    pub fn next_double_with(&self, include_zero: bool, include_one: bool) -> f64 {
        loop {
            let mut value = self.next_double();
            if include_one && self.next_bool() {
                value += 1.0;
            }
            if value > 1.0 {
                continue;
            }
            if value == 0.0 && !include_zero {
                continue;
            }
            return value;
        }
    }

    /// Standard Gaussian variate via the Marsaglia polar method.
    ///
    /// Each accepted polar sample yields two variates; the second is
    /// cached in the generator's one-slot spare and served by the next
    /// call. The slot is not a concurrent handoff channel: under racing
    /// callers a spare may be dropped or served twice, which is an
    /// accepted relaxation of this method.
    pub fn next_gaussian(&self) -> f64 {
        let spare = self.spare_bits();
        if !Self::spare_is_empty(spare) {
            return f64::from_bits(spare);
        }

        loop {
            let v1 = 2.0 * self.next_double() - 1.0;
            let v2 = 2.0 * self.next_double() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                let scale = (-2.0 * s.ln() / s).sqrt();
                self.store_spare(v2 * scale);
                return v1 * scale;
            }
        }
    }

    /// Fill `out` with pseudorandom bytes, four per word, lowest byte
    /// first within each word.
    pub fn next_bytes(&self, out: &mut [u8]) {
        let mut i = 0;
        while i < out.len() {
            let mut word = self.next_int();
            let take = (out.len() - i).min(4);
            for _ in 0..take {
                out[i] = word as u8;
                word >>= 8;
                i += 1;
            }
        }
    }
}
