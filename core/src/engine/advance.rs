//! Jump-ahead and distance reconstruction
//!
//! The state transition is the affine map `f(x) = MULT64*x + inc`.
//! Composing `f` with itself `n` times naively costs O(n); instead both
//! algorithms here walk the binary representation of `n`, squaring the
//! affine map at each position, for O(64) work total.
//!
//! Rewinding needs no separate code path: the full-period map is a
//! bijection on the 64-bit state space, so "back by k" is exactly
//! "forward by 2^64 - k" and a negative step count is simply reinterpreted
//! as its unsigned two's-complement representative.

use super::MULT64;

/// Advance `state` by `delta` steps of the map `x -> MULT64*x + inc`.
///
/// Binary exponentiation over affine maps: `(acc_mult, acc_plus)` starts
/// at the identity and picks up the current doubling pair
/// `(cur_mult, cur_plus)` for every set bit of `delta`.
pub(crate) fn advance_state(state: u64, delta: u64, inc: u64) -> u64 {
    let mut acc_mult: u64 = 1;
    let mut acc_plus: u64 = 0;
    let mut cur_mult = MULT64;
    let mut cur_plus = inc;
    let mut delta = delta;

    while delta > 0 {
        if delta & 1 == 1 {
            acc_mult = acc_mult.wrapping_mul(cur_mult);
            acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
        }
        // Square the map: f^2(x) = m^2*x + (m + 1)*p
        cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
        delta >>= 1;
    }

    acc_mult.wrapping_mul(state).wrapping_add(acc_plus)
}

/// Number of forward steps taking `from` to `to` under the same stream.
///
/// Replays the doubling recurrence of [`advance_state`] in reverse: at bit
/// position i the two states either already agree on that bit or `from`
/// is pushed forward by 2^i steps, which fixes the bit without disturbing
/// lower ones. Converges in at most 64 iterations for any two states on
/// the same stream.
pub(crate) fn forward_distance(from: u64, to: u64, inc: u64) -> u64 {
    let mut cur_state = from;
    let mut cur_mult = MULT64;
    let mut cur_plus = inc;
    let mut bit: u64 = 1;
    let mut distance: u64 = 0;

    while cur_state != to {
        if (cur_state ^ to) & bit != 0 {
            cur_state = cur_state.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            distance |= bit;
        }
        cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
        bit <<= 1;
    }

    distance
}
