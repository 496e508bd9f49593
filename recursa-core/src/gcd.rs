//! Greatest common divisor by Euclid's subtraction algorithm.
//!
//! Both operands are reduced to their magnitudes first, so the sign of the
//! inputs never affects the answer. Magnitudes are taken as `u64`, which keeps
//! `i64::MIN` in range.

use crate::strategy::Strategy;

/// Greatest common divisor of `|a|` and `|b|`, computed with a loop.
///
/// Returns the other operand when one of them is zero, and `0` for `(0, 0)`.
pub fn gcd_iterative(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();

    while a != 0 && b != 0 {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }
    // at least one of these is zero
    a + b
}

/// Greatest common divisor of `|a|` and `|b|`, computed by recursion.
///
/// Each call strictly lowers the larger operand while both stay non-negative,
/// so the recursion ends. Depth grows with `max / min`; keep inputs small.
pub fn gcd_recursive(a: i64, b: i64) -> u64 {
    subtract_down(a.unsigned_abs(), b.unsigned_abs())
}

fn subtract_down(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return a + b;
    }
    if a > b {
        return subtract_down(a - b, b);
    }
    subtract_down(a, b - a)
}

/// Number of subtractions the algorithm performs on `(a, b)`, which is also
/// the call depth of [`gcd_recursive`]. Counted with division, so it is cheap
/// even when the depth is huge. Saturates at `u64::MAX`.
pub fn subtraction_steps(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    let mut steps: u64 = 0;

    while a != 0 && b != 0 {
        if a > b {
            steps = steps.saturating_add(a / b);
            a %= b;
        } else {
            steps = steps.saturating_add(b / a);
            b %= a;
        }
    }
    steps
}

/// Greatest common divisor using the requested variant.
pub fn gcd(a: i64, b: i64, strategy: Strategy) -> u64 {
    match strategy {
        Strategy::Iterative => gcd_iterative(a, b),
        Strategy::Recursive => gcd_recursive(a, b),
    }
}
