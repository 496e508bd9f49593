//! The n-th term of a Fibonacci-style sequence.
//!
//! Positions are 1-indexed: position 1 holds the first seed and position 2
//! the second. Any position below 1 yields `0`. Sums wrap on overflow, which
//! first happens past position 92 with the default seeds.

use crate::strategy::Strategy;

/// Seeds of the classic sequence `1, 1, 2, 3, 5, ...`
pub const DEFAULT_SEEDS: (i64, i64) = (1, 1);

/// The n-th Fibonacci number, computed with a loop.
pub fn fibonacci_iterative(n: i64) -> i64 {
    fibonacci_iterative_with_seeds(n, DEFAULT_SEEDS.0, DEFAULT_SEEDS.1)
}

/// The n-th term of the sequence starting `seed1, seed2`, computed with a loop.
pub fn fibonacci_iterative_with_seeds(mut n: i64, mut seed1: i64, mut seed2: i64) -> i64 {
    if n < 1 {
        return 0;
    }
    if n == 1 {
        return seed1;
    }

    while n > 2 {
        let next = seed1.wrapping_add(seed2);
        seed1 = seed2;
        seed2 = next;
        n -= 1;
    }
    seed2
}

/// The n-th Fibonacci number, computed by recursion.
pub fn fibonacci_recursive(n: i64) -> i64 {
    fibonacci_recursive_with_seeds(n, DEFAULT_SEEDS.0, DEFAULT_SEEDS.1)
}

/// The n-th term of the sequence starting `seed1, seed2`, computed by recursion.
///
/// Each call shifts the seed window one position forward, so the depth is `n`.
pub fn fibonacci_recursive_with_seeds(n: i64, seed1: i64, seed2: i64) -> i64 {
    match n {
        n if n < 1 => 0,
        1 => seed1,
        2 => seed2,
        _ => fibonacci_recursive_with_seeds(n - 1, seed2, seed1.wrapping_add(seed2)),
    }
}

/// The n-th Fibonacci number using the requested variant.
pub fn fibonacci_by(n: i64, strategy: Strategy) -> i64 {
    fibonacci_with_seeds_by(n, DEFAULT_SEEDS.0, DEFAULT_SEEDS.1, strategy)
}

/// The n-th term from custom seeds using the requested variant.
pub fn fibonacci_with_seeds_by(n: i64, seed1: i64, seed2: i64, strategy: Strategy) -> i64 {
    match strategy {
        Strategy::Iterative => fibonacci_iterative_with_seeds(n, seed1, seed2),
        Strategy::Recursive => fibonacci_recursive_with_seeds(n, seed1, seed2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::strategy::Strategy;

    #[test]
    fn test_default_sequence() {
        for strategy in Strategy::ALL {
            assert_eq!(fibonacci_by(1, strategy), 1);
            assert_eq!(fibonacci_by(2, strategy), 1);
            assert_eq!(fibonacci_by(3, strategy), 2);
            assert_eq!(fibonacci_by(7, strategy), 13);
            assert_eq!(fibonacci_by(50, strategy), 12_586_269_025);
            assert_eq!(fibonacci_by(92, strategy), 7_540_113_804_746_346_429);
        }
    }

    #[test]
    fn test_positions_below_one_are_zero() {
        for n in [0, -1, -50, i64::MIN] {
            assert_eq!(fibonacci_iterative(n), 0);
            assert_eq!(fibonacci_recursive(n), 0);
        }
    }

    #[test]
    fn test_custom_seeds() {
        // Lucas numbers: 2, 1, 3, 4, 7, 11, 18
        assert_eq!(fibonacci_iterative_with_seeds(1, 2, 1), 2);
        assert_eq!(fibonacci_iterative_with_seeds(2, 2, 1), 1);
        assert_eq!(fibonacci_iterative_with_seeds(7, 2, 1), 18);
        assert_eq!(fibonacci_recursive_with_seeds(7, 2, 1), 18);
        assert_eq!(
            fibonacci_with_seeds_by(5, -3, 4, Strategy::Recursive),
            fibonacci_with_seeds_by(5, -3, 4, Strategy::Iterative)
        );
    }

    #[test]
    fn test_overflow_wraps_identically() {
        assert_eq!(fibonacci_iterative(100), fibonacci_recursive(100));
    }

    proptest! {
        #[test]
        fn variants_agree(n in -10i64..=92) {
            prop_assert_eq!(fibonacci_iterative(n), fibonacci_recursive(n));
        }

        #[test]
        fn each_term_is_sum_of_previous_two(n in 3i64..=92) {
            prop_assert_eq!(
                fibonacci_iterative(n),
                fibonacci_iterative(n - 1) + fibonacci_iterative(n - 2)
            );
        }
    }
}
