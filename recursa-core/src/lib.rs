//! # recursa-core
//!
//! Classic recursion exercises over primitive integers, each written twice:
//! once as a loop and once as a recursive function. The two forms of every
//! algorithm always agree.
//!
//! ## Algorithms
//!
//! - [`gcd`](mod@gcd): greatest common divisor by repeated subtraction
//! - [`fibonacci`]: n-th term of a sequence from two seeds
//! - [`roman`]: integers to Roman numerals (and back)
//! - [`words`]: integers spelled out in English
//! - [`magic`]: the "four is the magic number" word game, built on [`words`]
//!
//! ## Quick Start
//!
//! ```
//! use recursa_core::{Strategy, fibonacci_by, gcd, to_roman, to_words};
//!
//! assert_eq!(gcd(48, -18, Strategy::Recursive), 6);
//! assert_eq!(fibonacci_by(7, Strategy::Iterative), 13);
//! assert_eq!(to_roman(1994, Strategy::Recursive).unwrap(), "MCMXCIV");
//! assert_eq!(to_words(1_001_001), "one_million_one_thousand_one");
//! ```
//!
//! ## Error Handling
//!
//! Only the Roman numeral routines and the magic number search can fail. They
//! return [`Result<T>`] with the crate's [`RecursaError`]. Everything else is
//! total: Fibonacci positions below 1 yield `0`, and GCD and words accept any
//! `i64`.

pub mod config;
pub mod error;
pub mod fibonacci;
pub mod gcd;
pub mod magic;
pub mod roman;
pub mod strategy;
pub mod words;

// Re-export main types for easy access
pub use config::{MagicConfig, WordsConfig};
pub use error::{RecursaError, Result};
pub use fibonacci::{
    DEFAULT_SEEDS, fibonacci_by, fibonacci_iterative, fibonacci_iterative_with_seeds,
    fibonacci_recursive, fibonacci_recursive_with_seeds, fibonacci_with_seeds_by,
};
pub use gcd::{gcd, gcd_iterative, gcd_recursive, subtraction_steps};
pub use magic::{MagicStep, MagicTrace, magic_number, magic_number_with};
pub use roman::{MAX_ROMAN, from_roman, to_roman, to_roman_iterative, to_roman_recursive};
pub use strategy::Strategy;
pub use words::{
    demonstration_inputs, to_words, to_words_by, to_words_iterative, to_words_iterative_with,
    to_words_with,
};
