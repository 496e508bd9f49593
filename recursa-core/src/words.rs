//! Spelling integers out as English words.
//!
//! Numbers are read in groups of three digits, each group followed by its
//! scale word (`thousand`, `million`, ...). Words are joined by a configurable
//! separator, `_` by default, so `1001001` spells as
//! `one_million_one_thousand_one`.
//!
//! The recursive encoder threads a scale index through its calls. The scale
//! word is attached by the branch that emits the last word of a group: the
//! `SMALL_NUMBERS` lookup appends it directly, while the tens and hundreds
//! branches always recurse on their remainder (even when it is zero) so the
//! lookup can append it. A zero group is never visited, so it contributes
//! neither words nor a scale word.
//!
//! ```
//! use recursa_core::words::{to_words, to_words_with};
//! use recursa_core::WordsConfig;
//!
//! assert_eq!(to_words(-42), "negative_forty_two");
//! assert_eq!(
//!     to_words_with(20_000, &WordsConfig::spaced()),
//!     "twenty thousand"
//! );
//! ```

use crate::config::WordsConfig;
use crate::strategy::Strategy;

/// Words for 0 through 19. Index 0 is empty: a zero inside a larger number
/// is not spoken.
#[rustfmt::skip]
pub const SMALL_NUMBERS: [&str; 20] = [
    "", "one", "two", "three", "four",
    "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen",
    "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

/// Words for the multiples of ten, indexed by the tens digit.
#[rustfmt::skip]
pub const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty",
    "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words, indexed by the power of a thousand.
pub const SCALES: [&str; 7] = [
    "", "thousand", "million", "billion", "trillion", "quadrillion", "quintillion",
];

/// Spell `i` with the default `_` separator.
pub fn to_words(i: i64) -> String {
    to_words_with(i, &WordsConfig::default())
}

/// Spell `i` recursively, joining words with the configured separator.
///
/// The separator must be non-empty (see [`WordsConfig::validate`]); an empty
/// one runs words together and trips a debug assertion.
pub fn to_words_with(i: i64, config: &WordsConfig) -> String {
    debug_assert!(!config.separator.is_empty(), "separator must not be empty");
    let sep = config.separator.as_str();
    match i {
        0 => "zero".to_string(),
        i if i < 0 => format!("negative{sep}{}", encode_group(i.unsigned_abs(), 0, sep)),
        i => encode_group(i.unsigned_abs(), 0, sep),
    }
}

fn scale_suffix(scale: usize, sep: &str) -> String {
    if scale == 0 {
        String::new()
    } else {
        format!("{sep}{}", SCALES[scale])
    }
}

fn encode_group(n: u64, scale: usize, sep: &str) -> String {
    if n < 20 {
        return format!("{}{}", SMALL_NUMBERS[n as usize], scale_suffix(scale, sep));
    }
    if n < 100 {
        let units = n % 10;
        let joiner = if units != 0 { sep } else { "" };
        return format!(
            "{}{joiner}{}",
            TENS[(n / 10) as usize],
            encode_group(units, scale, sep)
        );
    }
    if n < 1000 {
        let rest = n % 100;
        let joiner = if rest != 0 { sep } else { "" };
        return format!(
            "{}{sep}hundred{joiner}{}",
            SMALL_NUMBERS[(n / 100) as usize],
            encode_group(rest, scale, sep)
        );
    }

    let high = encode_group(n / 1000, scale + 1, sep);
    match n % 1000 {
        0 => high,
        low => format!("{high}{sep}{}", encode_group(low, scale, sep)),
    }
}

/// Spell `i` with the default separator, walking digit groups in a loop.
pub fn to_words_iterative(i: i64) -> String {
    to_words_iterative_with(i, &WordsConfig::default())
}

/// Spell `i` by collecting the words of each non-zero three-digit group,
/// least significant first, then joining them in reading order.
///
/// Same separator requirement as [`to_words_with`].
pub fn to_words_iterative_with(i: i64, config: &WordsConfig) -> String {
    debug_assert!(!config.separator.is_empty(), "separator must not be empty");
    if i == 0 {
        return "zero".to_string();
    }

    let mut groups: Vec<Vec<&str>> = Vec::new();
    let mut n = i.unsigned_abs();
    let mut scale = 0;
    while n > 0 {
        let group = (n % 1000) as usize;
        if group != 0 {
            let mut words = Vec::new();
            if group >= 100 {
                words.push(SMALL_NUMBERS[group / 100]);
                words.push("hundred");
            }
            let rest = group % 100;
            if rest >= 20 {
                words.push(TENS[rest / 10]);
                if rest % 10 != 0 {
                    words.push(SMALL_NUMBERS[rest % 10]);
                }
            } else if rest > 0 {
                words.push(SMALL_NUMBERS[rest]);
            }
            if scale > 0 {
                words.push(SCALES[scale]);
            }
            groups.push(words);
        }
        n /= 1000;
        scale += 1;
    }

    let mut words: Vec<&str> = Vec::new();
    if i < 0 {
        words.push("negative");
    }
    words.extend(groups.into_iter().rev().flatten());
    words.join(config.separator.as_str())
}

/// Spell `i` using the requested variant.
pub fn to_words_by(i: i64, config: &WordsConfig, strategy: Strategy) -> String {
    match strategy {
        Strategy::Iterative => to_words_iterative_with(i, config),
        Strategy::Recursive => to_words_with(i, config),
    }
}

/// The fixed battery of values the demonstration prints: `-1..=1`, then
/// `a * b + c` for every power of ten `a` from 10 to 10^8, leading digit
/// `b` in `1..=2` and trailing digit `c` in `0..=1`, then two values that
/// exercise scale-word placement.
pub fn demonstration_inputs() -> Vec<i64> {
    let mut inputs: Vec<i64> = (-1..=1).collect();
    let mut power = 10;
    while power <= 100_000_000 {
        for leading in 1..=2 {
            for trailing in 0..=1 {
                inputs.push(power * leading + trailing);
            }
        }
        power *= 10;
    }
    inputs.push(1_001_000);
    inputs.push(1_001_001);
    inputs
}
