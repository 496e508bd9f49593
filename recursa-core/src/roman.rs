//! Roman numeral encoding and decoding.
//!
//! Encoding is greedy over [`ROMAN_NUMERALS`], which lists every symbol and
//! subtractive pair in descending order of value. Only `0..=3999` can be
//! encoded; zero encodes to the empty string.

use crate::error::{RecursaError, Result};
use crate::strategy::Strategy;

/// Largest value a classical Roman numeral can express.
pub const MAX_ROMAN: i64 = 3999;

/// Symbols and their values, largest first.
pub const ROMAN_NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn check_range(i: i64) -> Result<()> {
    if i < 0 {
        tracing::debug!("Refusing to encode {} as a Roman numeral", i);
        return Err(RecursaError::RomanTooSmall { value: i });
    }
    if i > MAX_ROMAN {
        tracing::debug!("Refusing to encode {} as a Roman numeral", i);
        return Err(RecursaError::RomanTooLarge { value: i });
    }
    Ok(())
}

/// Encode `i` by walking the table once, emitting each symbol as many times
/// as it fits.
pub fn to_roman_iterative(mut i: i64) -> Result<String> {
    check_range(i)?;

    let mut numeral = String::new();
    for (value, symbol) in ROMAN_NUMERALS {
        while i >= value {
            numeral.push_str(symbol);
            i -= value;
        }
    }
    Ok(numeral)
}

/// Encode `i` as the largest fitting symbol followed by the encoding of
/// whatever remains.
pub fn to_roman_recursive(i: i64) -> Result<String> {
    check_range(i)?;
    Ok(encode_remainder(i))
}

fn encode_remainder(i: i64) -> String {
    ROMAN_NUMERALS
        .iter()
        .find(|(value, _)| *value <= i)
        .map(|(value, symbol)| format!("{symbol}{}", encode_remainder(i - value)))
        .unwrap_or_default()
}

/// Encode `i` using the requested variant.
pub fn to_roman(i: i64, strategy: Strategy) -> Result<String> {
    match strategy {
        Strategy::Iterative => to_roman_iterative(i),
        Strategy::Recursive => to_roman_recursive(i),
    }
}

fn symbol_value(c: char) -> Option<i64> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Decode a numeral under the usual subtractive rule: a symbol worth less
/// than its right neighbour is subtracted, every other symbol is added.
///
/// Lowercase letters are accepted. Non-canonical spellings such as `IIII`
/// still decode (to 4); the empty string decodes to 0.
pub fn from_roman(numeral: &str) -> Result<i64> {
    let values = numeral
        .chars()
        .enumerate()
        .map(|(position, c)| {
            symbol_value(c).ok_or_else(|| RecursaError::InvalidNumeral {
                numeral: numeral.to_string(),
                position,
            })
        })
        .collect::<Result<Vec<i64>>>()?;

    let total = values
        .iter()
        .enumerate()
        .map(|(idx, &value)| match values.get(idx + 1) {
            Some(&next) if next > value => -value,
            _ => value,
        })
        .sum::<i64>();
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::strategy::Strategy;

    #[test]
    fn test_known_numerals() {
        let cases = [
            (1, "I"),
            (4, "IV"),
            (9, "IX"),
            (14, "XIV"),
            (40, "XL"),
            (90, "XC"),
            (400, "CD"),
            (1994, "MCMXCIV"),
            (2024, "MMXXIV"),
            (3999, "MMMCMXCIX"),
        ];
        for (value, expected) in cases {
            assert_eq!(to_roman_iterative(value).unwrap(), expected);
            assert_eq!(to_roman_recursive(value).unwrap(), expected);
        }
    }

    #[test]
    fn test_zero_is_empty() {
        for strategy in Strategy::ALL {
            assert_eq!(to_roman(0, strategy).unwrap(), "");
        }
    }

    #[test]
    fn test_out_of_range() {
        for strategy in Strategy::ALL {
            assert_eq!(
                to_roman(-1, strategy),
                Err(RecursaError::RomanTooSmall { value: -1 })
            );
            assert_eq!(
                to_roman(4000, strategy),
                Err(RecursaError::RomanTooLarge { value: 4000 })
            );
            assert!(to_roman(i64::MIN, strategy).unwrap_err().is_out_of_range());
            assert!(to_roman(i64::MAX, strategy).unwrap_err().is_out_of_range());
        }
    }

    #[test]
    fn test_every_value_agrees_and_decodes() {
        for i in 0..=MAX_ROMAN {
            let iterative = to_roman_iterative(i).unwrap();
            let recursive = to_roman_recursive(i).unwrap();
            assert_eq!(iterative, recursive, "variants disagree on {i}");
            assert_eq!(from_roman(&iterative).unwrap(), i);
        }
    }

    #[test]
    fn test_from_roman_lenient_forms() {
        assert_eq!(from_roman("").unwrap(), 0);
        assert_eq!(from_roman("IIII").unwrap(), 4);
        assert_eq!(from_roman("mcmxciv").unwrap(), 1994);
    }

    #[test]
    fn test_from_roman_rejects_unknown_symbols() {
        let err = from_roman("XIZ").unwrap_err();
        assert_eq!(
            err,
            RecursaError::InvalidNumeral {
                numeral: "XIZ".to_string(),
                position: 2,
            }
        );
    }

    proptest! {
        #[test]
        fn numerals_use_only_roman_symbols(i in 0i64..=MAX_ROMAN) {
            let numeral = to_roman_recursive(i).unwrap();
            prop_assert!(numeral.chars().all(|c| "MDCLXVI".contains(c)));
        }
    }
}
