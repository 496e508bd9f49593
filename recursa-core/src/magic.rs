//! The "magic number" word game.
//!
//! Spell a number out, count the characters of the spelling, and repeat with
//! that count. The search stops at the number whose spelling is identical to
//! the spelling of its own length. In English that number is 4 ("four" has four
//! letters), and every starting point reaches it within a few steps.
//!
//! The stopping test compares spellings, not numbers: `to_words(i)` against
//! `to_words(len(to_words(i)))`.
//!
//! ```
//! use recursa_core::magic::magic_number;
//!
//! let trace = magic_number(7).unwrap();
//! assert_eq!(trace.magic_number, 4);
//! assert_eq!(trace.to_string(), "7 is 5\n5 is 4\n4 is the magic number!\n");
//! ```

use crate::config::MagicConfig;
use crate::error::{RecursaError, Result};
use crate::words::to_words_with;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// One hop of the search: a value, its spelling, and the spelling's length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagicStep {
    pub value: i64,
    pub spelling: String,
    pub length: usize,
}

/// Every hop from the starting value up to, but not including, the magic number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagicTrace {
    pub start: i64,
    pub steps: Vec<MagicStep>,
    pub magic_number: i64,
}

impl fmt::Display for MagicTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{} is {}", step.value, step.length)?;
        }
        writeln!(f, "{} is the magic number!", self.magic_number)
    }
}

/// Run the search from `i` with the default configuration.
pub fn magic_number(i: i64) -> Result<MagicTrace> {
    magic_number_with(i, &MagicConfig::default())
}

/// Run the search from `i`, spelling with `config.words` and giving up after
/// `config.max_steps` hops without reaching a fixed point.
pub fn magic_number_with(i: i64, config: &MagicConfig) -> Result<MagicTrace> {
    config.validate()?;

    let mut steps = Vec::new();
    let magic_number = search(i, config, &mut steps).inspect_err(|_| {
        warn!(
            "Gave up looking for a magic number from {} after {} steps",
            i, config.max_steps
        );
    })?;
    debug!("Reached magic number {} from {}", magic_number, i);

    Ok(MagicTrace {
        start: i,
        steps,
        magic_number,
    })
}

fn search(i: i64, config: &MagicConfig, steps: &mut Vec<MagicStep>) -> Result<i64> {
    let current = to_words_with(i, &config.words);
    let length = current.chars().count();
    let next = to_words_with(length as i64, &config.words);

    if current == next {
        return Ok(i);
    }
    if steps.len() >= config.max_steps {
        return Err(RecursaError::NoFixedPoint {
            start: steps.first().map_or(i, |step| step.value),
            steps: steps.len(),
        });
    }

    debug!("{} ({}) is {}", i, current, length);
    steps.push(MagicStep {
        value: i,
        spelling: current,
        length,
    });
    search(length as i64, config, steps)
}
