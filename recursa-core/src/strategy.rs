//! Selecting between the iterative and recursive form of each algorithm.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variant of an algorithm to run.
///
/// Every algorithm in the crate ships in both forms and the two always agree,
/// so the choice only changes how the answer is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Loop over mutable locals
    Iterative,
    /// Self-calls on smaller arguments
    #[default]
    Recursive,
}

impl Strategy {
    /// Both strategies, iterative first.
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iterative" => Ok(Strategy::Iterative),
            "recursive" => Ok(Strategy::Recursive),
            _ => Err(format!("Invalid strategy: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("iterative".parse::<Strategy>(), Ok(Strategy::Iterative));
        assert_eq!("Recursive".parse::<Strategy>(), Ok(Strategy::Recursive));
        assert!("tail".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!(Strategy::default(), Strategy::Recursive);
    }
}
