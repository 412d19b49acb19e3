use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Letter grade for a cyclomatic complexity score, best (`A`) to worst (`F`).
///
/// The derived ordering is the grading order, so `Rank::A < Rank::F` and
/// "worse than" is plain `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Inclusive upper bound of each rank below `F`.
const UPPER_BOUNDS: [(f64, Rank); 5] = [
    (5.0, Rank::A),
    (10.0, Rank::B),
    (20.0, Rank::C),
    (30.0, Rank::D),
    (40.0, Rank::E),
];

impl Rank {
    /// Every rank, best first.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Classify a complexity score.
    ///
    /// Integer scores follow the usual table (1-5 A, 6-10 B, 11-20 C,
    /// 21-30 D, 31-40 E, 41+ F). Fractional averages land in the first
    /// rank whose upper bound they do not exceed, so 5.5 is a `B`.
    /// Zero (and anything below it) is an `A`.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        UPPER_BOUNDS
            .iter()
            .find(|(bound, _)| score <= *bound)
            .map_or(Self::F, |&(_, rank)| rank)
    }

    /// `true` if `self` is strictly worse than `other`.
    #[must_use]
    pub fn is_worse_than(self, other: Self) -> bool {
        self > other
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRankError(pub String);

impl fmt::Display for ParseRankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rank {:?}: expected one of A, B, C, D, E, F", self.0)
    }
}

impl std::error::Error for ParseRankError {}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let rank = match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let c = c.to_ascii_uppercase();
                Self::ALL.into_iter().find(|rank| rank.letter() == c)
            }
            _ => None,
        };
        rank.ok_or_else(|| ParseRankError(s.to_string()))
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.letter())
    }
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
