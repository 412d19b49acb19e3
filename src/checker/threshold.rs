use std::str::FromStr;

use crate::error::{Result, XenonError};
use crate::rank::Rank;

/// A rank letter as the user wrote it, with where it was written: a flag
/// such as `--max-absolute`, or a config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankSetting<'a> {
    pub value: &'a str,
    pub origin: &'a str,
}

impl<'a> RankSetting<'a> {
    #[must_use]
    pub const fn new(value: &'a str, origin: &'a str) -> Self {
        Self { value, origin }
    }
}

/// Maximum acceptable rank at each of the three check levels.
///
/// An unset level is never checked: its predicate answers `false` for every
/// rank, including `F`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdPolicy {
    pub absolute: Option<Rank>,
    pub modules: Option<Rank>,
    pub average: Option<Rank>,
}

impl ThresholdPolicy {
    #[must_use]
    pub const fn new(absolute: Option<Rank>, modules: Option<Rank>, average: Option<Rank>) -> Self {
        Self {
            absolute,
            modules,
            average,
        }
    }

    /// Build a policy from raw rank letters, validating all of them up front.
    ///
    /// # Errors
    /// Returns [`XenonError::InvalidRank`], naming the setting's origin, for
    /// the first value that is not a single letter `A`-`F`.
    pub fn parse(
        absolute: Option<RankSetting<'_>>,
        modules: Option<RankSetting<'_>>,
        average: Option<RankSetting<'_>>,
    ) -> Result<Self> {
        Ok(Self {
            absolute: absolute.map(parse_setting).transpose()?,
            modules: modules.map(parse_setting).transpose()?,
            average: average.map(parse_setting).transpose()?,
        })
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.absolute.is_none() && self.modules.is_none() && self.average.is_none()
    }

    #[must_use]
    pub fn violates_absolute(&self, rank: Rank) -> bool {
        exceeds(rank, self.absolute)
    }

    #[must_use]
    pub fn violates_module(&self, rank: Rank) -> bool {
        exceeds(rank, self.modules)
    }

    #[must_use]
    pub fn violates_average(&self, rank: Rank) -> bool {
        exceeds(rank, self.average)
    }
}

fn exceeds(rank: Rank, limit: Option<Rank>) -> bool {
    limit.is_some_and(|limit| rank.is_worse_than(limit))
}

fn parse_setting(setting: RankSetting<'_>) -> Result<Rank> {
    Rank::from_str(setting.value).map_err(|_| XenonError::InvalidRank {
        option: setting.origin.to_string(),
        value: setting.value.to_string(),
    })
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
