use std::fmt;

use crate::rank::Rank;

/// Where a threshold was breached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationLevel {
    Block {
        module: String,
        name: String,
        line: u32,
    },
    Module {
        module: String,
    },
    Average,
}

impl ViolationLevel {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Block { .. } => "block",
            Self::Module { .. } => "module",
            Self::Average => "average",
        }
    }

    #[must_use]
    pub fn module(&self) -> Option<&str> {
        match self {
            Self::Block { module, .. } | Self::Module { module } => Some(module),
            Self::Average => None,
        }
    }
}

/// A single breach of a configured threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub level: ViolationLevel,
    pub rank: Rank,
}

impl Violation {
    #[must_use]
    pub fn block(module: &str, name: &str, line: u32, rank: Rank) -> Self {
        Self {
            level: ViolationLevel::Block {
                module: module.to_string(),
                name: name.to_string(),
                line,
            },
            rank,
        }
    }

    #[must_use]
    pub fn module(module: &str, rank: Rank) -> Self {
        Self {
            level: ViolationLevel::Module {
                module: module.to_string(),
            },
            rank,
        }
    }

    #[must_use]
    pub const fn average(rank: Rank) -> Self {
        Self {
            level: ViolationLevel::Average,
            rank,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.level {
            ViolationLevel::Block { module, name, line } => write!(
                f,
                "block \"{module}:{line} {name}\" has a rank of {}",
                self.rank
            ),
            ViolationLevel::Module { module } => {
                write!(f, "module \"{module}\" has a rank of {}", self.rank)
            }
            ViolationLevel::Average => write!(f, "average complexity is ranked {}", self.rank),
        }
    }
}
