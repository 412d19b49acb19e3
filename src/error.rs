use std::path::PathBuf;

use thiserror::Error;

use crate::extract::ExtractError;

#[derive(Error, Debug)]
pub enum XenonError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("invalid rank {value:?} for {option}: expected a single letter between A and F")]
    InvalidRank { option: String, value: String },

    #[error("Failed to read file: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl XenonError {
    /// Short category name, used in verbose diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidRank { .. } | Self::InvalidPattern { .. } => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::Json(_) => "JSON",
            Self::Extract(_) => "Extract",
        }
    }
}

pub type Result<T> = std::result::Result<T, XenonError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
