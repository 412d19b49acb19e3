pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod rank;
pub mod report;
pub mod scanner;

pub use error::{Result, XenonError};
pub use rank::Rank;

pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
