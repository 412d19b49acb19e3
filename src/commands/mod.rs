mod check;

pub use check::{AnalyzedModule, run_check, run_check_impl};
