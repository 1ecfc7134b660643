//! CLI-specific UI output

pub mod output;

pub use output::{Output, OutputMode};
