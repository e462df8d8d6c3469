// crates/predbatch-cli/src/lib.rs
#![feature(error_generic_member_access)]

pub mod options;
pub mod pipeline;

pub use options::{Args, ConfigError, FileConfig, Options};
pub use pipeline::{BatchReport, RunError, run_batch, run_batch_with};
