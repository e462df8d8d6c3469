// src/lib.rs
//
// A single BatchError covers every per-file failure: CSV parsing, predictor
// invocation, and result writing all funnel into it.

pub mod discover;
pub mod flatten;
pub mod output;
pub mod predictor;

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: cell {value:?} is not numeric")]
    NonNumeric { row: usize, value: String },

    #[error("input contains no values")]
    EmptyInput,

    #[error("failed to start predictor {exe:?}: {source}")]
    Spawn { exe: PathBuf, source: io::Error },

    #[error("predictor {exe:?} failed with {status}: {stderr}")]
    PredictorFailed {
        exe: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("predictor output is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
