// crates/predbatch-cli/src/pipeline/mod.rs
use crate::options::Options;
use crate::{try_discover, try_mkdir, try_persist};
use predbatch_core::BatchError;
use predbatch_core::flatten;
use predbatch_core::predictor::{Predictor, PredictorConfig, SubprocessPredictor};
use std::backtrace::Backtrace;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[macro_use]
mod error_macros;


/// Failures that abort the whole run. Per-file failures are
/// `predbatch_core::BatchError` and never reach this tier.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Failed to list input directory {path:?}: {source} (at {backtrace})")]
    DiscoverError {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[error("Failed to create directory {path:?}: {source} (at {backtrace})")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[error("Failed to write results to {path:?}: {source} (at {backtrace})")]
    PersistError {
        path: PathBuf,
        source: BatchError,
        backtrace: Backtrace,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// Read and flatten one input file, then run the predictor on it.
/// Everything in here is recoverable: a failure skips this file only.
pub fn process_input(input: &Path, predictor: &dyn Predictor) -> Result<Vec<String>, BatchError> {
    let features = flatten::flatten_file(input)?;
    predictor.predict(&features)
}

pub fn run_batch(opts: &Options) -> Result<BatchReport, RunError> {
    let predictor = SubprocessPredictor::new(PredictorConfig {
        exe: opts.predictor.clone(),
    });
    log::debug!("predictor executable: {}", predictor.exe().display());
    run_batch_with(opts, &predictor)
}

/// Drive the batch: discover inputs, process each in sorted order, persist
/// results under the input's discovery index.
///
/// Persistence failures are fatal: a broken output directory would fail
/// every subsequent write, so the run aborts on the first one.
pub fn run_batch_with(opts: &Options, predictor: &dyn Predictor) -> Result<BatchReport, RunError> {
    try_mkdir!(&opts.output_dir)?;
    let inputs = try_discover!(&opts.input_dir)?;

    let mut report = BatchReport::default();
    for (index, input) in inputs.iter().enumerate() {
        let tokens = match process_input(input, predictor) {
            Ok(tokens) => tokens,
            Err(e) => {
                log::error!("skipping {}: {}", input.display(), e);
                report.failed += 1;
                continue;
            }
        };

        let written = try_persist!(&opts.output_dir, index, &tokens)?;
        log::info!("saving predictions to {}", written.display());
        report.succeeded += 1;
    }

    if report.failed > 0 {
        log::warn!(
            "{} of {} input file(s) failed",
            report.failed,
            report.failed + report.succeeded
        );
    }
    Ok(report)
}
