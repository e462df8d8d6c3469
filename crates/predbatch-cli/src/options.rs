// crates/predbatch-cli/src/options.rs

use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Where the managed job places input files when nothing else is configured.
pub const DEFAULT_INPUT_DIR: &str = "/opt/ml/processing/input";
/// Where the downstream consumer expects result files.
pub const DEFAULT_OUTPUT_DIR: &str = "/opt/ml/processing/output";
/// Predictor executable shipped alongside the job.
pub const DEFAULT_PREDICTOR: &str = "./a.out";

const DEFAULT_CONFIG_FILE: &str = "predbatch.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration that can be loaded from files
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub input_dir: Option<String>,
    pub output_dir: Option<String>,
    pub predictor: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "predbatch",
    version,
    about = "Run a predictor executable over a directory of CSV feature files"
)]
pub struct Args {
    /// Directory of headerless CSV feature files
    #[arg(long = "input-dir", help = "Directory containing the input CSV files")]
    pub input_dir: Option<String>,

    /// Directory for per-input result CSVs
    #[arg(long, help = "Directory the result files are written to")]
    pub output_dir: Option<String>,

    /// Predictor executable invoked once per input file
    #[arg(long, help = "Path to the predictor executable")]
    pub predictor: Option<String>,

    /// Config file path
    #[arg(long, help = "Path to config file")]
    pub config: Option<PathBuf>,
}

/// Fully resolved settings: CLI args take precedence over the config file,
/// the config file over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Options {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub predictor: PathBuf,
}

impl Options {
    pub fn from_args_and_config(args: Args) -> Result<Self, ConfigError> {
        // An explicitly named config file must load; the default location
        // is allowed to be absent.
        let file_config = if let Some(config_path) = args.config.as_ref() {
            Some(FileConfig::from_file(config_path)?)
        } else {
            FileConfig::from_file(&PathBuf::from(DEFAULT_CONFIG_FILE)).ok()
        };

        Ok(Self {
            input_dir: PathBuf::from(
                args.input_dir
                    .or(file_config.as_ref().and_then(|c| c.input_dir.clone()))
                    .unwrap_or_else(|| DEFAULT_INPUT_DIR.into()),
            ),
            output_dir: PathBuf::from(
                args.output_dir
                    .or(file_config.as_ref().and_then(|c| c.output_dir.clone()))
                    .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into()),
            ),
            predictor: PathBuf::from(
                args.predictor
                    .or(file_config.as_ref().and_then(|c| c.predictor.clone()))
                    .unwrap_or_else(|| DEFAULT_PREDICTOR.into()),
            ),
        })
    }
}
