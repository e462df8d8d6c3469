// src/predictor.rs

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::BatchError;

#[derive(Debug, Clone)]
pub struct PredictorConfig {
    pub exe: PathBuf,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            exe: PathBuf::from("./a.out"),
        }
    }
}

pub trait Predictor {
    /// Map one flattened feature string to an ordered sequence of result
    /// tokens.
    fn predict(&self, features: &str) -> Result<Vec<String>, BatchError>;
}

/// Runs the configured executable with the feature string as its sole
/// positional argument, synchronously, and splits its stdout on commas.
pub struct SubprocessPredictor {
    config: PredictorConfig,
}

impl SubprocessPredictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    pub fn exe(&self) -> &Path {
        &self.config.exe
    }
}

impl Predictor for SubprocessPredictor {
    fn predict(&self, features: &str) -> Result<Vec<String>, BatchError> {
        let output = Command::new(&self.config.exe)
            .arg(features)
            .output()
            .map_err(|e| BatchError::Spawn {
                exe: self.config.exe.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(BatchError::PredictorFailed {
                exe: self.config.exe.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        // A successful run may still emit diagnostics on stderr
        if !output.stderr.is_empty() {
            log::warn!(
                "predictor diagnostics: {}",
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(split_tokens(&stdout))
    }
}

/// Split raw predictor stdout into result tokens.
///
/// Trailing newlines are stripped before the split; the tokens themselves
/// are not trimmed or validated. Empty stdout yields zero tokens.
pub fn split_tokens(stdout: &str) -> Vec<String> {
    let trimmed = stdout.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_tokens() {
        assert_eq!(split_tokens("5,6,7"), ["5", "6", "7"]);
    }

    #[test]
    fn test_split_strips_trailing_newline_only() {
        assert_eq!(split_tokens("5,6,7\n"), ["5", "6", "7"]);
        // interior whitespace is preserved as-is
        assert_eq!(split_tokens("5, 6\n"), ["5", " 6"]);
    }

    #[test]
    fn test_split_empty_stdout_yields_no_tokens() {
        assert!(split_tokens("").is_empty());
        assert!(split_tokens("\n").is_empty());
    }

    #[test]
    fn test_missing_executable_is_a_spawn_error() {
        let predictor = SubprocessPredictor::new(PredictorConfig {
            exe: PathBuf::from("/nonexistent/predictor"),
        });
        match predictor.predict("1,2,3") {
            Err(BatchError::Spawn { exe, .. }) => {
                assert_eq!(exe, PathBuf::from("/nonexistent/predictor"));
            }
            other => panic!("expected Spawn error, got: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_echo_predictor_round_trips() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::TempDir::new()?;
        let exe = write_script(temp.path(), "echo.sh", "#!/bin/sh\nprintf '%s' \"$1\"\n")?;

        let predictor = SubprocessPredictor::new(PredictorConfig { exe });
        let tokens = predictor.predict("1,2,3")?;
        assert_eq!(tokens, ["1", "2", "3"]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_surfaces_status_and_stderr() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::TempDir::new()?;
        let exe = write_script(
            temp.path(),
            "fail.sh",
            "#!/bin/sh\necho 'model exploded' >&2\nexit 3\n",
        )?;

        let predictor = SubprocessPredictor::new(PredictorConfig { exe });
        match predictor.predict("1,2,3") {
            Err(BatchError::PredictorFailed { status, stderr, .. }) => {
                assert_eq!(status.code(), Some(3));
                assert!(stderr.contains("model exploded"));
                Ok(())
            }
            other => panic!("expected PredictorFailed, got: {:?}", other),
        }
    }

    #[cfg(unix)]
    fn write_script(
        dir: &Path,
        name: &str,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, content)?;
        let mut perms = std::fs::metadata(&path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms)?;
        Ok(path)
    }
}
