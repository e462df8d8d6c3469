// src/output.rs

use csv::WriterBuilder;
use std::path::{Path, PathBuf};

use crate::BatchError;

/// Output file name for the input at `index`: `<index>_out.csv`, no padding.
pub fn output_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("{}_out.csv", index))
}

/// Write one result CSV: one token per row, single column, no header.
///
/// An existing file at the same index is overwritten; results are disposable
/// per-run artifacts. Returns the path written.
pub fn write_results(dir: &Path, index: usize, tokens: &[String]) -> Result<PathBuf, BatchError> {
    let path = output_path(dir, index);
    let mut writer = WriterBuilder::new().from_path(&path)?;
    for token in tokens {
        writer.write_record([token.as_str()])?;
    }
    writer.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_one_token_per_row_no_header() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let tokens = vec!["5".to_string(), "6".to_string(), "7".to_string()];

        let path = write_results(temp.path(), 0, &tokens)?;
        assert_eq!(path, temp.path().join("0_out.csv"));
        assert_eq!(fs::read_to_string(path)?, "5\n6\n7\n");
        Ok(())
    }

    #[test]
    fn test_empty_tokens_write_an_empty_file() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let path = write_results(temp.path(), 4, &[])?;
        assert_eq!(fs::read_to_string(path)?, "");
        Ok(())
    }

    #[test]
    fn test_rerun_overwrites() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        write_results(temp.path(), 1, &["old".to_string()])?;
        let path = write_results(temp.path(), 1, &["new".to_string()])?;
        assert_eq!(fs::read_to_string(path)?, "new\n");
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-dir");
        assert!(write_results(&missing, 0, &["1".to_string()]).is_err());
    }
}
