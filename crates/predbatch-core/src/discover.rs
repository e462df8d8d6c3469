// src/discover.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// List the regular files in `dir`, sorted lexicographically by path.
///
/// The sort is what makes the index-to-file mapping reproducible: the i-th
/// entry of the returned sequence owns output name `<i>_out.csv`. Directory
/// entries that are not regular files are skipped.
pub fn discover_inputs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            inputs.push(entry.path());
        }
    }
    inputs.sort();
    Ok(inputs)
}
