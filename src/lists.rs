//! List-file handling: one whitespace-separated path token per entry,
//! input and output lists consumed in lockstep.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot read list file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("output list {path} has {outputs} entries but the input list has {inputs}")]
    OutputListTooShort {
        path: PathBuf,
        inputs: usize,
        outputs: usize,
    },
}

/// Read every path token from a list file.
pub fn read_list(path: &Path) -> Result<Vec<PathBuf>, ListError> {
    let text = std::fs::read_to_string(path).map_err(|source| ListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.split_whitespace().map(PathBuf::from).collect())
}

/// Pair the n-th input path with the n-th output path.
///
/// Surplus output entries are ignored; a short output list is fatal.
pub fn pair_lists(
    input_list: &Path,
    output_list: &Path,
) -> Result<Vec<(PathBuf, PathBuf)>, ListError> {
    let inputs = read_list(input_list)?;
    let outputs = read_list(output_list)?;
    if outputs.len() < inputs.len() {
        return Err(ListError::OutputListTooShort {
            path: output_list.to_path_buf(),
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }
    Ok(inputs.into_iter().zip(outputs).collect())
}
