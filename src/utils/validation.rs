//! Input validation.
//!
//! Checks run before anything is loaded: counts must be non-negative, both
//! input files must be readable, and the name file must hold at least as
//! many names as aliens requested.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("number of iterations cannot be negative (got {0})")]
    NegativeIterations(i64),
    #[error("number of aliens cannot be negative (got {0})")]
    NegativeAliens(i64),
    #[error("unable to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("alien name file must contain at least {requested} names, found {available}")]
    NotEnoughNames { requested: usize, available: usize },
}

/// Counts newline-terminated lines
fn count_lines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| **b == b'\n').count()
}

fn read(path: &Path) -> Result<Vec<u8>, ValidationError> {
    fs::read(path).map_err(|source| ValidationError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Validates command-line inputs
///
/// # Arguments
/// * `iterations` - Requested round budget
/// * `aliens` - Requested number of aliens
/// * `names_path` - File with one alien name per line
/// * `world_path` - World map file
///
/// # Returns
/// * `Ok(())` if the run can start
/// * `Err(ValidationError)` describing the first problem found
pub fn validate_inputs(
    iterations: i64,
    aliens: i64,
    names_path: &Path,
    world_path: &Path,
) -> Result<(), ValidationError> {
    if iterations < 0 {
        return Err(ValidationError::NegativeIterations(iterations));
    }
    if aliens < 0 {
        return Err(ValidationError::NegativeAliens(aliens));
    }

    let requested = aliens as usize;
    let available = count_lines(&read(names_path)?);
    if available < requested {
        return Err(ValidationError::NotEnoughNames {
            requested,
            available,
        });
    }

    read(world_path)?;
    Ok(())
}
