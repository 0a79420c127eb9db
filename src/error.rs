use thiserror::Error;

use crate::Column;

/// Errors raised while loading a road map from a tabular source.
/// Lines are 1-based and refer to the position of the row in the source.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Road map I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Road map is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: missing column `{column}`")]
    MissingColumn { line: u64, column: Column },
    #[error("Line {line}: location in column `{column}` has no name")]
    EmptyLocation { line: u64, column: Column },
    #[error("Line {line}: `{value}` in column `{column}` is not a valid number")]
    InvalidNumber {
        line: u64,
        column: Column,
        value: String,
    },
    #[error("Line {line}: speed must be greater than zero")]
    ZeroSpeed { line: u64 },
}
